use crate::core::event::Action;
use crate::core::form_engine::Slot;
use crate::form::Registration;
use crate::terminal::KeyEvent;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Key(KeyEvent),
    Action(Action),
    SubmissionDue(Registration),
    InputChanged { slot: Slot, value: String },
    FocusChanged { from: Slot, to: Slot },
}

/// Scheduled work that can be withdrawn before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Submission,
    Shake,
}

impl Pending {
    pub fn matches(self, event: &AppEvent) -> bool {
        match self {
            Pending::Submission => matches!(event, AppEvent::SubmissionDue(_)),
            Pending::Shake => matches!(event, AppEvent::Action(Action::StopShake)),
        }
    }
}

#[derive(Debug, Clone)]
struct ScheduledEvent {
    due: Instant,
    event: AppEvent,
}

#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<AppEvent>,
    scheduled: Vec<ScheduledEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn emit_after(&mut self, event: AppEvent, delay: Duration) {
        self.emit_at(event, Instant::now() + delay);
    }

    pub fn emit_at(&mut self, event: AppEvent, due: Instant) {
        self.scheduled.push(ScheduledEvent { due, event });
    }

    pub fn cancel(&mut self, pending: Pending) -> usize {
        let before = self.queue.len() + self.scheduled.len();
        self.queue.retain(|queued| !pending.matches(queued));
        self.scheduled
            .retain(|scheduled| !pending.matches(&scheduled.event));
        before - (self.queue.len() + self.scheduled.len())
    }

    pub fn is_pending(&self, pending: Pending) -> bool {
        self.queue.iter().any(|queued| pending.matches(queued))
            || self
                .scheduled
                .iter()
                .any(|scheduled| pending.matches(&scheduled.event))
    }

    pub fn next_ready(&mut self, now: Instant) -> Option<AppEvent> {
        self.move_due_to_queue(now);
        self.queue.pop_front()
    }

    fn move_due_to_queue(&mut self, now: Instant) {
        let mut due: Vec<ScheduledEvent> = Vec::new();
        self.scheduled.retain(|scheduled| {
            if scheduled.due <= now {
                due.push(scheduled.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|scheduled| scheduled.due);
        self.queue.extend(due.into_iter().map(|scheduled| scheduled.event));
    }
}

#[cfg(test)]
mod tests {
    use super::{AppEvent, EventQueue, Pending};
    use crate::core::event::Action;
    use std::time::{Duration, Instant};

    #[test]
    fn scheduled_events_wait_until_due() {
        let mut queue = EventQueue::new();
        let start = Instant::now();
        queue.emit_at(AppEvent::Action(Action::StopShake), start + Duration::from_millis(400));
        queue.emit(AppEvent::Action(Action::NextInput));

        assert_eq!(
            queue.next_ready(start),
            Some(AppEvent::Action(Action::NextInput))
        );
        assert_eq!(queue.next_ready(start), None);
        assert_eq!(
            queue.next_ready(start + Duration::from_millis(400)),
            Some(AppEvent::Action(Action::StopShake))
        );
    }

    #[test]
    fn due_events_fire_in_due_order() {
        let mut queue = EventQueue::new();
        let start = Instant::now();
        queue.emit_at(AppEvent::Action(Action::Exit), start + Duration::from_millis(20));
        queue.emit_at(AppEvent::Action(Action::StopShake), start + Duration::from_millis(10));

        let later = start + Duration::from_millis(50);
        assert_eq!(
            queue.next_ready(later),
            Some(AppEvent::Action(Action::StopShake))
        );
        assert_eq!(queue.next_ready(later), Some(AppEvent::Action(Action::Exit)));
    }

    #[test]
    fn cancel_removes_only_matching_events() {
        let mut queue = EventQueue::new();
        let start = Instant::now();
        queue.emit_at(AppEvent::Action(Action::StopShake), start);
        queue.emit_at(AppEvent::Action(Action::Exit), start);

        assert!(queue.is_pending(Pending::Shake));
        assert_eq!(queue.cancel(Pending::Shake), 1);
        assert!(!queue.is_pending(Pending::Shake));
        assert_eq!(queue.cancel(Pending::Submission), 0);
        assert_eq!(queue.next_ready(start), Some(AppEvent::Action(Action::Exit)));
    }
}
