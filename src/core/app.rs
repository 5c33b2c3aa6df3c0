use crate::config::Timing;
use crate::core::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue, Pending};
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::form::Registration;
use crate::submit::Submitter;
use crate::terminal::{KeyEvent, Terminal};
use crate::ui::frame::Frame;
use crate::ui::render_view::RenderView;
use crate::ui::renderer::Renderer;
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use chrono::NaiveDate;
use std::io;
use std::time::Instant;
use tracing::{debug, error};

pub struct App<S: Submitter> {
    pub state: AppState,
    pub renderer: Renderer,
    action_bindings: ActionBindings,
    event_queue: EventQueue,
    theme: Theme,
    timing: Timing,
    spinner: Spinner,
    submitter: S,
    submitted: Vec<Registration>,
}

impl<S: Submitter> App<S> {
    pub fn new(timing: Timing, today: NaiveDate, submitter: S) -> Self {
        Self {
            state: AppState::new(today),
            renderer: Renderer::new(),
            action_bindings: ActionBindings::new(),
            event_queue: EventQueue::new(),
            theme: Theme::default_theme(),
            timing,
            spinner: Spinner::new(),
            submitter,
            submitted: Vec::new(),
        }
    }

    /// Quit after the first successful submission.
    pub fn with_exit_after_success(mut self, exit: bool) -> Self {
        self.state.exit_after_success = exit;
        self
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut processed_any = false;
        while let Some(event) = self.event_queue.next_ready(now) {
            self.dispatch_event(event);
            processed_any = true;
        }

        if self.state.form.is_submitting() {
            self.spinner.tick();
            processed_any = true;
        } else {
            self.spinner.reset();
        }
        processed_any
    }

    pub fn frame(&self) -> Frame {
        RenderView::from_state(&self.state, &self.spinner).build(&self.theme)
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let frame = self.frame();
        self.renderer.render(&frame, terminal)
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.event_queue.emit(AppEvent::Key(key_event));
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    pub fn is_submission_pending(&self) -> bool {
        self.event_queue.is_pending(Pending::Submission)
    }

    pub fn submitted(&self) -> &[Registration] {
        &self.submitted
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    fn dispatch_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => {
                if !self.state.engine.focused_captures(&key_event) {
                    if let Some(action) = self.action_bindings.handle_key(&key_event) {
                        self.reduce(action);
                        return;
                    }
                }
                self.reduce(Action::InputKey(key_event));
            }
            AppEvent::Action(action) => self.reduce(action),
            AppEvent::SubmissionDue(registration) => {
                let result = self.submitter.submit(&registration);
                match &result {
                    Ok(receipt) => {
                        debug!(at = %receipt.submitted_at, "submission delivered");
                        self.submitted.push(registration);
                    }
                    Err(err) => error!(%err, "submission failed"),
                }
                self.reduce(Action::SubmissionFinished(
                    result.map_err(|err| err.to_string()),
                ));
            }
            AppEvent::InputChanged { slot, value } => {
                debug!(?slot, %value, "input changed");
            }
            AppEvent::FocusChanged { from, to } => {
                debug!(?from, ?to, "focus changed");
            }
        }
    }

    fn reduce(&mut self, action: Action) {
        let effects = Reducer::reduce(&mut self.state, action, &self.timing);
        self.apply_effects(effects);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.event_queue.emit(event),
                Effect::EmitAfter(event, delay) => self.event_queue.emit_after(event, delay),
                Effect::Cancel(pending) => {
                    self.event_queue.cancel(pending);
                }
            }
        }
    }
}
