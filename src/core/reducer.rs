use crate::config::Timing;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, Pending};
use crate::core::form_event::FormEvent;
use crate::core::state::AppState;
use crate::form::SubmitAttempt;
use crate::submit::Receipt;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Emit(AppEvent),
    EmitAfter(AppEvent, Duration),
    Cancel(Pending),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action, timing: &Timing) -> Vec<Effect> {
        match action {
            Action::Exit => {
                state.should_exit = true;
                Self::cancel_submission(state)
            }
            Action::Cancel => {
                if state.form.is_submitting() {
                    return Self::cancel_submission(state);
                }
                state.should_exit = true;
                vec![]
            }
            Action::NextInput => {
                let events = state.engine.move_focus(&mut state.form, 1);
                Self::reduce_form_events(state, events, timing)
            }
            Action::PrevInput => {
                let events = state.engine.move_focus(&mut state.form, -1);
                Self::reduce_form_events(state, events, timing)
            }
            Action::Submit => Self::handle_submit(state, timing),
            Action::DeleteWord => {
                let events = state.engine.handle_delete_word(&mut state.form, false);
                Self::reduce_form_events(state, events, timing)
            }
            Action::DeleteWordForward => {
                let events = state.engine.handle_delete_word(&mut state.form, true);
                Self::reduce_form_events(state, events, timing)
            }
            Action::InputKey(key_event) => {
                let events = state.engine.handle_key(&mut state.form, key_event);
                Self::reduce_form_events(state, events, timing)
            }
            Action::StopShake => {
                state.shaking = false;
                vec![]
            }
            Action::SubmissionFinished(result) => Self::handle_finished(state, result),
        }
    }

    fn reduce_form_events(
        state: &mut AppState,
        events: Vec<FormEvent>,
        timing: &Timing,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut submit = false;

        for event in events {
            match event {
                FormEvent::InputChanged { slot, value } => {
                    effects.push(Effect::Emit(AppEvent::InputChanged { slot, value }));
                }
                FormEvent::FocusChanged { from, to } => {
                    effects.push(Effect::Emit(AppEvent::FocusChanged { from, to }));
                }
                FormEvent::SubmitRequested => submit = true,
            }
        }

        if submit {
            effects.extend(Self::handle_submit(state, timing));
        }
        effects
    }

    fn handle_submit(state: &mut AppState, timing: &Timing) -> Vec<Effect> {
        match state.form.submit() {
            SubmitAttempt::Accepted(registration) => {
                info!(delay_ms = timing.submit_delay.as_millis() as u64, "submission scheduled");
                vec![Effect::EmitAfter(
                    AppEvent::SubmissionDue(registration),
                    timing.submit_delay,
                )]
            }
            SubmitAttempt::Rejected { first_invalid } => {
                let invalid: Vec<&str> = state
                    .form
                    .errors()
                    .invalid()
                    .map(|(field, _)| field.name())
                    .collect();
                warn!(?invalid, "submission rejected");

                state.shaking = true;
                let mut effects = vec![
                    Effect::Cancel(Pending::Shake),
                    Effect::EmitAfter(AppEvent::Action(Action::StopShake), timing.shake),
                ];
                let events = state.engine.focus_field(&mut state.form, first_invalid);
                effects.extend(Self::reduce_form_events(state, events, timing));
                effects
            }
            SubmitAttempt::Busy => {
                debug!("submission already in flight");
                vec![]
            }
        }
    }

    fn handle_finished(state: &mut AppState, result: Result<Receipt, String>) -> Vec<Effect> {
        let succeeded = result.is_ok();
        if !state.form.finish_submission(result) {
            debug!("submission result arrived after cancel");
            return vec![];
        }

        if succeeded {
            state.engine.sync_from(&state.form);
            let events = state.engine.focus_first(&mut state.form);
            if state.exit_after_success {
                state.should_exit = true;
            }
            return events
                .into_iter()
                .filter_map(|event| match event {
                    FormEvent::FocusChanged { from, to } => {
                        Some(Effect::Emit(AppEvent::FocusChanged { from, to }))
                    }
                    _ => None,
                })
                .collect();
        }
        vec![]
    }

    fn cancel_submission(state: &mut AppState) -> Vec<Effect> {
        if !state.form.cancel_submission() {
            return vec![];
        }
        info!("submission cancelled");
        vec![Effect::Cancel(Pending::Submission)]
    }
}

#[cfg(test)]
mod tests {
    use super::{Effect, Reducer};
    use crate::config::Timing;
    use crate::core::event::Action;
    use crate::core::event_queue::{AppEvent, Pending};
    use crate::core::form_engine::Slot;
    use crate::core::state::AppState;
    use crate::form::{FieldId, Phase, TextField};
    use crate::submit::Receipt;
    use crate::terminal::{KeyCode, KeyEvent};
    use chrono::{Local, NaiveDate};

    fn state() -> AppState {
        AppState::new(NaiveDate::from_ymd_opt(2026, 10, 18).expect("date"))
    }

    fn fill(state: &mut AppState) {
        let form = &mut state.form;
        form.edit_text(TextField::FirstName, "Ada");
        form.edit_text(TextField::LastName, "Lovelace");
        form.edit_text(TextField::BirthDate, "1990-04-01");
        form.edit_text(TextField::Email, "ada@example.org");
        form.edit_text(TextField::Note, "hi");
        form.toggle_hobby(crate::form::Hobby::Singing);
        state.engine.sync_from(&state.form);
    }

    #[test]
    fn invalid_submit_shakes_and_focuses_the_first_error() {
        let mut state = state();
        state.form.edit_text(TextField::FirstName, "Ada");
        state.engine.sync_from(&state.form);

        let timing = Timing::default();
        let effects = Reducer::reduce(&mut state, Action::Submit, &timing);

        assert!(state.shaking);
        assert_eq!(state.form.phase(), &Phase::Invalid);
        assert_eq!(state.engine.focused_slot(), Slot::Text(TextField::LastName));
        assert_eq!(effects[0], Effect::Cancel(Pending::Shake));
        assert_eq!(
            effects[1],
            Effect::EmitAfter(AppEvent::Action(Action::StopShake), timing.shake)
        );
        assert!(!effects.iter().any(|effect| matches!(
            effect,
            Effect::EmitAfter(AppEvent::SubmissionDue(_), _)
        )));

        Reducer::reduce(&mut state, Action::StopShake, &timing);
        assert!(!state.shaking);
    }

    #[test]
    fn valid_submit_schedules_delivery() {
        let mut state = state();
        fill(&mut state);

        let timing = Timing::default();
        let effects = Reducer::reduce(&mut state, Action::Submit, &timing);
        assert_eq!(state.form.phase(), &Phase::Submitting);
        assert!(matches!(
            effects.as_slice(),
            [Effect::EmitAfter(AppEvent::SubmissionDue(_), delay)] if *delay == timing.submit_delay
        ));

        assert!(Reducer::reduce(&mut state, Action::Submit, &timing).is_empty());
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut state = state();
        fill(&mut state);
        let timing = Timing::default();
        Reducer::reduce(&mut state, Action::Submit, &timing);

        let effects = Reducer::reduce(
            &mut state,
            Action::InputKey(KeyEvent::plain(KeyCode::Char('x'))),
            &timing,
        );
        assert!(effects.is_empty());
        assert_eq!(state.form.values().first_name, "Ada");
    }

    #[test]
    fn escape_cancels_an_in_flight_submission_before_exiting() {
        let mut state = state();
        fill(&mut state);
        let timing = Timing::default();
        Reducer::reduce(&mut state, Action::Submit, &timing);

        let effects = Reducer::reduce(&mut state, Action::Cancel, &timing);
        assert_eq!(effects, vec![Effect::Cancel(Pending::Submission)]);
        assert_eq!(state.form.phase(), &Phase::Editing);
        assert!(!state.should_exit);
        assert_eq!(state.form.values().first_name, "Ada");

        Reducer::reduce(&mut state, Action::Cancel, &timing);
        assert!(state.should_exit);
    }

    #[test]
    fn success_resets_the_form_and_widgets() {
        let mut state = state();
        fill(&mut state);
        let timing = Timing::default();
        Reducer::reduce(&mut state, Action::Submit, &timing);

        let receipt = Receipt {
            submitted_at: Local::now(),
        };
        Reducer::reduce(&mut state, Action::SubmissionFinished(Ok(receipt)), &timing);

        assert_eq!(state.form.phase(), &Phase::Success);
        assert!(state.form.values().is_empty());
        assert_eq!(state.form.visible_error(FieldId::FirstName), None);
        assert_eq!(
            state
                .engine
                .widget(Slot::Text(TextField::FirstName))
                .map(|widget| widget.value()),
            Some(String::new())
        );
    }

    #[test]
    fn failure_keeps_the_values() {
        let mut state = state();
        fill(&mut state);
        let timing = Timing::default();
        Reducer::reduce(&mut state, Action::Submit, &timing);
        Reducer::reduce(
            &mut state,
            Action::SubmissionFinished(Err("server unavailable".into())),
            &timing,
        );

        assert_eq!(
            state.form.phase(),
            &Phase::Failed("server unavailable".into())
        );
        assert_eq!(state.form.values().last_name, "Lovelace");
    }
}
