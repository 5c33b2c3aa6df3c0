use crate::core::form_engine::FormEngine;
use crate::form::FormState;
use chrono::NaiveDate;

pub struct AppState {
    pub form: FormState,
    pub engine: FormEngine,
    pub shaking: bool,
    pub should_exit: bool,
    pub exit_after_success: bool,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: FormState::new(),
            engine: FormEngine::new(today),
            shaking: false,
            should_exit: false,
            exit_after_success: false,
        }
    }
}
