use crate::form::errors::{FieldErrors, TouchedFlags};
use crate::form::field::{FieldId, Hobby, TextField};
use crate::form::values::{FormValues, Registration};
use crate::submit::Receipt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Invalid,
    Submitting,
    Success,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    Accepted(Registration),
    Rejected { first_invalid: FieldId },
    Busy,
}

/// Values, errors and touch flags of one rendered form.
///
/// Errors are recomputed from the values after every mutation and are only
/// surfaced through [`FormState::visible_error`] once the field was touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
    touched: TouchedFlags,
    phase: Phase,
}

impl FormState {
    pub fn new() -> Self {
        let values = FormValues::default();
        Self {
            errors: FieldErrors::compute(&values),
            values,
            touched: TouchedFlags::untouched(),
            phase: Phase::Editing,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedFlags {
        &self.touched
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn edit_text(&mut self, field: TextField, value: impl Into<String>) -> bool {
        let value = value.into();
        self.mutate(|values| {
            let slot = values.text_mut(field);
            if *slot == value {
                return false;
            }
            *slot = value;
            true
        })
    }

    pub fn edit_other_hobby(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        self.mutate(|values| {
            if values.other_hobby == value {
                return false;
            }
            values.other_hobby = value;
            true
        })
    }

    pub fn set_hobby(&mut self, hobby: Hobby, checked: bool) -> bool {
        let changed = self.mutate(|values| {
            let changed = if checked {
                values.hobbies.insert(hobby)
            } else {
                values.hobbies.remove(&hobby)
            };
            if changed && hobby == Hobby::Other && !checked {
                values.other_hobby.clear();
            }
            changed
        });
        if changed {
            self.touched.touch(FieldId::Hobbies);
        }
        changed
    }

    pub fn toggle_hobby(&mut self, hobby: Hobby) -> bool {
        let checked = self.values.has_hobby(hobby);
        self.set_hobby(hobby, !checked)
    }

    pub fn touch(&mut self, field: FieldId) {
        self.touched.touch(field);
    }

    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        if self.touched.is_touched(field) {
            self.errors.message(field)
        } else {
            None
        }
    }

    pub fn submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::Busy;
        }

        self.errors = FieldErrors::compute(&self.values);
        self.touched.touch_all();

        match self.errors.first_invalid() {
            Some(first_invalid) => {
                self.phase = Phase::Invalid;
                SubmitAttempt::Rejected { first_invalid }
            }
            None => {
                self.phase = Phase::Submitting;
                SubmitAttempt::Accepted(self.values.registration())
            }
        }
    }

    pub fn finish_submission(&mut self, result: Result<Receipt, String>) -> bool {
        if !self.is_submitting() {
            return false;
        }
        match result {
            Ok(_) => {
                self.reset();
                self.phase = Phase::Success;
            }
            Err(message) => self.phase = Phase::Failed(message),
        }
        true
    }

    pub fn cancel_submission(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.phase = Phase::Editing;
        true
    }

    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors = FieldErrors::compute(&self.values);
        self.touched = TouchedFlags::untouched();
        self.phase = Phase::Editing;
    }

    fn mutate(&mut self, apply: impl FnOnce(&mut FormValues) -> bool) -> bool {
        if self.is_submitting() {
            return false;
        }
        if !apply(&mut self.values) {
            return false;
        }
        self.errors = FieldErrors::compute(&self.values);
        self.phase = Phase::Editing;
        true
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
