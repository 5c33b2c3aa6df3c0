use crate::form::field::{Hobby, TextField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub hobbies: BTreeSet<Hobby>,
    pub other_hobby: String,
    pub email: String,
    pub note: String,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::BirthDate => &self.birth_date,
            TextField::Email => &self.email,
            TextField::Note => &self.note,
        }
    }

    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::BirthDate => &mut self.birth_date,
            TextField::Email => &mut self.email,
            TextField::Note => &mut self.note,
        }
    }

    pub fn has_hobby(&self, hobby: Hobby) -> bool {
        self.hobbies.contains(&hobby)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds the submission payload. Text is trimmed, the date is passed through.
    pub fn registration(&self) -> Registration {
        Registration {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            birth_date: self.birth_date.clone(),
            hobbies: self.hobbies.iter().copied().collect(),
            other_hobby: self.other_hobby.trim().to_string(),
            email: self.email.trim().to_string(),
            note: self.note.trim().to_string(),
        }
    }
}

/// Payload handed to a [`crate::submit::Submitter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub hobbies: Vec<Hobby>,
    pub other_hobby: String,
    pub email: String,
    pub note: String,
}
