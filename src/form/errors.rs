use crate::form::field::FieldId;
use crate::form::validators;
use crate::form::values::FormValues;
use indexmap::IndexMap;
use serde::Serialize;

/// One message per field in form order. An empty message means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<FieldId, String>);

impl FieldErrors {
    pub fn cleared() -> Self {
        Self(
            FieldId::ALL
                .iter()
                .map(|field| (*field, String::new()))
                .collect(),
        )
    }

    pub fn compute(values: &FormValues) -> Self {
        Self(
            FieldId::ALL
                .iter()
                .map(|field| {
                    let message = validators::validate_field(*field, values)
                        .err()
                        .unwrap_or_default();
                    (*field, message)
                })
                .collect(),
        )
    }

    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn is_valid(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    pub fn first_invalid(&self) -> Option<FieldId> {
        self.invalid().next().map(|(field, _)| field)
    }

    pub fn invalid(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl Default for FieldErrors {
    fn default() -> Self {
        Self::cleared()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TouchedFlags(IndexMap<FieldId, bool>);

impl TouchedFlags {
    pub fn untouched() -> Self {
        Self(FieldId::ALL.iter().map(|field| (*field, false)).collect())
    }

    pub fn touch(&mut self, field: FieldId) {
        self.0.insert(field, true);
    }

    pub fn touch_all(&mut self) {
        for flag in self.0.values_mut() {
            *flag = true;
        }
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.0.get(&field).copied().unwrap_or(false)
    }

    pub fn any(&self) -> bool {
        self.0.values().any(|flag| *flag)
    }
}

impl Default for TouchedFlags {
    fn default() -> Self {
        Self::untouched()
    }
}
