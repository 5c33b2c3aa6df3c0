use serde::{Deserialize, Serialize};
use std::fmt;

/// Every field that carries its own error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    BirthDate,
    Hobbies,
    Email,
    Note,
}

impl FieldId {
    /// Form order, which is also the order errors are reported in.
    pub const ALL: [FieldId; 6] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::BirthDate,
        FieldId::Hobbies,
        FieldId::Email,
        FieldId::Note,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::BirthDate => "birthDate",
            FieldId::Hobbies => "hobbies",
            FieldId::Email => "email",
            FieldId::Note => "note",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::BirthDate => "Birth Date",
            FieldId::Hobbies => "Hobbies",
            FieldId::Email => "Email",
            FieldId::Note => "Note",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fields edited as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    FirstName,
    LastName,
    BirthDate,
    Email,
    Note,
}

impl TextField {
    pub const ALL: [TextField; 5] = [
        TextField::FirstName,
        TextField::LastName,
        TextField::BirthDate,
        TextField::Email,
        TextField::Note,
    ];

    pub fn field(self) -> FieldId {
        self.into()
    }
}

impl From<TextField> for FieldId {
    fn from(value: TextField) -> Self {
        match value {
            TextField::FirstName => FieldId::FirstName,
            TextField::LastName => FieldId::LastName,
            TextField::BirthDate => FieldId::BirthDate,
            TextField::Email => FieldId::Email,
            TextField::Note => FieldId::Note,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hobby {
    Drawing,
    Singing,
    Dancing,
    Other,
}

impl Hobby {
    pub const ALL: [Hobby; 4] = [Hobby::Drawing, Hobby::Singing, Hobby::Dancing, Hobby::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Hobby::Drawing => "Drawing",
            Hobby::Singing => "Singing",
            Hobby::Dancing => "Dancing",
            Hobby::Other => "Other",
        }
    }
}

impl fmt::Display for Hobby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldId, Hobby, TextField};

    #[test]
    fn text_fields_map_onto_their_error_slots() {
        let mapped: Vec<FieldId> = TextField::ALL.iter().map(|f| f.field()).collect();
        assert!(!mapped.contains(&FieldId::Hobbies));
        assert_eq!(mapped.len(), 5);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let names: Vec<&str> = FieldId::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            ["firstName", "lastName", "birthDate", "hobbies", "email", "note"]
        );
        assert_eq!(
            serde_json::to_string(&FieldId::BirthDate).expect("serialize"),
            "\"birthDate\""
        );
    }

    #[test]
    fn hobbies_serialize_by_display_name() {
        assert_eq!(
            serde_json::to_string(&Hobby::Other).expect("serialize"),
            "\"Other\""
        );
        assert!(Hobby::Drawing < Hobby::Other);
    }
}
