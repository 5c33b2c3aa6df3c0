use crate::form::field::{FieldId, Hobby};
use crate::form::values::FormValues;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const BIRTH_DATE_REQUIRED: &str = "Birth date is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const NOTE_REQUIRED: &str = "Note is required";
pub const HOBBY_REQUIRED: &str = "Select at least one hobby";
pub const OTHER_HOBBY_REQUIRED: &str = "Please specify your other hobby";

// local@domain.suffix, no whitespace, a single '@'.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Like [`required`] but without trimming; whitespace counts as a value.
pub fn present(value: &str, message: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

pub fn email(value: &str, message: &str) -> Result<(), String> {
    if EMAIL_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

pub fn validate_hobbies(selected: &BTreeSet<Hobby>, other_text: &str) -> Result<(), String> {
    if selected.is_empty() {
        return Err(HOBBY_REQUIRED.to_string());
    }
    if selected.contains(&Hobby::Other) {
        return required(other_text, OTHER_HOBBY_REQUIRED);
    }
    Ok(())
}

pub fn validate_field(field: FieldId, values: &FormValues) -> Result<(), String> {
    match field {
        FieldId::FirstName => required(&values.first_name, FIRST_NAME_REQUIRED),
        FieldId::LastName => required(&values.last_name, LAST_NAME_REQUIRED),
        FieldId::BirthDate => present(&values.birth_date, BIRTH_DATE_REQUIRED),
        FieldId::Hobbies => validate_hobbies(&values.hobbies, &values.other_hobby),
        FieldId::Email => required(&values.email, EMAIL_REQUIRED)
            .and_then(|()| email(&values.email, EMAIL_INVALID)),
        FieldId::Note => required(&values.note, NOTE_REQUIRED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hobbies(list: &[Hobby]) -> BTreeSet<Hobby> {
        list.iter().copied().collect()
    }

    #[test]
    fn blank_text_fields_are_required() {
        for blank in ["", " ", "\t", "  \n "] {
            let values = FormValues {
                first_name: blank.into(),
                last_name: blank.into(),
                note: blank.into(),
                ..FormValues::default()
            };
            assert_eq!(
                validate_field(FieldId::FirstName, &values),
                Err(FIRST_NAME_REQUIRED.to_string())
            );
            assert_eq!(
                validate_field(FieldId::LastName, &values),
                Err(LAST_NAME_REQUIRED.to_string())
            );
            assert_eq!(
                validate_field(FieldId::Note, &values),
                Err(NOTE_REQUIRED.to_string())
            );
        }
    }

    #[test]
    fn non_blank_text_fields_pass() {
        let values = FormValues {
            first_name: " Ada".into(),
            last_name: "L ".into(),
            note: "x".into(),
            ..FormValues::default()
        };
        assert_eq!(validate_field(FieldId::FirstName, &values), Ok(()));
        assert_eq!(validate_field(FieldId::LastName, &values), Ok(()));
        assert_eq!(validate_field(FieldId::Note, &values), Ok(()));
    }

    #[test]
    fn birth_date_only_checks_presence() {
        let mut values = FormValues::default();
        assert_eq!(
            validate_field(FieldId::BirthDate, &values),
            Err(BIRTH_DATE_REQUIRED.to_string())
        );
        values.birth_date = "2999-01-01".into();
        assert_eq!(validate_field(FieldId::BirthDate, &values), Ok(()));
    }

    #[test]
    fn email_rules() {
        let check = |raw: &str| {
            let values = FormValues {
                email: raw.into(),
                ..FormValues::default()
            };
            validate_field(FieldId::Email, &values)
        };

        assert_eq!(check("a@b.co"), Ok(()));
        assert_eq!(check("  a@b.co  "), Ok(()));
        assert_eq!(check("first.last@sub.example.org"), Ok(()));
        assert_eq!(check("a@b"), Err(EMAIL_INVALID.to_string()));
        assert_eq!(check("a b@c.d"), Err(EMAIL_INVALID.to_string()));
        assert_eq!(check("a@@b.co"), Err(EMAIL_INVALID.to_string()));
        assert_eq!(check("@b.co"), Err(EMAIL_INVALID.to_string()));
        assert_eq!(check(""), Err(EMAIL_REQUIRED.to_string()));
        assert_eq!(check("   "), Err(EMAIL_REQUIRED.to_string()));
    }

    #[test]
    fn hobby_rules() {
        assert_eq!(
            validate_hobbies(&hobbies(&[]), ""),
            Err(HOBBY_REQUIRED.to_string())
        );
        assert_eq!(
            validate_hobbies(&hobbies(&[Hobby::Other]), ""),
            Err(OTHER_HOBBY_REQUIRED.to_string())
        );
        assert_eq!(
            validate_hobbies(&hobbies(&[Hobby::Other]), "   "),
            Err(OTHER_HOBBY_REQUIRED.to_string())
        );
        assert_eq!(validate_hobbies(&hobbies(&[Hobby::Other]), "Chess"), Ok(()));
        assert_eq!(validate_hobbies(&hobbies(&[Hobby::Drawing]), ""), Ok(()));
        // other text without the checkbox is simply carried along
        assert_eq!(validate_hobbies(&hobbies(&[Hobby::Singing]), "Chess"), Ok(()));
    }
}
