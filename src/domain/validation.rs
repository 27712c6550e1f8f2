//! Field validation for the application form.
//!
//! Validation is a pure function of the entered values. Failures are
//! returned as data, keyed by field, and never raised.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::models::{ApplicationData, Field, FieldKind};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex")
});

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", required_subject(.0))]
    Required(Field),
    #[error("Email is invalid")]
    InvalidEmail,
}

fn required_subject(field: &Field) -> &'static str {
    match field {
        Field::FirstName => "First name",
        Field::LastName => "Last name",
        Field::Email => "Email",
        Field::Phone => "Phone number",
        Field::Position => "Position",
        Field::Experience => "Experience",
        Field::Message => "Message",
    }
}

/// Current validation failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// Checks a single field's value.
pub fn validate_field(field: Field, value: &str) -> Option<ValidationError> {
    match field.kind() {
        // Select values come from a fixed catalog, so only emptiness matters.
        FieldKind::Select(_) => value.is_empty().then_some(ValidationError::Required(field)),
        FieldKind::Text | FieldKind::TextArea => {
            if value.trim().is_empty() {
                Some(ValidationError::Required(field))
            } else if field == Field::Email && !EMAIL_PATTERN.is_match(value) {
                Some(ValidationError::InvalidEmail)
            } else {
                None
            }
        }
    }
}

/// Validates every field. The form is valid iff the result is empty.
pub fn validate(data: &ApplicationData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (field, value) in data.iter() {
        if let Some(error) = validate_field(field, value) {
            errors.insert(field, error);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_data() -> ApplicationData {
        ApplicationData {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            position: "backend".to_string(),
            experience: "3-5".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_valid_data_has_no_errors() {
        assert!(validate(&valid_data()).is_empty());
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = validate(&ApplicationData::default());
        assert_eq!(errors.len(), 7);
        for field in Field::ALL {
            assert_eq!(errors.get(field), Some(&ValidationError::Required(field)));
        }
    }

    #[test]
    fn test_required_text_fields_use_trimmed_value() {
        for field in [Field::FirstName, Field::LastName, Field::Phone, Field::Message] {
            for (value, fails) in [("", true), ("   ", true), ("\t\n", true), (" x ", false)] {
                let mut data = valid_data();
                data.set(field, value);
                let errors = validate(&data);
                assert_eq!(errors.contains(field), fails, "{field} = {value:?}");
                assert_eq!(errors.len(), usize::from(fails));
            }
        }
    }

    #[test]
    fn test_email_rules() {
        let check = |value: &str| validate_field(Field::Email, value);
        assert_eq!(check(""), Some(ValidationError::Required(Field::Email)));
        assert_eq!(check("  "), Some(ValidationError::Required(Field::Email)));
        assert_eq!(check("a@b"), Some(ValidationError::InvalidEmail));
        assert_eq!(check("a b@c"), Some(ValidationError::InvalidEmail));
        assert_eq!(check("a@b.c"), None);
        assert_eq!(check("first.last@sub.example.org"), None);
    }

    #[test]
    fn test_select_fields_only_require_a_value() {
        assert_eq!(
            validate_field(Field::Position, ""),
            Some(ValidationError::Required(Field::Position))
        );
        assert_eq!(validate_field(Field::Position, "backend"), None);
        assert_eq!(
            validate_field(Field::Experience, ""),
            Some(ValidationError::Required(Field::Experience))
        );
        assert_eq!(validate_field(Field::Experience, "5+"), None);
    }

    #[test]
    fn test_messages() {
        let msg = |field| ValidationError::Required(field).to_string();
        assert_eq!(msg(Field::FirstName), "First name is required");
        assert_eq!(msg(Field::LastName), "Last name is required");
        assert_eq!(msg(Field::Email), "Email is required");
        assert_eq!(msg(Field::Phone), "Phone number is required");
        assert_eq!(msg(Field::Position), "Position is required");
        assert_eq!(msg(Field::Experience), "Experience is required");
        assert_eq!(msg(Field::Message), "Message is required");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Email is invalid");
    }

    #[test]
    fn test_field_errors_remove_is_targeted() {
        let mut errors = validate(&ApplicationData::default());
        assert_eq!(errors.remove(Field::Email), Some(ValidationError::Required(Field::Email)));
        assert_eq!(errors.remove(Field::Email), None);
        assert_eq!(errors.len(), 6);
        assert!(errors.contains(Field::Phone));
    }
}
