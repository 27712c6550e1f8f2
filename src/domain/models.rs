use serde::{Deserialize, Serialize};

/// One selectable entry of a drop-down field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const POSITION_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "frontend", label: "Frontend Developer" },
    SelectOption { value: "backend", label: "Backend Developer" },
    SelectOption { value: "fullstack", label: "Full Stack Developer" },
    SelectOption { value: "designer", label: "UI/UX Designer" },
];

pub const EXPERIENCE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "0-1", label: "0-1 years" },
    SelectOption { value: "1-3", label: "1-3 years" },
    SelectOption { value: "3-5", label: "3-5 years" },
    SelectOption { value: "5+", label: "5+ years" },
];

/// How a field is edited and drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select(&'static [SelectOption]),
    TextArea,
}

/// The fixed set of inputs on the application form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Position,
    Experience,
    Message,
}

impl Field {
    /// All fields in the order they appear on the form.
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Position,
        Field::Experience,
        Field::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Position => "position",
            Field::Experience => "experience",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Position => "Position",
            Field::Experience => "Experience",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "Enter your first name",
            Field::LastName => "Enter your last name",
            Field::Email => "Enter your email",
            Field::Phone => "Enter your phone number",
            Field::Position => "Select position",
            Field::Experience => "Select experience",
            Field::Message => {
                "Tell us about yourself and why you're interested in this position"
            }
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Position => FieldKind::Select(POSITION_OPTIONS),
            Field::Experience => FieldKind::Select(EXPERIENCE_OPTIONS),
            Field::Message => FieldKind::TextArea,
            _ => FieldKind::Text,
        }
    }

    /// Index of this field within [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Values entered into the form. Unset values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub message: String,
}

impl ApplicationData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Position => &self.position,
            Field::Experience => &self.experience,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Position => &mut self.position,
            Field::Experience => &mut self.experience,
            Field::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Iterates `(field, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Display label for a select field's current value, if it names a known option.
    pub fn selected_label(&self, field: Field) -> Option<&'static str> {
        match field.kind() {
            FieldKind::Select(options) => {
                let value = self.get(field);
                options.iter().find(|opt| opt.value == value).map(|opt| opt.label)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_empty() {
        let data = ApplicationData::default();
        assert!(data.iter().all(|(_, value)| value.is_empty()));
        assert_eq!(data.iter().count(), 7);
    }

    #[test]
    fn test_set_and_get_each_field() {
        let mut data = ApplicationData::default();
        for field in Field::ALL {
            data.set(field, field.name());
        }
        for field in Field::ALL {
            assert_eq!(data.get(field), field.name());
        }
    }

    #[test]
    fn test_field_names_are_unique() {
        let names: std::collections::HashSet<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), Field::ALL.len());
    }

    #[test]
    fn test_index_matches_display_order() {
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_serializes_with_form_names() {
        let mut data = ApplicationData::default();
        data.first_name = "Ada".to_string();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["experience"], "");
    }

    #[test]
    fn test_selected_label() {
        let mut data = ApplicationData::default();
        assert_eq!(data.selected_label(Field::Position), None);
        data.set(Field::Position, "fullstack");
        assert_eq!(data.selected_label(Field::Position), Some("Full Stack Developer"));
        data.set(Field::Experience, "5+");
        assert_eq!(data.selected_label(Field::Experience), Some("5+ years"));
        assert_eq!(data.selected_label(Field::Email), None);
    }
}
