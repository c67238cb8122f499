//! Form fields and their validation rule

use serde::{Deserialize, Serialize};

use super::email::is_valid_email;

/// Input kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    /// Multi-line text; validated exactly like `Text`
    Textarea,
}

impl FieldKind {
    /// HTML `type` attribute for `<input>` elements
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Textarea => "text",
            Self::Email => "email",
        }
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    /// Required field is empty (after trimming)
    Required,
    /// Email field holds a non-empty value that is not an address
    InvalidEmail,
}

/// A labeled input of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default)]
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            value: String::new(),
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Check the field against its rule.
    ///
    /// Emptiness is checked before the email pattern, and an empty optional
    /// email field is valid.
    pub fn check(&self) -> Result<(), FieldIssue> {
        let value = self.trimmed();
        if self.required && value.is_empty() {
            return Err(FieldIssue::Required);
        }
        if self.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
            return Err(FieldIssue::InvalidEmail);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_value(field: Field, value: &str) -> Field {
        Field {
            value: value.to_string(),
            ..field
        }
    }

    #[test]
    fn test_required_blank_is_rejected() {
        let field = with_value(Field::text("name", "Name").required(), "   ");
        assert_eq!(field.check(), Err(FieldIssue::Required));
    }

    #[test]
    fn test_optional_blank_is_accepted() {
        assert_eq!(Field::text("subject", "Subject").check(), Ok(()));
        assert_eq!(Field::email("email", "Email").check(), Ok(()));
    }

    #[test]
    fn test_email_pattern_applies_to_trimmed_value() {
        let ok = with_value(Field::email("email", "Email"), "  a@b.com  ");
        assert_eq!(ok.check(), Ok(()));

        let bad = with_value(Field::email("email", "Email").required(), "a@b");
        assert_eq!(bad.check(), Err(FieldIssue::InvalidEmail));
    }

    #[test]
    fn test_text_fields_skip_email_pattern() {
        let field = with_value(Field::textarea("message", "Message").required(), "a@b");
        assert_eq!(field.check(), Ok(()));
    }

    #[test]
    fn test_input_type() {
        assert_eq!(FieldKind::Email.input_type(), "email");
        assert_eq!(FieldKind::Textarea.input_type(), "text");
    }
}
