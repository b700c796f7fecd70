use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("valid phone regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];
}

/// What the visitor typed into the lead popup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Validation {
    pub errors: Vec<ValidationError>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The one message shown to the visitor.
    pub fn first_message(&self) -> Option<&'static str> {
        self.errors.first().map(|e| e.message)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl LeadForm {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// Errors come back in form order: name, email, phone.
    pub fn validate(&self) -> Validation {
        let mut errors = Vec::new();
        let mut fail = |field, message| errors.push(ValidationError { field, message });

        if self.name.trim().is_empty() {
            fail(Field::Name, "Your Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            fail(Field::Email, "Email is required");
        } else if !EMAIL_RE.is_match(email) {
            fail(Field::Email, "Please enter a valid email address");
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            fail(Field::Phone, "Phone number is required");
        } else {
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            if !PHONE_RE.is_match(phone) || !(7..=15).contains(&digits) {
                fail(Field::Phone, "Please enter a valid phone number");
            }
        }

        Validation { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        LeadForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "+91 98765-43210".into(),
            message: String::new(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        let validation = filled().validate();
        assert!(validation.is_valid());
        assert_eq!(validation.first_message(), None);
    }

    #[test]
    fn empty_name_is_reported_first() {
        let form = LeadForm {
            name: "   ".into(),
            email: "nope".into(),
            ..filled()
        };
        let validation = form.validate();
        assert!(!validation.is_valid());
        assert_eq!(validation.first_message(), Some("Your Name is required"));
        assert!(validation.has_error(Field::Name));
        assert!(validation.has_error(Field::Email));
        assert!(!validation.has_error(Field::Phone));
    }

    #[test]
    fn rejects_malformed_email() {
        let form = LeadForm {
            email: "asha@example".into(),
            ..filled()
        };
        assert_eq!(
            form.validate().first_message(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn phone_needs_enough_digits() {
        for phone in ["12345", "call me", "+1 (555) 010-99999999999"] {
            let form = LeadForm {
                phone: phone.into(),
                ..filled()
            };
            assert_eq!(
                form.validate().first_message(),
                Some("Please enter a valid phone number"),
                "{phone}"
            );
        }
        let form = LeadForm {
            phone: "(555) 010-9999".into(),
            ..filled()
        };
        assert!(form.validate().is_valid());
    }

    #[test]
    fn empty_form_lists_every_required_field() {
        let messages: Vec<_> = LeadForm::default()
            .validate()
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Your Name is required",
                "Email is required",
                "Phone number is required"
            ]
        );
    }
}
