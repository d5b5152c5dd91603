//! Client-side validation of the registration form.
//!
//! Every rule runs on every call so that the user sees all problems at once.
//! Membership is never validated because the form can only hold a known tier.

use super::form::{Field, FormData};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Invalid phone number format";

/// Counted in Unicode scalar values, so one emoji is one character.
const NAME_MIN_CHARS: usize = 2;

/// Per-field validation messages. A field without an entry is valid.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<Field, String>,
}

impl FieldErrors {
    /// Return the message for a field if it currently has one.
    ///
    pub fn get(&self, field: Field) -> Option<&str> {
        self.messages
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Record a message for a field. Empty messages clear the entry.
    ///
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.messages.remove(&field);
        } else {
            self.messages.insert(field, message);
        }
    }

    /// Clear the message for a field, returning whether one was present.
    ///
    pub fn clear(&mut self, field: Field) -> bool {
        self.messages.remove(&field).is_some()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?[0-9\s-]+$").expect("phone pattern compiles"))
}

fn validate_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some(NAME_REQUIRED)
    } else if name.chars().count() < NAME_MIN_CHARS {
        Some(NAME_TOO_SHORT)
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !email_pattern().is_match(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn validate_phone_number(phone_number: &str) -> Option<&'static str> {
    if phone_number.trim().is_empty() {
        Some(PHONE_REQUIRED)
    } else if !phone_pattern().is_match(phone_number) {
        Some(PHONE_INVALID)
    } else {
        None
    }
}

/// Validate every text field of the form and return the messages for the
/// fields that failed. An empty result means the form can be submitted.
///
pub fn validate(form: &FormData) -> FieldErrors {
    let checks = [
        (Field::Name, validate_name(&form.name)),
        (Field::Email, validate_email(&form.email)),
        (Field::PhoneNumber, validate_phone_number(&form.phone_number)),
    ];

    let mut errors = FieldErrors::default();
    for (field, message) in checks {
        if let Some(message) = message {
            errors.insert(field, message);
        }
    }
    errors
}
