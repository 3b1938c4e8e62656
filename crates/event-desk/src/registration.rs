//! Candidate registration form and its pre-submission checks.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::roster::Gender;

/// Validation errors raised before a registration is forwarded.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("please fill in all fields (missing: {0})")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("phone number should be at least {minimum} digits")]
    PhoneTooShort { minimum: usize },
}

const MINIMUM_PHONE_DIGITS: usize = 10;

/// A complete candidate registration as posted to the registration
/// endpoint. Wire names follow the endpoint's camelCase contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "fatherName")]
    pub father_name: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub role: String,
    pub gender: Gender,
    pub address: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub event_id: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), RegistrationError> {
        let required: [(&'static str, &str); 10] = [
            ("full_name", &self.full_name),
            ("father_name", &self.father_name),
            ("email", &self.email),
            ("phone_number", &self.phone_number),
            ("role", &self.role),
            ("address", &self.address),
            ("city", &self.city),
            ("district", &self.district),
            ("state", &self.state),
            ("event_id", &self.event_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(RegistrationError::MissingField(name));
            }
        }

        if !email_pattern().is_match(&self.email) {
            return Err(RegistrationError::InvalidEmail);
        }

        if self.phone_number.len() < MINIMUM_PHONE_DIGITS {
            return Err(RegistrationError::PhoneTooShort {
                minimum: MINIMUM_PHONE_DIGITS,
            });
        }

        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").expect("pattern compiles")
    })
}
