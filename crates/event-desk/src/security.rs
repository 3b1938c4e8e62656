//! Credential verification for administrative actions.

use serde::{Deserialize, Serialize};

/// Raised when a verification request is submitted with blank fields.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("both email and password are required")]
    MissingFields,
}

/// Operator credentials posted to the verification endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), CredentialError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(CredentialError::MissingFields);
        }
        Ok(())
    }
}

/// Successful verification yields the operator id, which the caller keeps
/// for subsequent event creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorSession {
    pub operator_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credentials_are_rejected() {
        let credentials = Credentials {
            email: String::new(),
            password: "secret".to_string(),
        };
        assert_eq!(credentials.validate(), Err(CredentialError::MissingFields));
    }

    #[test]
    fn filled_credentials_pass() {
        let credentials = Credentials {
            email: "admin@example.org".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(credentials.validate(), Ok(()));
    }
}
