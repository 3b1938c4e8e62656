use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validation errors raised before an event form is forwarded anywhere.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("please fill in all fields (missing: {0})")]
    MissingField(&'static str),
    #[error("seats must be a positive number")]
    NoSeats,
}

/// A complete event-creation submission. Wire names follow the creation
/// endpoint's camelCase contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: String,
    #[serde(rename = "eventDate")]
    pub event_date: NaiveDate,
    #[serde(rename = "registrationDeadline")]
    pub registration_deadline: NaiveDate,
    pub seats: u32,
    pub venue: String,
    #[serde(rename = "entryFee")]
    pub entry_fee: u32,
    #[serde(rename = "paymentLink")]
    pub payment_link: String,
    #[serde(rename = "organizerContact")]
    pub organizer_contact: String,
}

impl EventDraft {
    /// Every field is required; seats must be strictly positive. A zero
    /// entry fee is a valid free event.
    pub fn validate(&self) -> Result<(), DraftError> {
        let required: [(&'static str, &str); 8] = [
            ("user_id", &self.user_id),
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
            ("tags", &self.tags),
            ("venue", &self.venue),
            ("payment_link", &self.payment_link),
            ("organizer_contact", &self.organizer_contact),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(name));
            }
        }

        if self.seats == 0 {
            return Err(DraftError::NoSeats);
        }

        Ok(())
    }
}

/// The subset of fields the dashboard's inline edit can change, posted as
/// form fields to the update endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUpdate {
    pub id: String,
    pub title: String,
    pub tags: String,
    pub event_date: NaiveDate,
    pub entry_fee: u32,
}

impl EventUpdate {
    /// Form-encoded pairs in the order the legacy endpoint expects.
    pub fn form_fields(&self) -> [(&'static str, String); 5] {
        [
            ("id", self.id.clone()),
            ("title", self.title.clone()),
            ("tags", self.tags.clone()),
            ("event_date", self.event_date.format("%Y-%m-%d").to_string()),
            ("entry_fee", self.entry_fee.to_string()),
        ]
    }
}
