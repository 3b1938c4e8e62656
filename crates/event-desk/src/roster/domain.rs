use serde::{Deserialize, Deserializer, Serialize};

/// Identifier wrapper for roster entries. The remote API serves ids as
/// either JSON numbers or strings, so deserialization accepts both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CandidateId(pub String);

impl<'de> Deserialize<'de> for CandidateId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        opaque_id(deserializer).map(CandidateId)
    }
}

/// One registered candidate row exactly as served for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub role: String,
    pub gender: String,
    pub city: String,
    pub address: String,
}

/// Enumerated gender values offered by the registration and filter forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Parse the exact form label; anything else is not a valid filter value.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Accepts `"17"` and `17` alike and yields the textual form.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or numeric id, got {other}"
        ))),
    }
}
