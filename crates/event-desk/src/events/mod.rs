//! Event directory: the fetched event list and its client-side filtering.

mod draft;

pub use draft::{DraftError, EventDraft, EventUpdate};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::roster::opaque_id;

/// One event row as served by the directory endpoint. Descriptive fields
/// are optional on the wire; listings render placeholders for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: String,
    pub event_date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub entry_fee: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub organizer_contact: String,
    #[serde(default, deserialize_with = "lenient_optional_amount")]
    pub seats: Option<u32>,
}

/// Directory search state: title text plus tag and fee-range constraints,
/// all optional, composed with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub search: String,
    pub tag: Option<String>,
    pub min_fee: Option<u32>,
    pub max_fee: Option<u32>,
}

impl EventQuery {
    pub fn matches(&self, event: &Event) -> bool {
        let title_hit = event
            .title
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let tag_hit = self.tag.as_deref().map_or(true, |tag| {
            tag.is_empty() || event.tags.to_lowercase().contains(&tag.to_lowercase())
        });
        let above_min = self.min_fee.map_or(true, |min| event.entry_fee >= min);
        let below_max = self.max_fee.map_or(true, |max| event.entry_fee <= max);

        title_hit && tag_hit && above_min && below_max
    }
}

/// Order-preserving directory selection.
pub fn visible<'a>(events: &'a [Event], query: &EventQuery) -> Vec<&'a Event> {
    events.iter().filter(|event| query.matches(event)).collect()
}

/// Events strictly after `today`, in list order, capped at `limit`. The
/// public landing page shows the first three.
pub fn upcoming(events: &[Event], today: NaiveDate, limit: usize) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.event_date > today)
        .take(limit)
        .collect()
}

/// The fee sometimes arrives as `"150"` rather than `150`.
fn lenient_amount<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    amount_from_value(&value).ok_or_else(|| {
        serde::de::Error::custom(format!("expected a non-negative amount, got {value}"))
    })
}

fn lenient_optional_amount<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(raw) => amount_from_value(&raw).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("expected a non-negative amount, got {raw}"))
        }),
    }
}

fn amount_from_value(value: &serde_json::Value) -> Option<u32> {
    match value {
        serde_json::Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    }
}
