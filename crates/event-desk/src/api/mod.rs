//! Client for the remote event API. Every endpoint is a plain JSON
//! exchange; replies are either a bare array or a
//! `{status, message, data}` envelope.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::EventApiConfig;
use crate::events::{Event, EventDraft, EventUpdate};
use crate::registration::RegistrationForm;
use crate::roster::Candidate;
use crate::security::{Credentials, OperatorSession};

/// Failures observed at the remote boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to the event service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("event service answered HTTP {status}")]
    Http { status: reqwest::StatusCode },
    #[error("unexpected payload shape: {0}")]
    Shape(String),
    #[error("event service rejected the request: {0}")]
    Rejected(String),
}

/// The `{status, message, data}` reply convention. Older endpoints use a
/// boolean `success` flag instead of the textual status.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl ApiEnvelope {
    pub fn is_success(&self) -> bool {
        self.success == Some(true) || self.status.as_deref() == Some("success")
    }

    fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Handle to the remote event API: one configured client plus the base
/// URL. No bespoke timeout is set; the transport default applies.
#[derive(Debug, Clone)]
pub struct EventApi {
    client: reqwest::Client,
    base_url: String,
}

impl EventApi {
    pub fn new(config: &EventApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Candidate roster for one event.
    pub async fn candidates(&self, event_id: &str) -> Result<Vec<Candidate>, ApiError> {
        let payload = self
            .get_payload("get_candidates.php", &[("event_id", event_id)])
            .await?;
        rows_from_payload(payload)
    }

    /// Full event directory.
    pub async fn events(&self) -> Result<Vec<Event>, ApiError> {
        let payload = self.get_payload("event_details.php", &[]).await?;
        rows_from_payload(payload)
    }

    /// Forward a validated creation draft; returns the service message.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<String, ApiError> {
        let envelope = self.post_envelope("event_create.php", draft).await?;
        Ok(envelope.message_or("event created"))
    }

    /// Forward an inline edit from the dashboard.
    pub async fn update_event(&self, update: &EventUpdate) -> Result<String, ApiError> {
        tracing::debug!(event_id = %update.id, "updating event");
        let response = self
            .client
            .post(self.url("update_event.php"))
            .form(&update.form_fields())
            .send()
            .await?;
        let envelope = expect_envelope(check_status(response).await?)?;
        Ok(envelope.message_or("event updated"))
    }

    /// The deletion endpoint is a GET with the id in the query string.
    pub async fn delete_event(&self, event_id: &str) -> Result<String, ApiError> {
        tracing::debug!(%event_id, "deleting event");
        let payload = self.get_payload("delete_event.php", &[("id", event_id)]).await?;
        let envelope = expect_envelope(payload)?;
        Ok(envelope.message_or("event deleted"))
    }

    /// Forward a validated candidate registration; returns the service
    /// message shown to the registrant.
    pub async fn register_candidate(&self, form: &RegistrationForm) -> Result<String, ApiError> {
        let envelope = self.post_envelope("event_registration.php", form).await?;
        Ok(envelope.message_or("registration recorded"))
    }

    /// Check operator credentials; a success reply carries the operator id.
    pub async fn verify_security_key(
        &self,
        credentials: &Credentials,
    ) -> Result<OperatorSession, ApiError> {
        let envelope = self
            .post_envelope("verify_security_key.php", credentials)
            .await?;
        let operator_id = match envelope.id {
            Some(Value::String(id)) => id,
            Some(Value::Number(id)) => id.to_string(),
            _ => {
                return Err(ApiError::Shape(
                    "verification reply did not carry an operator id".to_string(),
                ))
            }
        };
        Ok(OperatorSession { operator_id })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_payload(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        tracing::debug!(%path, "fetching from event service");
        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await?;
        check_status(response).await
    }

    async fn post_envelope<B>(&self, path: &str, body: &B) -> Result<ApiEnvelope, ApiError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(%path, "posting to event service");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        expect_envelope(check_status(response).await?)
    }
}

async fn check_status(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Http { status });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| ApiError::Shape(format!("invalid JSON: {err}")))
}

/// List replies are a bare array or an envelope whose `data` is the
/// array; anything else is a shape error.
fn rows_from_payload<T: DeserializeOwned>(payload: Value) -> Result<Vec<T>, ApiError> {
    let rows = match payload {
        Value::Array(rows) => rows,
        Value::Object(_) => {
            let envelope: ApiEnvelope = serde_json::from_value(payload)
                .map_err(|err| ApiError::Shape(err.to_string()))?;
            if !envelope.is_success() && envelope.message.is_some() {
                return Err(ApiError::Rejected(envelope.message_or("request rejected")));
            }
            match envelope.data {
                Some(Value::Array(rows)) => rows,
                _ => {
                    return Err(ApiError::Shape(
                        "expected an array or an enveloped array".to_string(),
                    ))
                }
            }
        }
        other => {
            return Err(ApiError::Shape(format!(
                "expected an array of records, got {other}"
            )))
        }
    };

    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|err| ApiError::Shape(err.to_string())))
        .collect()
}

fn expect_envelope(payload: Value) -> Result<ApiEnvelope, ApiError> {
    let envelope: ApiEnvelope =
        serde_json::from_value(payload).map_err(|err| ApiError::Shape(err.to_string()))?;
    if envelope.is_success() {
        Ok(envelope)
    } else {
        Err(ApiError::Rejected(envelope.message_or("request rejected")))
    }
}
