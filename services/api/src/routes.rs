use crate::infra::{parse_gender, AppState};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Extension, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use event_desk::api::EventApi;
use event_desk::error::AppError;
use event_desk::events::{self, Event, EventDraft, EventQuery, EventUpdate};
use event_desk::registration::RegistrationForm;
use event_desk::roster::{printable_document, table, Candidate, FetchStatus, RosterFilter, RosterStore};
use event_desk::security::Credentials;

pub(crate) const CANDIDATE_FETCH_NOTICE: &str =
    "Failed to fetch candidates. Please try again later.";
pub(crate) const EVENT_FETCH_NOTICE: &str = "Failed to fetch events. Please try again later.";
pub(crate) const NO_EVENTS: &str = "No events found!";

pub(crate) fn console_router(api: Arc<EventApi>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(
            "/api/v1/events",
            get(events_endpoint).post(create_event_endpoint),
        )
        .route(
            "/api/v1/events/:event_id",
            put(update_event_endpoint).delete(delete_event_endpoint),
        )
        .route("/api/v1/events/:event_id/roster", get(roster_view_endpoint))
        .route(
            "/api/v1/events/:event_id/roster/print",
            post(roster_print_endpoint),
        )
        .route("/api/v1/registrations", post(register_endpoint))
        .route("/api/v1/security/verify", post(verify_endpoint))
        .with_state(api)
}

/// Roster filter fields as they arrive from the query string. Empty
/// strings mean "unset", exactly like the blank form inputs they mirror.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RosterViewParams {
    #[serde(default)]
    pub(crate) search: Option<String>,
    #[serde(default)]
    pub(crate) gender: Option<String>,
    #[serde(default)]
    pub(crate) role: Option<String>,
    #[serde(default)]
    pub(crate) city: Option<String>,
    #[serde(default)]
    pub(crate) address: Option<String>,
}

impl RosterViewParams {
    fn into_filter(self) -> Result<RosterFilter, ConsoleRejection> {
        let gender = match self.gender.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                Some(parse_gender(raw).map_err(ConsoleRejection::InvalidGender)?)
            }
        };

        Ok(RosterFilter {
            search: self.search.unwrap_or_default(),
            gender,
            role: none_if_blank(self.role),
            city: none_if_blank(self.city),
            address: none_if_blank(self.address),
        })
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Rejections raised by the roster endpoints before any work happens.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ConsoleRejection {
    InvalidGender(String),
    /// The print region was never rendered; silently a no-op.
    NothingRendered,
}

impl IntoResponse for ConsoleRejection {
    fn into_response(self) -> Response {
        match self {
            ConsoleRejection::InvalidGender(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ConsoleRejection::NothingRendered => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterViewResponse {
    pub(crate) event_id: String,
    pub(crate) total: usize,
    pub(crate) visible: usize,
    pub(crate) candidates: Vec<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notice: Option<String>,
}

pub(crate) async fn roster_view_endpoint(
    State(api): State<Arc<EventApi>>,
    Path(event_id): Path<String>,
    Query(params): Query<RosterViewParams>,
) -> Result<Json<RosterViewResponse>, ConsoleRejection> {
    let filter = params.into_filter()?;

    let mut store = RosterStore::new();
    let status = store.load(&api, &event_id).await;
    *store.filter_mut() = filter;

    let candidates: Vec<Candidate> = store.visible().into_iter().cloned().collect();
    let visible = candidates.len();
    let notice = match status {
        FetchStatus::Failed { .. } => Some(CANDIDATE_FETCH_NOTICE.to_string()),
        _ => None,
    };

    Ok(Json(RosterViewResponse {
        event_id,
        total: store.candidates().len(),
        visible,
        placeholder: candidates.is_empty().then_some(table::NO_CANDIDATES),
        candidates,
        notice,
    }))
}

/// Same fields as the query-string filter, but in the request body since
/// printing is a POST.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RosterPrintRequest {
    #[serde(flatten)]
    pub(crate) filter: RosterViewParams,
}

pub(crate) async fn roster_print_endpoint(
    State(api): State<Arc<EventApi>>,
    Path(event_id): Path<String>,
    Json(request): Json<RosterPrintRequest>,
) -> Result<Html<String>, ConsoleRejection> {
    let filter = request.filter.into_filter()?;

    let mut store = RosterStore::new();
    let status = store.load(&api, &event_id).await;
    if matches!(status, FetchStatus::Failed { .. }) {
        // Nothing was rendered for this roster, so there is no region to
        // export.
        return Err(ConsoleRejection::NothingRendered);
    }
    *store.filter_mut() = filter;

    let region = table::render_html(&store.visible());
    Ok(Html(printable_document(&region)))
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EventListParams {
    #[serde(default)]
    pub(crate) search: Option<String>,
    #[serde(default)]
    pub(crate) tag: Option<String>,
    #[serde(default)]
    pub(crate) min_fee: Option<String>,
    #[serde(default)]
    pub(crate) max_fee: Option<String>,
}

impl EventListParams {
    fn into_query(self) -> EventQuery {
        EventQuery {
            search: self.search.unwrap_or_default(),
            tag: none_if_blank(self.tag),
            min_fee: self.min_fee.and_then(|raw| raw.trim().parse().ok()),
            max_fee: self.max_fee.and_then(|raw| raw.trim().parse().ok()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EventDirectoryResponse {
    pub(crate) total: usize,
    pub(crate) visible: usize,
    pub(crate) events: Vec<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) placeholder: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) notice: Option<String>,
}

pub(crate) async fn events_endpoint(
    State(api): State<Arc<EventApi>>,
    Query(params): Query<EventListParams>,
) -> Json<EventDirectoryResponse> {
    let query = params.into_query();

    match api.events().await {
        Ok(all) => {
            let visible: Vec<Event> = events::visible(&all, &query).into_iter().cloned().collect();
            Json(EventDirectoryResponse {
                total: all.len(),
                visible: visible.len(),
                placeholder: visible.is_empty().then_some(NO_EVENTS),
                events: visible,
                notice: None,
            })
        }
        Err(err) => {
            tracing::warn!(error = %err, "event directory fetch failed");
            Json(EventDirectoryResponse {
                total: 0,
                visible: 0,
                events: Vec::new(),
                placeholder: Some(NO_EVENTS),
                notice: Some(EVENT_FETCH_NOTICE.to_string()),
            })
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ActionReply {
    pub(crate) status: &'static str,
    pub(crate) message: String,
}

pub(crate) async fn create_event_endpoint(
    State(api): State<Arc<EventApi>>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<ActionReply>, AppError> {
    draft.validate()?;
    let message = api.create_event(&draft).await?;
    Ok(Json(ActionReply {
        status: "success",
        message,
    }))
}

/// Inline-edit fields accepted by the dashboard; the id comes from the
/// path.
#[derive(Debug, Deserialize)]
pub(crate) struct EventUpdateRequest {
    pub(crate) title: String,
    pub(crate) tags: String,
    pub(crate) event_date: NaiveDate,
    pub(crate) entry_fee: u32,
}

pub(crate) async fn update_event_endpoint(
    State(api): State<Arc<EventApi>>,
    Path(event_id): Path<String>,
    Json(request): Json<EventUpdateRequest>,
) -> Result<Json<ActionReply>, AppError> {
    let update = EventUpdate {
        id: event_id,
        title: request.title,
        tags: request.tags,
        event_date: request.event_date,
        entry_fee: request.entry_fee,
    };

    let message = api.update_event(&update).await?;
    Ok(Json(ActionReply {
        status: "success",
        message,
    }))
}

pub(crate) async fn delete_event_endpoint(
    State(api): State<Arc<EventApi>>,
    Path(event_id): Path<String>,
) -> Result<Json<ActionReply>, AppError> {
    let message = api.delete_event(&event_id).await?;
    Ok(Json(ActionReply {
        status: "success",
        message,
    }))
}

pub(crate) async fn register_endpoint(
    State(api): State<Arc<EventApi>>,
    Json(form): Json<RegistrationForm>,
) -> Result<Json<ActionReply>, AppError> {
    form.validate()?;
    let message = api.register_candidate(&form).await?;
    Ok(Json(ActionReply {
        status: "success",
        message,
    }))
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyReply {
    pub(crate) status: &'static str,
    pub(crate) id: String,
}

pub(crate) async fn verify_endpoint(
    State(api): State<Arc<EventApi>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<VerifyReply>, AppError> {
    credentials.validate()?;
    let session = api.verify_security_key(&credentials).await?;
    Ok(Json(VerifyReply {
        status: "success",
        id: session.operator_id,
    }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
