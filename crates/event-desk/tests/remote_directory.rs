use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use event_desk::api::{ApiError, EventApi};
use event_desk::config::EventApiConfig;
use event_desk::events::{visible, EventDraft, EventQuery};
use event_desk::registration::RegistrationForm;
use event_desk::roster::Gender;
use event_desk::security::Credentials;

async fn event_details() -> Json<Value> {
    Json(json!({
        "status": "success",
        "data": [
            {
                "id": "1",
                "title": "Music Concert",
                "tags": "music,live",
                "event_date": "2026-09-10",
                "entry_fee": "500"
            },
            {
                "id": 2,
                "title": "Tech Meetup",
                "tags": "tech",
                "event_date": "2026-08-01",
                "entry_fee": 0
            }
        ]
    }))
}

async fn event_create(Json(body): Json<Value>) -> Json<Value> {
    if body.get("title").and_then(Value::as_str) == Some("Music Concert") {
        Json(json!({ "status": "success", "message": "Event created" }))
    } else {
        Json(json!({ "status": "error", "message": "duplicate event title" }))
    }
}

async fn delete_event() -> Json<Value> {
    Json(json!({ "success": true, "message": "Event deleted" }))
}

async fn event_registration(Json(body): Json<Value>) -> Json<Value> {
    match body.get("fullName").and_then(Value::as_str) {
        Some(name) => Json(json!({
            "status": "success",
            "message": format!("Registered {name}")
        })),
        None => Json(json!({ "status": "error", "message": "missing name" })),
    }
}

async fn verify_security_key(Json(body): Json<Value>) -> Json<Value> {
    if body.get("password").and_then(Value::as_str) == Some("secret") {
        Json(json!({ "status": "success", "message": "verified", "id": 42 }))
    } else {
        Json(json!({ "status": "error", "message": "invalid credentials" }))
    }
}

async fn stub_api() -> EventApi {
    let router = Router::new()
        .route("/event_details.php", get(event_details))
        .route("/event_create.php", post(event_create))
        .route("/delete_event.php", get(delete_event))
        .route("/event_registration.php", post(event_registration))
        .route("/verify_security_key.php", post(verify_security_key));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub serves");
    });

    EventApi::new(&EventApiConfig {
        base_url: format!("http://{addr}"),
    })
    .expect("client builds")
}

fn concert_draft() -> EventDraft {
    EventDraft {
        user_id: "42".to_string(),
        title: "Music Concert".to_string(),
        description: "An evening of live music".to_string(),
        category: "Entertainment".to_string(),
        tags: "music,live".to_string(),
        event_date: "2026-09-10".parse().expect("valid date"),
        registration_deadline: "2026-09-01".parse().expect("valid date"),
        seats: 500,
        venue: "City Hall".to_string(),
        entry_fee: 500,
        payment_link: "https://pay.example/concert".to_string(),
        organizer_contact: "9876500000".to_string(),
    }
}

#[tokio::test]
async fn directory_fetch_decodes_enveloped_events_and_filters_locally() {
    let api = stub_api().await;
    let events = api.events().await.expect("events fetch");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].entry_fee, 500);

    let query = EventQuery {
        tag: Some("tech".to_string()),
        ..EventQuery::default()
    };
    let hits = visible(&events, &query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Tech Meetup");
}

#[tokio::test]
async fn create_event_returns_the_service_message() {
    let api = stub_api().await;
    let draft = concert_draft();
    draft.validate().expect("draft is complete");

    let message = api.create_event(&draft).await.expect("creation accepted");
    assert_eq!(message, "Event created");
}

#[tokio::test]
async fn create_event_rejection_surfaces_the_message() {
    let api = stub_api().await;
    let mut draft = concert_draft();
    draft.title = "Duplicate".to_string();

    let err = api.create_event(&draft).await.expect_err("rejected");
    assert!(matches!(err, ApiError::Rejected(message) if message == "duplicate event title"));
}

#[tokio::test]
async fn delete_event_accepts_the_legacy_success_flag() {
    let api = stub_api().await;
    let message = api.delete_event("1").await.expect("deletion accepted");
    assert_eq!(message, "Event deleted");
}

#[tokio::test]
async fn registration_round_trips_the_service_message() {
    let api = stub_api().await;
    let form = RegistrationForm {
        full_name: "Asha Rao".to_string(),
        father_name: "Prakash Rao".to_string(),
        email: "asha.rao@example.org".to_string(),
        phone_number: "9876500000".to_string(),
        role: "Volunteer".to_string(),
        gender: Gender::Female,
        address: "MG Road".to_string(),
        city: "Lucknow".to_string(),
        district: "Lucknow".to_string(),
        state: "Uttar Pradesh".to_string(),
        event_id: "1".to_string(),
    };
    form.validate().expect("form is complete");

    let message = api
        .register_candidate(&form)
        .await
        .expect("registration accepted");
    assert_eq!(message, "Registered Asha Rao");
}

#[tokio::test]
async fn verification_yields_the_operator_id() {
    let api = stub_api().await;
    let credentials = Credentials {
        email: "admin@example.org".to_string(),
        password: "secret".to_string(),
    };
    credentials.validate().expect("credentials present");

    let session = api
        .verify_security_key(&credentials)
        .await
        .expect("verification succeeds");
    assert_eq!(session.operator_id, "42");
}

#[tokio::test]
async fn failed_verification_is_a_rejection() {
    let api = stub_api().await;
    let credentials = Credentials {
        email: "admin@example.org".to_string(),
        password: "wrong".to_string(),
    };

    let err = api
        .verify_security_key(&credentials)
        .await
        .expect_err("rejected");
    assert!(matches!(err, ApiError::Rejected(message) if message == "invalid credentials"));
}
