use crate::api::ApiError;
use crate::config::ConfigError;
use crate::events::DraftError;
use crate::registration::RegistrationError;
use crate::security::CredentialError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Api(ApiError),
    Draft(DraftError),
    Registration(RegistrationError),
    Credentials(CredentialError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Api(err) => write!(f, "event service error: {}", err),
            AppError::Draft(err) => write!(f, "event draft error: {}", err),
            AppError::Registration(err) => write!(f, "registration error: {}", err),
            AppError::Credentials(err) => write!(f, "credential error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Api(err) => Some(err),
            AppError::Draft(err) => Some(err),
            AppError::Registration(err) => Some(err),
            AppError::Credentials(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Draft(_) | AppError::Registration(_) | AppError::Credentials(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Api(ApiError::Rejected(_)) => StatusCode::BAD_REQUEST,
            AppError::Api(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ApiError> for AppError {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

impl From<DraftError> for AppError {
    fn from(value: DraftError) -> Self {
        Self::Draft(value)
    }
}

impl From<RegistrationError> for AppError {
    fn from(value: RegistrationError) -> Self {
        Self::Registration(value)
    }
}

impl From<CredentialError> for AppError {
    fn from(value: CredentialError) -> Self {
        Self::Credentials(value)
    }
}
