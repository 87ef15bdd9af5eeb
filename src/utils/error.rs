use super::validation::{self, FieldError};
use axum::{
    extract::Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Reason {
    Message(String),
    Fields(Vec<FieldError>),
}

/// The one failure shape every route renders into:
/// `{"status": "error", "reason": ...}` with `status` as the HTTP code.
#[derive(Clone, Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub reason: Reason,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            reason: Reason::Message(message.into()),
        }
    }

    pub fn validation(errors: &ValidationErrors, order: &[&str]) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            reason: Reason::Fields(validation::into_field_errors(errors, order)),
        }
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "status": "error",
                "reason": self.reason,
            })),
        )
            .into_response()
    }
}
