use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{commands, ports};

/// Failures surfaced to API callers
///
/// Everything is converted to an HTTP status plus a human-readable
/// `{"message": …}` body here; nothing propagates as an unhandled fault.
#[derive(Debug)]
pub enum ApiError {
    /// The request payload failed boundary validation
    Validation(String),
    /// The lookup gateway classified the upstream outcome as a failure
    Lookup(commands::Error),
    /// The record store failed
    Store(ports::store::Error),
}

impl From<commands::Error> for ApiError {
    fn from(err: commands::Error) -> Self {
        Self::Lookup(err)
    }
}

impl From<ports::store::Error> for ApiError {
    fn from(err: ports::store::Error) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Lookup(err) => lookup_failure(err),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "record store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

fn lookup_failure(err: commands::Error) -> (StatusCode, String) {
    match err {
        commands::Error::EmptyIdentifier => (
            StatusCode::BAD_REQUEST,
            "Please enter a valid mobile number".to_string(),
        ),
        commands::Error::MemberNotFound => (
            StatusCode::NOT_FOUND,
            "No member found with that mobile number. Please check and try again.".to_string(),
        ),
        // Indistinguishable from a true absence as far as callers go; the
        // variants differ only in diagnostics
        commands::Error::SummaryMissing => (
            StatusCode::NOT_FOUND,
            "No member found with that mobile number.".to_string(),
        ),
        commands::Error::UpstreamStatus { status } => (
            StatusCode::BAD_GATEWAY,
            format!(
                "The membership service returned an error ({status}). Please try again later or contact support."
            ),
        ),
        commands::Error::UpstreamMalformed => (
            StatusCode::BAD_GATEWAY,
            "The membership service returned an invalid response. Please try again later."
                .to_string(),
        ),
        commands::Error::Membership(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unable to connect to the membership service. Please check your connection and try again."
                .to_string(),
        ),
    }
}
