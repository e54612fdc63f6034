//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use persons_domain::error::PersonsError;

/// JSON error body returned for server-side failures.
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Maps [`PersonsError`] to an HTTP response with appropriate status code.
pub struct ApiError(PersonsError);

impl From<PersonsError> for ApiError {
    fn from(err: PersonsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            PersonsError::NotFound(err) => {
                tracing::debug!(error = %err, "record not found");
                StatusCode::NOT_FOUND.into_response()
            }
            PersonsError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
