//! Maps request, core and store failures onto HTTP responses.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nameplate_core::CoreError;
use nameplate_store::error::{StoreError, StoreErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),
    #[error("{}", .0.body_text())]
    PersonId(#[from] PathRejection),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(rejection) => rejection.status(),
            ApiError::PersonId(rejection) => rejection.status(),
            ApiError::Core(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(err) => match err.kind() {
                StoreErrorKind::NotFound => StatusCode::NOT_FOUND,
                StoreErrorKind::Conflict => StatusCode::CONFLICT,
                StoreErrorKind::InvalidInput | StoreErrorKind::Internal => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            match &self {
                ApiError::Store(_) if status == StatusCode::CONFLICT => {
                    warn!(error = %self, "duplicate email rejected");
                }
                ApiError::Body(_) | ApiError::PersonId(_) => {
                    debug!(error = %self, "request rejected");
                }
                _ => {}
            }
            self.to_string()
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
