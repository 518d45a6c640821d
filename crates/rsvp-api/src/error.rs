//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use rsvp_core::ErrorKind;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub rsvp_core::Error);

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self.0.kind() {
      ErrorKind::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
      ErrorKind::DuplicateIdentity => StatusCode::CONFLICT,
      ErrorKind::MissingRequiredField
      | ErrorKind::MissingContactInfo
      | ErrorKind::InvalidPhoneFormat
      | ErrorKind::InvalidIdentityFormat => StatusCode::UNPROCESSABLE_ENTITY,
      ErrorKind::FetchError | ErrorKind::WriteError => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let kind = self.0.kind();
    if status.is_server_error() {
      error!(?kind, "request failed: {}", self.0);
    }
    let body = json!({
      "error":   kind,
      "message": kind.user_message(),
    });
    (status, Json(body)).into_response()
  }
}
