//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Every variant serialises to the uniform envelope with `success: false`
/// and an `error` string; only 400, 404, and 500 are ever produced.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request violated a presence, membership, or shape constraint.
  #[error("{0}")]
  Validation(String),

  /// No record with the requested id.
  #[error("{0}")]
  NotFound(String),

  /// Unexpected storage failure. Details are logged server-side and never
  /// leak into the response body.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<rota_core::Error> for ApiError {
  fn from(e: rota_core::Error) -> Self {
    ApiError::Validation(e.to_string())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::Validation(m) => (StatusCode::BAD_REQUEST, m),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "storage failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "internal server error".to_string(),
        )
      }
    };
    (status, Json(json!({ "success": false, "error": message }))).into_response()
  }
}
