//! The uniform success envelope.
//!
//! Every endpoint replies with `{"success": ..., ...}`. Successes carry
//! `data` (and, for mutations, `message`); failures are emitted by
//! [`ApiError`](crate::error::ApiError) as `{"success": false, "error": ...}`.
//! Fields that are `None` are omitted from the serialised JSON entirely.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data:    Option<T>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}

impl<T> Envelope<T> {
  /// Read envelope: `{"success": true, "data": ...}`.
  pub fn data(data: T) -> Self {
    Self { success: true, data: Some(data), message: None }
  }

  /// Mutation envelope: `{"success": true, "data": ..., "message": ...}`.
  pub fn with_message(data: T, message: impl Into<String>) -> Self {
    Self {
      success: true,
      data:    Some(data),
      message: Some(message.into()),
    }
  }
}
