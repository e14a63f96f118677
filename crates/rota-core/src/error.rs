//! Error types for `rota-core`.
//!
//! Every variant here describes an input the caller can fix, so the API
//! layer maps them all to 400 responses.

use thiserror::Error;

use crate::shift::ShiftTime;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field was absent or empty. Carries the wire-level field
  /// name (e.g. `employeeName`) so the message reads as the caller sent it.
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("employeeId must be a positive integer, got {0}")]
  InvalidEmployeeId(i64),

  #[error("Invalid shift time. Must be one of: {}", ShiftTime::allowed_list())]
  InvalidShiftTime(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
