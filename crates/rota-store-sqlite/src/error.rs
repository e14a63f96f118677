//! Error type for `rota-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A stored value failed domain decoding, e.g. a shift-time label written
  /// by something other than this crate.
  #[error("core error: {0}")]
  Core(#[from] rota_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date parse error: {0}")]
  DateParse(#[from] chrono::ParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
