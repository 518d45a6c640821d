//! Error type for `rsvp-store-sqlite`.

use rsvp_core::store::{StoreError, StoreErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("store is not configured")]
  NotConfigured,

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("unknown attendance value: {0:?}")]
  UnknownAttendance(String),

  /// The unique index on `identity_number` rejected an insert.
  #[error("identity number {0} is already registered")]
  DuplicateIdentity(String),
}

impl StoreError for Error {
  fn kind(&self) -> StoreErrorKind {
    match self {
      Error::NotConfigured
      | Error::Database(tokio_rusqlite::Error::ConnectionClosed) => {
        StoreErrorKind::Unavailable
      }
      Error::DuplicateIdentity(_) => StoreErrorKind::DuplicateIdentity,
      _ => StoreErrorKind::Other,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
