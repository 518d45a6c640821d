//! The submission path: validate, check for a duplicate, persist.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
  Error, Result,
  record::{CandidateRsvp, RsvpRecord},
  store::RecordStore,
  validate::validate,
};

/// Validates RSVP submissions and writes them to a [`RecordStore`].
pub struct Submitter<S> {
  store: Arc<S>,
}

impl<S> Clone for Submitter<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: RecordStore> Submitter<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Submit one RSVP.
  ///
  /// Performs at most one lookup followed by at most one insert, and touches
  /// the store not at all if the store is unconfigured or the candidate is
  /// invalid. The lookup is a fast path; a backend that enforces uniqueness
  /// itself closes the window between lookup and insert.
  pub async fn submit(&self, candidate: CandidateRsvp) -> Result<RsvpRecord> {
    if !self.store.configured() {
      warn!("rsvp rejected: record store is not configured");
      return Err(Error::StoreUnavailable);
    }

    let input = validate(&candidate).inspect_err(|e| {
      warn!(kind = ?e.kind(), "rsvp rejected: {e}");
    })?;

    if let Some(identity) = input.identity_number.as_deref() {
      let existing = self
        .store
        .find_by_identity(identity)
        .await
        .map_err(Error::write)?;
      if let Some(existing) = existing {
        warn!(existing_id = %existing.id, "rsvp rejected: duplicate identity number");
        return Err(Error::DuplicateIdentity);
      }
    }

    let record = self.store.create(input).await.map_err(Error::write)?;
    info!(id = %record.id, attending = %record.attending, "rsvp recorded");
    Ok(record)
  }
}
