//! The admin listing: every RSVP, newest first, plus simple counts.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
  Error, Result,
  record::{Attendance, RsvpRecord},
  store::RecordStore,
};

/// Counts derived from a listing; computed on read, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
  pub total:         usize,
  pub attending:     usize,
  pub not_attending: usize,
}

impl Tally {
  pub fn of(records: &[RsvpRecord]) -> Self {
    records.iter().fold(Self::default(), |mut t, r| {
      t.total += 1;
      match r.attending {
        Attendance::Yes => t.attending += 1,
        Attendance::No => t.not_attending += 1,
      }
      t
    })
  }
}

/// All records, newest first, with their [`Tally`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RsvpListing {
  pub records: Vec<RsvpRecord>,
  pub tally:   Tally,
}

/// Reads the full RSVP set from a [`RecordStore`].
pub struct Listing<S> {
  store: Arc<S>,
}

impl<S> Clone for Listing<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: RecordStore> Listing<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  /// Fetch every record ordered by `created_at` descending.
  ///
  /// Records sharing a timestamp keep the order the store returned them in.
  /// On failure nothing is returned.
  pub async fn records(&self) -> Result<Vec<RsvpRecord>> {
    if !self.store.configured() {
      return Err(Error::StoreUnavailable);
    }

    let mut records = self.store.list_all().await.map_err(Error::fetch)?;
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(records)
  }

  /// Fetch every record and tally them.
  pub async fn load(&self) -> Result<RsvpListing> {
    let records = self.records().await?;
    let tally = Tally::of(&records);
    debug!(
      total = tally.total,
      attending = tally.attending,
      not_attending = tally.not_attending,
      "rsvp listing loaded"
    );
    Ok(RsvpListing { records, tally })
  }
}
