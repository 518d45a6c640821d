//! The `RecordStore` trait.
//!
//! Implemented by storage backends (e.g. `rsvp-store-sqlite`). The submitter
//! and the listing depend on this abstraction, never on a concrete backend,
//! and receive their store explicitly at construction.

use std::future::Future;

use crate::record::{NewRsvp, RsvpRecord};

/// Coarse classification of a store failure, so callers can react to it
/// without inspecting error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
  /// The store is not configured, or cannot be reached.
  Unavailable,
  /// A write violated the uniqueness of `identity_number`.
  DuplicateIdentity,
  Other,
}

/// Error type of a [`RecordStore`] backend.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> StoreErrorKind;
}

/// Abstraction over the single RSVP table.
///
/// Writes are append-only: there is no update and no delete.
pub trait RecordStore: Send + Sync {
  type Error: StoreError;

  /// Whether the store has what it needs (endpoint, file, credentials) to
  /// serve requests. Checked before any other call.
  fn configured(&self) -> bool;

  /// Point lookup by the uniqueness key. Returns `None` when nothing matches.
  fn find_by_identity<'a>(
    &'a self,
    identity_number: &'a str,
  ) -> impl Future<Output = Result<Option<RsvpRecord>, Self::Error>> + Send + 'a;

  /// Persist a new record, assigning `id` and `created_at`.
  ///
  /// Backends that enforce uniqueness report a conflicting `identity_number`
  /// as [`StoreErrorKind::DuplicateIdentity`].
  fn create(
    &self,
    input: NewRsvp,
  ) -> impl Future<Output = Result<RsvpRecord, Self::Error>> + Send + '_;

  /// All records, newest `created_at` first.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<RsvpRecord>, Self::Error>> + Send + '_;
}
