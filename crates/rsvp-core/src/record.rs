//! RSVP records: one attendee's response to the invitation.
//!
//! Records are create-only. The store assigns `id` and `created_at`; nothing
//! in this service ever updates or deletes a stored record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Attendance ──────────────────────────────────────────────────────────────

/// Whether the guest plans to attend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
  #[serde(alias = "si")]
  Yes,
  No,
}

impl Attendance {
  /// Parse the raw form value. Accepts `yes`/`no` and the Spanish `si`/`sí`,
  /// case-insensitively. Returns `None` for anything else, including `""`.
  pub fn parse(raw: &str) -> Option<Self> {
    match raw.trim().to_lowercase().as_str() {
      "yes" | "si" | "sí" => Some(Self::Yes),
      "no" => Some(Self::No),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Yes => "yes",
      Self::No => "no",
    }
  }

  pub fn is_attending(self) -> bool { matches!(self, Self::Yes) }
}

impl fmt::Display for Attendance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Candidate ───────────────────────────────────────────────────────────────

/// A submission exactly as it arrives from the form: every field is raw text
/// and any of them may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRsvp {
  #[serde(default)]
  pub first_name:      String,
  #[serde(default)]
  pub last_name:       String,
  #[serde(default)]
  pub phone:           String,
  #[serde(default)]
  pub identity_number: String,
  #[serde(default)]
  pub attending:       String,
}

// ─── NewRsvp ─────────────────────────────────────────────────────────────────

/// Input to [`crate::store::RecordStore::create`]: a validated, normalized
/// record without the store-assigned `id` and `created_at`.
///
/// `phone` and `identity_number` are digits only, and are `Some` exactly when
/// `attending` is [`Attendance::Yes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvp {
  pub first_name:      String,
  pub last_name:       String,
  pub phone:           Option<String>,
  pub identity_number: Option<String>,
  pub attending:       Attendance,
}

// ─── RsvpRecord ──────────────────────────────────────────────────────────────

/// A stored RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpRecord {
  pub id:              Uuid,
  pub first_name:      String,
  pub last_name:       String,
  pub phone:           Option<String>,
  pub identity_number: Option<String>,
  pub attending:       Attendance,
  /// Store-assigned; never changes after creation.
  pub created_at:      DateTime<Utc>,
}

impl RsvpRecord {
  /// `"First Last"`, as shown in the admin listing.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

// ─── Field ───────────────────────────────────────────────────────────────────

/// A form field that must always be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
  FirstName,
  LastName,
  Attending,
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::FirstName => "first_name",
      Self::LastName => "last_name",
      Self::Attending => "attending",
    })
  }
}
