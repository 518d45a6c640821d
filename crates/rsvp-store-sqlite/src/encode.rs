//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 UTC strings with a fixed microsecond
//! precision, so lexical `ORDER BY` equals chronological order. UUIDs are
//! stored as hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use rsvp_core::record::{Attendance, RsvpRecord};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Attendance ──────────────────────────────────────────────────────────────

pub fn encode_attendance(a: Attendance) -> &'static str { a.as_str() }

pub fn decode_attendance(s: &str) -> Result<Attendance> {
  match s {
    "yes" => Ok(Attendance::Yes),
    "no" => Ok(Attendance::No),
    other => Err(Error::UnknownAttendance(other.to_owned())),
  }
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` that builds a [`RawRsvp`].
pub const RSVP_COLUMNS: &str =
  "id, first_name, last_name, phone, identity_number, attending, created_at";

/// Raw strings read directly from an `rsvps` row.
pub struct RawRsvp {
  pub id:              String,
  pub first_name:      String,
  pub last_name:       String,
  pub phone:           Option<String>,
  pub identity_number: Option<String>,
  pub attending:       String,
  pub created_at:      String,
}

impl RawRsvp {
  /// Build from a row selected with [`RSVP_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:              row.get(0)?,
      first_name:      row.get(1)?,
      last_name:       row.get(2)?,
      phone:           row.get(3)?,
      identity_number: row.get(4)?,
      attending:       row.get(5)?,
      created_at:      row.get(6)?,
    })
  }

  pub fn into_record(self) -> Result<RsvpRecord> {
    Ok(RsvpRecord {
      id:              decode_uuid(&self.id)?,
      first_name:      self.first_name,
      last_name:       self.last_name,
      phone:           self.phone,
      identity_number: self.identity_number,
      attending:       decode_attendance(&self.attending)?,
      created_at:      decode_dt(&self.created_at)?,
    })
  }
}
