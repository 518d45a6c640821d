//! Field validation and normalization for RSVP submissions.
//!
//! [`validate`] runs the checks in a fixed order and stops at the first
//! failure, so a guest always sees the most basic problem first.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
  Error, Result,
  record::{Attendance, CandidateRsvp, Field, NewRsvp},
};

/// Optional `+`, then digit groups of 1–3, 1–4, 1–4 and 1–9, each optionally
/// preceded by `-`, `.` or whitespace.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\+?[0-9]{1,3}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}$")
    .expect("Invalid regex pattern for phone number")
});

/// Longest accepted identity number.
pub const MAX_IDENTITY_DIGITS: usize = 8;

pub fn is_valid_phone(raw: &str) -> bool { PHONE_PATTERN.is_match(raw) }

/// 1 to [`MAX_IDENTITY_DIGITS`] ASCII digits, nothing else.
pub fn is_valid_identity(raw: &str) -> bool {
  (1..=MAX_IDENTITY_DIGITS).contains(&raw.len())
    && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Strip everything that is not an ASCII digit. Idempotent.
pub fn digits_only(raw: &str) -> String {
  raw.chars().filter(char::is_ascii_digit).collect()
}

/// Check a raw submission and turn it into a normalized [`NewRsvp`].
///
/// Surrounding whitespace is ignored on every field. Contact details are
/// still format-checked when a non-attending guest supplies them, but they
/// are not kept: a declined RSVP is stored without phone or identity number.
pub fn validate(candidate: &CandidateRsvp) -> Result<NewRsvp> {
  let first_name = candidate.first_name.trim();
  let last_name = candidate.last_name.trim();
  let phone = candidate.phone.trim();
  let identity = candidate.identity_number.trim();
  let attending_raw = candidate.attending.trim();

  if first_name.is_empty() {
    return Err(Error::MissingRequiredField(Field::FirstName));
  }
  if last_name.is_empty() {
    return Err(Error::MissingRequiredField(Field::LastName));
  }
  // An answer that is neither yes nor no counts as no answer at all.
  let attending = Attendance::parse(attending_raw)
    .ok_or(Error::MissingRequiredField(Field::Attending))?;

  if attending.is_attending() && (phone.is_empty() || identity.is_empty()) {
    return Err(Error::MissingContactInfo);
  }
  if !phone.is_empty() && !is_valid_phone(phone) {
    return Err(Error::InvalidPhoneFormat);
  }
  if !identity.is_empty() && !is_valid_identity(identity) {
    return Err(Error::InvalidIdentityFormat);
  }

  let (phone, identity_number) = if attending.is_attending() {
    (Some(digits_only(phone)), Some(digits_only(identity)))
  } else {
    (None, None)
  };

  Ok(NewRsvp {
    first_name: first_name.to_owned(),
    last_name: last_name.to_owned(),
    phone,
    identity_number,
    attending,
  })
}
