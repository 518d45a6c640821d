//! Plain-text rendering of the admin listing.

use std::fmt::Display;

use chrono::TimeZone;
use rsvp_core::{
  listing::{RsvpListing, Tally},
  record::{Attendance, RsvpRecord},
};

pub fn tally(t: &Tally) -> String {
  format!(
    "Total confirmaciones: {}\nAsistirán:            {}\nNo asistirán:         {}",
    t.total, t.attending, t.not_attending
  )
}

fn attendance_label(a: Attendance) -> &'static str {
  match a {
    Attendance::Yes => "Asistirá",
    Attendance::No => "No asistirá",
  }
}

/// One line per record; timestamps shown in `tz`.
pub fn record<Tz>(r: &RsvpRecord, tz: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  let when = r.created_at.with_timezone(tz).format("%d/%m/%Y %H:%M");
  let mut line = format!("{:<32} {:<12}", r.full_name(), attendance_label(r.attending));
  if let Some(phone) = &r.phone {
    line.push_str(&format!(" tel {phone:<14}"));
  }
  line.push_str(&format!(" {when}"));
  line
}

pub fn listing<Tz>(l: &RsvpListing, tz: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: Display,
{
  let mut out = tally(&l.tally);
  out.push_str("\n\n");
  if l.records.is_empty() {
    out.push_str("No hay confirmaciones aún");
  } else {
    let lines: Vec<_> = l.records.iter().map(|r| record(r, tz)).collect();
    out.push_str(&lines.join("\n"));
  }
  out
}
