//! Submitter and listing behaviour against an in-memory counting store.

use std::sync::{
  Arc, Mutex,
  atomic::{AtomicUsize, Ordering},
};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{
  Error, ErrorKind,
  listing::{Listing, Tally},
  record::{Attendance, CandidateRsvp, NewRsvp, RsvpRecord},
  store::{RecordStore, StoreError, StoreErrorKind},
  submit::Submitter,
};

// ─── Fake store ──────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
#[error("fake store error: {kind:?}")]
struct FakeError {
  kind: StoreErrorKind,
}

impl StoreError for FakeError {
  fn kind(&self) -> StoreErrorKind { self.kind }
}

#[derive(Default)]
struct FakeStore {
  unconfigured: bool,
  /// Simulates a lost race: the lookup never sees the existing record.
  blind_lookup: bool,
  fail_with:    Option<StoreErrorKind>,
  records:      Mutex<Vec<RsvpRecord>>,
  lookups:      AtomicUsize,
  creates:      AtomicUsize,
  lists:        AtomicUsize,
}

impl FakeStore {
  fn with_records(records: Vec<RsvpRecord>) -> Self {
    Self { records: Mutex::new(records), ..Self::default() }
  }

  fn calls(&self) -> (usize, usize, usize) {
    (
      self.lookups.load(Ordering::SeqCst),
      self.creates.load(Ordering::SeqCst),
      self.lists.load(Ordering::SeqCst),
    )
  }

  fn fail(&self) -> Result<(), FakeError> {
    match self.fail_with {
      Some(kind) => Err(FakeError { kind }),
      None => Ok(()),
    }
  }
}

impl RecordStore for FakeStore {
  type Error = FakeError;

  fn configured(&self) -> bool { !self.unconfigured }

  async fn find_by_identity(
    &self,
    identity_number: &str,
  ) -> Result<Option<RsvpRecord>, FakeError> {
    self.lookups.fetch_add(1, Ordering::SeqCst);
    self.fail()?;
    if self.blind_lookup {
      return Ok(None);
    }
    let records = self.records.lock().unwrap();
    Ok(
      records
        .iter()
        .find(|r| r.identity_number.as_deref() == Some(identity_number))
        .cloned(),
    )
  }

  async fn create(&self, input: NewRsvp) -> Result<RsvpRecord, FakeError> {
    self.creates.fetch_add(1, Ordering::SeqCst);
    self.fail()?;
    let mut records = self.records.lock().unwrap();
    if input.identity_number.is_some()
      && records.iter().any(|r| r.identity_number == input.identity_number)
    {
      return Err(FakeError { kind: StoreErrorKind::DuplicateIdentity });
    }
    let record = RsvpRecord {
      id:              Uuid::new_v4(),
      first_name:      input.first_name,
      last_name:       input.last_name,
      phone:           input.phone,
      identity_number: input.identity_number,
      attending:       input.attending,
      created_at:      Utc::now(),
    };
    records.push(record.clone());
    Ok(record)
  }

  async fn list_all(&self) -> Result<Vec<RsvpRecord>, FakeError> {
    self.lists.fetch_add(1, Ordering::SeqCst);
    self.fail()?;
    Ok(self.records.lock().unwrap().clone())
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn attending(identity: &str) -> CandidateRsvp {
  CandidateRsvp {
    first_name:      "Sofía".into(),
    last_name:       "Rodríguez".into(),
    phone:           "+598 99 999 999".into(),
    identity_number: identity.into(),
    attending:       "yes".into(),
  }
}

fn declined() -> CandidateRsvp {
  CandidateRsvp {
    first_name: "Martín".into(),
    last_name:  "Silva".into(),
    attending:  "no".into(),
    ..CandidateRsvp::default()
  }
}

fn stored(attending: Attendance, identity: Option<&str>, at: DateTime<Utc>) -> RsvpRecord {
  RsvpRecord {
    id:              Uuid::new_v4(),
    first_name:      "Guest".into(),
    last_name:       "Name".into(),
    phone:           identity.map(|_| "099123456".into()),
    identity_number: identity.map(str::to_owned),
    attending,
    created_at:      at,
  }
}

// ─── Submission ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn valid_attending_rsvp_is_stored_normalized() {
  let store = Arc::new(FakeStore::default());
  let submitter = Submitter::new(store.clone());

  let record = submitter.submit(attending("1.234.567")).await;
  // Dots are not digits, so the raw value fails the identity check.
  assert!(matches!(record, Err(Error::InvalidIdentityFormat)));

  let record = submitter.submit(attending("12345678")).await.unwrap();
  assert_eq!(record.phone.as_deref(), Some("59899999999"));
  assert_eq!(record.identity_number.as_deref(), Some("12345678"));
  assert_eq!(record.attending, Attendance::Yes);
  assert_eq!(store.calls(), (1, 1, 0));
}

#[tokio::test]
async fn invalid_candidates_never_touch_the_store() {
  let store = Arc::new(FakeStore::default());
  let submitter = Submitter::new(store.clone());

  let mut missing_name = declined();
  missing_name.first_name.clear();
  let mut missing_contact = attending("12345678");
  missing_contact.phone.clear();
  let mut bad_phone = attending("12345678");
  bad_phone.phone = "abc".into();
  let bad_identity = attending("123456789");

  let cases = [
    (missing_name, ErrorKind::MissingRequiredField),
    (missing_contact, ErrorKind::MissingContactInfo),
    (bad_phone, ErrorKind::InvalidPhoneFormat),
    (bad_identity, ErrorKind::InvalidIdentityFormat),
  ];
  for (candidate, expected) in cases {
    let err = submitter.submit(candidate).await.unwrap_err();
    assert_eq!(err.kind(), expected);
    assert!(err.is_user_correctable());
  }
  assert_eq!(store.calls(), (0, 0, 0));
}

#[tokio::test]
async fn duplicate_identity_is_rejected_without_write() {
  let existing = stored(Attendance::Yes, Some("12345678"), Utc::now());
  let store = Arc::new(FakeStore::with_records(vec![existing]));
  let submitter = Submitter::new(store.clone());

  let mut other_guest = attending("12345678");
  other_guest.first_name = "Otra".into();
  other_guest.last_name = "Persona".into();

  let err = submitter.submit(other_guest).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateIdentity));
  assert_eq!(store.calls(), (1, 0, 0));
  assert_eq!(store.records.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn store_side_conflict_maps_to_duplicate_identity() {
  let existing = stored(Attendance::Yes, Some("12345678"), Utc::now());
  let store = Arc::new(FakeStore {
    blind_lookup: true,
    ..FakeStore::with_records(vec![existing])
  });
  let submitter = Submitter::new(store.clone());

  let err = submitter.submit(attending("12345678")).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateIdentity));
  assert_eq!(store.records.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn declined_rsvp_skips_lookup_and_appears_in_listing() {
  let store = Arc::new(FakeStore::default());
  let submitter = Submitter::new(store.clone());
  let listing = Listing::new(store.clone());

  let record = submitter.submit(declined()).await.unwrap();
  assert_eq!(record.attending, Attendance::No);
  assert_eq!(record.phone, None);
  assert_eq!(record.identity_number, None);
  assert_eq!(store.calls(), (0, 1, 0));

  let loaded = listing.load().await.unwrap();
  assert_eq!(loaded.records, vec![record]);
}

#[tokio::test]
async fn store_write_failure_is_reported_as_write_error() {
  let store = Arc::new(FakeStore {
    fail_with: Some(StoreErrorKind::Other),
    ..FakeStore::default()
  });
  let err = Submitter::new(store).submit(declined()).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::WriteError);
  assert!(!err.is_user_correctable());
}

#[tokio::test]
async fn unreachable_store_on_lookup_is_store_unavailable() {
  let store = Arc::new(FakeStore {
    fail_with: Some(StoreErrorKind::Unavailable),
    ..FakeStore::default()
  });
  let err = Submitter::new(store.clone())
    .submit(attending("12345678"))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::StoreUnavailable));
  assert_eq!(store.calls(), (1, 0, 0));
}

// ─── Unconfigured store ──────────────────────────────────────────────────────

#[tokio::test]
async fn unconfigured_store_fails_before_validation() {
  let store = Arc::new(FakeStore { unconfigured: true, ..FakeStore::default() });

  // Empty candidate would otherwise be MissingRequiredField.
  let err = Submitter::new(store.clone())
    .submit(CandidateRsvp::default())
    .await
    .unwrap_err();
  assert!(matches!(err, Error::StoreUnavailable));

  let err = Listing::new(store.clone()).load().await.unwrap_err();
  assert!(matches!(err, Error::StoreUnavailable));

  assert_eq!(store.calls(), (0, 0, 0));
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn listing_is_newest_first() {
  let t1 = Utc::now() - Duration::minutes(30);
  let t2 = t1 + Duration::minutes(10);
  let t3 = t2 + Duration::minutes(10);
  let r1 = stored(Attendance::Yes, Some("1"), t1);
  let r2 = stored(Attendance::No, None, t2);
  let r3 = stored(Attendance::Yes, Some("3"), t3);

  let store = Arc::new(FakeStore::with_records(vec![r2.clone(), r1.clone(), r3.clone()]));
  let records = Listing::new(store).records().await.unwrap();

  let ids: Vec<_> = records.iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![r3.id, r2.id, r1.id]);
}

#[tokio::test]
async fn listing_keeps_store_order_for_equal_timestamps() {
  let at = Utc::now();
  let a = stored(Attendance::Yes, Some("1"), at);
  let b = stored(Attendance::No, None, at);

  let store = Arc::new(FakeStore::with_records(vec![b.clone(), a.clone()]));
  let records = Listing::new(store).records().await.unwrap();
  assert_eq!(records, vec![b, a]);
}

#[tokio::test]
async fn tally_counts_attendance() {
  let now = Utc::now();
  let records: Vec<_> = [
    Attendance::Yes,
    Attendance::No,
    Attendance::Yes,
    Attendance::No,
    Attendance::Yes,
  ]
  .into_iter()
  .enumerate()
  .map(|(i, a)| stored(a, None, now - Duration::seconds(i as i64)))
  .collect();

  let store = Arc::new(FakeStore::with_records(records));
  let loaded = Listing::new(store).load().await.unwrap();
  assert_eq!(
    loaded.tally,
    Tally { total: 5, attending: 3, not_attending: 2 }
  );
}

#[tokio::test]
async fn empty_listing_is_not_an_error() {
  let store = Arc::new(FakeStore::default());
  let loaded = Listing::new(store).load().await.unwrap();
  assert!(loaded.records.is_empty());
  assert_eq!(loaded.tally, Tally::default());
}

#[tokio::test]
async fn fetch_failure_returns_no_partial_data() {
  let store = Arc::new(FakeStore {
    fail_with: Some(StoreErrorKind::Other),
    ..FakeStore::with_records(vec![stored(Attendance::No, None, Utc::now())])
  });
  let err = Listing::new(store).load().await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::FetchError);
}

// ─── Wire shapes ─────────────────────────────────────────────────────────────

#[test]
fn attendance_accepts_spanish_yes() {
  let a: Attendance = serde_json::from_str("\"si\"").unwrap();
  assert_eq!(a, Attendance::Yes);
  assert_eq!(serde_json::to_string(&Attendance::No).unwrap(), "\"no\"");
  assert_eq!(Attendance::parse(" Sí "), Some(Attendance::Yes));
  assert_eq!(Attendance::parse(""), None);
}

#[test]
fn error_kinds_serialise_snake_case() {
  assert_eq!(
    serde_json::to_string(&ErrorKind::DuplicateIdentity).unwrap(),
    "\"duplicate_identity\""
  );
  assert!(!ErrorKind::StoreUnavailable.user_message().is_empty());
}
