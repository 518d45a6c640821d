//! [`SqliteStore`], the SQLite implementation of [`RecordStore`].

use std::path::{Path, PathBuf};

use chrono::{SubsecRound as _, Utc};
use rusqlite::OptionalExtension as _;
use tracing::info;
use uuid::Uuid;

use rsvp_core::{
  record::{NewRsvp, RsvpRecord},
  store::RecordStore,
};

use crate::{
  encode::{RSVP_COLUMNS, RawRsvp, encode_attendance, encode_dt, encode_uuid},
  schema::SCHEMA,
  Error, Result,
};

/// Path value that selects an in-memory database.
pub const IN_MEMORY: &str = ":memory:";

// ─── Configuration ───────────────────────────────────────────────────────────

/// Where the store lives. With no `path` the store is built unconfigured:
/// it reports [`RecordStore::configured`] as `false` and refuses every call.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
  pub path: Option<PathBuf>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An RSVP store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: Option<tokio_rusqlite::Connection>,
}

impl SqliteStore {
  /// Build a store from `config`, opening the database if a path is set.
  pub async fn from_config(config: &StoreConfig) -> Result<Self> {
    match config.path.as_deref() {
      None => Ok(Self::unconfigured()),
      Some(p) if p == Path::new(IN_MEMORY) => Self::open_in_memory().await,
      Some(p) => Self::open(p).await,
    }
  }

  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn: Some(conn) };
    store.init_schema().await?;
    info!(path = %path.display(), "opened rsvp store");
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn: Some(conn) };
    store.init_schema().await?;
    Ok(store)
  }

  /// A store with no database behind it.
  pub fn unconfigured() -> Self { Self { conn: None } }

  fn conn(&self) -> Result<&tokio_rusqlite::Connection> {
    self.conn.as_ref().ok_or(Error::NotConfigured)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn()?
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  fn configured(&self) -> bool { self.conn.is_some() }

  async fn find_by_identity(&self, identity_number: &str) -> Result<Option<RsvpRecord>> {
    let identity = identity_number.to_owned();

    let raw: Option<RawRsvp> = self
      .conn()?
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {RSVP_COLUMNS} FROM rsvps WHERE identity_number = ?1 LIMIT 1"),
            rusqlite::params![identity],
            RawRsvp::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawRsvp::into_record).transpose()
  }

  async fn create(&self, input: NewRsvp) -> Result<RsvpRecord> {
    // Truncated to the stored precision so the returned record equals what a
    // later read yields.
    let record = RsvpRecord {
      id:              Uuid::new_v4(),
      first_name:      input.first_name,
      last_name:       input.last_name,
      phone:           input.phone,
      identity_number: input.identity_number,
      attending:       input.attending,
      created_at:      Utc::now().trunc_subsecs(6),
    };

    let id_str        = encode_uuid(record.id);
    let first_name    = record.first_name.clone();
    let last_name     = record.last_name.clone();
    let phone         = record.phone.clone();
    let identity      = record.identity_number.clone();
    let attending_str = encode_attendance(record.attending);
    let at_str        = encode_dt(record.created_at);

    let inserted: bool = self
      .conn()?
      .call(move |conn| {
        let res = conn.execute(
          "INSERT INTO rsvps (
             id, first_name, last_name, phone, identity_number, attending, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_str,
            first_name,
            last_name,
            phone,
            identity,
            attending_str,
            at_str,
          ],
        );
        match res {
          Ok(_) => Ok(true),
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
          {
            Ok(false)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    if !inserted {
      return Err(Error::DuplicateIdentity(
        record.identity_number.unwrap_or_default(),
      ));
    }
    Ok(record)
  }

  async fn list_all(&self) -> Result<Vec<RsvpRecord>> {
    let raws: Vec<RawRsvp> = self
      .conn()?
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {RSVP_COLUMNS} FROM rsvps ORDER BY created_at DESC, rowid DESC"
        ))?;
        let rows = stmt
          .query_map([], RawRsvp::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRsvp::into_record).collect()
  }
}
