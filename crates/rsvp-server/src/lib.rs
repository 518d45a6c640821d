//! HTTP server wiring for the RSVP service.
//!
//! Mounts the JSON API under `/api` with request tracing. The binary in
//! `main.rs` handles configuration and startup.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use rsvp_core::store::RecordStore;
use rsvp_store_sqlite::StoreConfig;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `RSVP_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// SQLite file, or `:memory:`. When absent the server runs with an
  /// unconfigured store and answers every RSVP call with 503.
  #[serde(default)]
  pub store_path: Option<PathBuf>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 3000 }

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The store configuration, with `~` expanded in the path.
  pub fn store_config(&self) -> StoreConfig {
    StoreConfig { path: self.store_path.as_deref().map(expand_tilde) }
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the top-level axum [`Router`].
pub fn router<S>(store: Arc<S>) -> Router
where
  S: RecordStore + 'static,
{
  Router::new()
    .nest("/api", rsvp_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
