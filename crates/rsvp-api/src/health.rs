//! Handler for `GET /health`.

use std::sync::Arc;

use axum::{Json, extract::State};
use rsvp_core::store::RecordStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Health {
  pub store_configured: bool,
}

/// `GET /health`: always 200; reports whether the store is configured.
pub async fn handler<S>(State(store): State<Arc<S>>) -> Json<Health>
where
  S: RecordStore,
{
  Json(Health { store_configured: store.configured() })
}
