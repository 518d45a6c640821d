//! JSON REST API for the RSVP service.
//!
//! Exposes an axum [`Router`] backed by any [`rsvp_core::store::RecordStore`].
//! TLS and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rsvp_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod health;
pub mod rsvps;

use std::sync::Arc;

use axum::{Router, routing::get};
use rsvp_core::store::RecordStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecordStore + 'static,
{
  Router::new()
    .route("/rsvps", get(rsvps::list::<S>).post(rsvps::create::<S>))
    .route("/health", get(health::handler::<S>))
    .with_state(store)
}
