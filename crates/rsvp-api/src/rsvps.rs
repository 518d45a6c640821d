//! Handlers for `/rsvps` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/rsvps` | All records, newest first, plus the tally |
//! | `POST` | `/rsvps` | Body: [`CandidateRsvp`]; returns 201 + stored record |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use rsvp_core::{
  listing::{Listing, RsvpListing},
  record::CandidateRsvp,
  store::RecordStore,
  submit::Submitter,
};

use crate::error::ApiError;

/// `GET /rsvps`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<RsvpListing>, ApiError>
where
  S: RecordStore,
{
  let listing = Listing::new(store).load().await?;
  Ok(Json(listing))
}

/// `POST /rsvps`: returns 201 + the stored [`RsvpRecord`](rsvp_core::record::RsvpRecord).
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CandidateRsvp>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore,
{
  let record = Submitter::new(store).submit(body).await?;
  Ok((StatusCode::CREATED, Json(record)))
}
