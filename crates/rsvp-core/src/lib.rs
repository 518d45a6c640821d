//! Core types and trait definitions for the RSVP service.
//!
//! This crate is free of HTTP and database dependencies. The submission path
//! ([`submit::Submitter`]) and the admin listing ([`listing::Listing`]) both
//! talk to storage only through the [`store::RecordStore`] trait.

// Native `async fn` in traits; the store trait spells out `Send` futures itself.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod listing;
pub mod record;
pub mod store;
pub mod submit;
pub mod validate;

pub use error::{Error, ErrorKind, Result};

#[cfg(test)]
mod tests;
