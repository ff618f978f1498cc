//! # chatdb-watch
//!
//! Polling helper that watches a local message-history SQLite database for
//! new rows and classifies them as "new incoming message" vs already-seen /
//! self-sent, using an in-memory cache of observed message guids.
//!
//! The crate exposes a read-only [`Database`] handle over the external
//! `message` table, typed query helpers, and a [`ChangeDetector`] that an
//! outside scheduler (e.g. a timer owned by the embedding application)
//! invokes repeatedly.  Everything here is synchronous and single-threaded;
//! each poll is a complete, bounded unit of work.

pub mod cache;
pub mod database;
pub mod detector;
pub mod encode;
pub mod messages;
pub mod models;

mod error;

#[cfg(test)]
mod testutil;

pub use cache::SeenCache;
pub use database::Database;
pub use detector::{ChangeDetector, DetectorState};
pub use error::WatchError;
pub use models::*;
