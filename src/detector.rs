//! Change detection over the message store.
//!
//! The detector answers one question per poll: is the newest row in the
//! store a message we have not seen yet, and if so, did the local user send
//! it?  A [`SeenCache`] keyed by guid makes repeated polls against the same
//! newest row idempotent.

use crate::cache::SeenCache;
use crate::database::Database;
use crate::models::ChangeOutcome;

/// Lifecycle of a [`ChangeDetector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    /// The cache has not been preloaded yet.
    Uninitialized,
    /// The cache is warm; steady-state polling.
    Ready,
}

/// Poll-driven new-message detector.
///
/// An external scheduler calls [`poll`](ChangeDetector::poll) repeatedly;
/// the first poll that reaches the store also bulk-preloads the cache with
/// recent messages so that rows already present at startup are not reported
/// as new.  Single-threaded by contract, like the cache it owns.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    cache: SeenCache,
    preloaded: bool,
}

impl ChangeDetector {
    /// Create a detector with an empty, unpreloaded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DetectorState {
        if self.preloaded {
            DetectorState::Ready
        } else {
            DetectorState::Uninitialized
        }
    }

    /// Read-only view of the seen-message cache.
    pub fn cache(&self) -> &SeenCache {
        &self.cache
    }

    /// Check the store for a new message.
    ///
    /// `last_known_time` scopes the one-time preload: messages with a
    /// timestamp at or below it are assumed already handled by the caller.
    /// Store failures degrade to [`ChangeOutcome::NoChange`] so the polling
    /// loop stays alive; they are logged, never propagated.
    pub fn poll(&mut self, db: &Database, last_known_time: i64) -> ChangeOutcome {
        // Read the newest row first: if the store is unreachable there is
        // nothing to preload either, and the latch stays unset so preload
        // is retried on the next healthy poll.
        let latest = match db.latest_record() {
            Ok(latest) => latest,
            Err(e) => {
                tracing::warn!(error = %e, "message store unavailable, skipping poll");
                return ChangeOutcome::NoChange;
            }
        };

        if !self.preloaded {
            self.preload(db, last_known_time);
            self.preloaded = true;
        }

        let Some(record) = latest else {
            return ChangeOutcome::NoChange;
        };

        if self.cache.contains(&record.guid) {
            return ChangeOutcome::NoChange;
        }

        tracing::debug!(
            guid = %record.guid,
            date = record.date,
            is_from_me = record.is_from_me,
            "new message detected"
        );

        let outcome = if record.is_from_me {
            ChangeOutcome::NewFromSelf
        } else {
            ChangeOutcome::NewFromOther
        };
        self.cache.insert(record);
        outcome
    }

    /// One-time bulk warm-up of the cache with recent messages.
    fn preload(&mut self, db: &Database, last_known_time: i64) {
        let records = match db.recent_records_since(last_known_time) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "cache preload query failed");
                return;
            }
        };

        for record in records {
            self.cache.insert(record);
        }

        tracing::debug!(cached = self.cache.len(), "preloaded seen-message cache");
    }
}
