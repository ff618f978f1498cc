//! Domain model structs read from the external message database.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to the UI layer over IPC.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MessageRecord
// ---------------------------------------------------------------------------

/// One observed message: its guid, timestamp and sender flag.
///
/// Immutable once read.  The guid is opaque (UUID-like but not guaranteed to
/// parse as one) and unique per message; the timestamp is an epoch-like
/// integer copied verbatim from the store's `date` column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRecord {
    /// Globally-unique message identifier.
    pub guid: String,
    /// Raw `date` column value (epoch-like, monotonic-ish).
    pub date: i64,
    /// Whether the local user sent this message.
    pub is_from_me: bool,
}

// ---------------------------------------------------------------------------
// ChangeOutcome
// ---------------------------------------------------------------------------

/// Result of a single detector poll.
///
/// `NewFromSelf` is a distinct outcome rather than being folded into
/// [`NoChange`](ChangeOutcome::NoChange): whether a self-sent message should
/// trigger anything is the consumer's decision, not ours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Nothing new since the last poll (or the store was unreadable).
    NoChange,
    /// A previously-unseen message from another party.
    NewFromOther,
    /// A previously-unseen message sent by the local user.
    NewFromSelf,
}
