//! Read queries against the external `message` table.
//!
//! All three operations are fixed parameterized statements; callers supply
//! only bind values.  Each call returns freshly owned data.

use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::encode;
use crate::error::Result;
use crate::models::MessageRecord;

/// Preload is bounded to the most recent rows; the cache only needs enough
/// history to recognize messages already on screen when the watcher starts.
const PRELOAD_LIMIT: u32 = 50;

impl Database {
    /// Text of the newest message exchanged with a handle.
    ///
    /// Prefers the plain `text` column when present and non-empty; otherwise
    /// falls back to the `attributedBody` blob, returned base64-encoded with
    /// the [`encode::RICH_CONTENT_MARKER`] prefix.  `None` when the handle
    /// has no messages, or the newest row carries neither form of content.
    pub fn latest_message_text(&self, handle_id: i64) -> Result<Option<String>> {
        let row: Option<(Option<String>, Option<Vec<u8>>)> = self
            .conn()
            .query_row(
                "SELECT text, attributedBody FROM message
                 WHERE handle_id = ?1 ORDER BY date DESC LIMIT 1",
                params![handle_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((text, blob)) = row else {
            return Ok(None);
        };

        match (text, blob) {
            (Some(text), _) if !text.is_empty() => Ok(Some(text)),
            (_, Some(blob)) if !blob.is_empty() => Ok(Some(encode::encode_rich_content(&blob))),
            _ => Ok(None),
        }
    }

    /// Timestamp of the newest message exchanged with a handle, or `None`
    /// if there is no message history for it.
    pub fn last_contact_timestamp(&self, handle_id: i64) -> Result<Option<i64>> {
        let ts = self
            .conn()
            .query_row(
                "SELECT date FROM message
                 WHERE handle_id = ?1 ORDER BY date DESC LIMIT 1",
                params![handle_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }

    /// The single newest message across all handles, or `None` for an empty
    /// store.
    pub fn latest_record(&self) -> Result<Option<MessageRecord>> {
        let record = self
            .conn()
            .query_row(
                "SELECT guid, date, is_from_me FROM message
                 ORDER BY date DESC LIMIT 1",
                [],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// Messages newer than `since`, bounded to the most recent
    /// [`PRELOAD_LIMIT`] rows.  Used only for the detector's cache preload;
    /// row order is unspecified.
    pub fn recent_records_since(&self, since: i64) -> Result<Vec<MessageRecord>> {
        let mut stmt = self.conn().prepare(
            "SELECT guid, date, is_from_me FROM message
             WHERE date > ?1 ORDER BY date DESC LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![since, PRELOAD_LIMIT], row_to_record)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

/// Map a `rusqlite::Row` to a [`MessageRecord`].
fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<MessageRecord> {
    let guid: String = row.get(0)?;
    let date: i64 = row.get(1)?;
    let is_from_me: i64 = row.get(2)?;

    Ok(MessageRecord {
        guid,
        date,
        is_from_me: is_from_me == 1,
    })
}
