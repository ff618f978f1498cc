//! Shared test fixtures: a throwaway on-disk database shaped like the
//! external `message` table, written through a separate connection so the
//! read-only [`Database`] under test sees it the way it sees the real store.

use std::path::Path;

use rusqlite::{params, Connection};
use tempfile::TempDir;

use crate::database::Database;

const SCHEMA: &str = "CREATE TABLE message (
    ROWID          INTEGER PRIMARY KEY AUTOINCREMENT,
    guid           TEXT UNIQUE NOT NULL,
    handle_id      INTEGER,
    date           INTEGER NOT NULL,
    text           TEXT,
    attributedBody BLOB,
    is_from_me     INTEGER NOT NULL DEFAULT 0
)";

/// Create an empty fixture store and open it read-only.
///
/// The `TempDir` must stay alive for the duration of the test.
pub fn fixture_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.db");

    let writer = Connection::open(&path).unwrap();
    writer.execute(SCHEMA, []).unwrap();
    drop(writer);

    let db = Database::open_at(&path).unwrap();
    (dir, db)
}

/// Insert a plain-text message row.
pub fn insert_message(
    dir: &Path,
    guid: &str,
    handle_id: i64,
    date: i64,
    text: &str,
    is_from_me: bool,
) {
    let writer = Connection::open(dir.join("chat.db")).unwrap();
    writer
        .execute(
            "INSERT INTO message (guid, handle_id, date, text, is_from_me)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![guid, handle_id, date, text, is_from_me as i64],
        )
        .unwrap();
}

/// Insert a row with no text and a rich-content blob.
pub fn insert_rich_message(
    dir: &Path,
    guid: &str,
    handle_id: i64,
    date: i64,
    blob: &[u8],
    is_from_me: bool,
) {
    let writer = Connection::open(dir.join("chat.db")).unwrap();
    writer
        .execute(
            "INSERT INTO message (guid, handle_id, date, attributedBody, is_from_me)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![guid, handle_id, date, blob, is_from_me as i64],
        )
        .unwrap();
}
