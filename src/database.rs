//! Database connection management.
//!
//! The [`Database`] struct owns a [`rusqlite::Connection`] opened *read-only*:
//! the message database belongs to another process (the platform's messaging
//! application), and this crate never writes to it.  There are consequently
//! no migrations here; the schema is external.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::BaseDirs;
use rusqlite::{Connection, OpenFlags};

use crate::error::{Result, WatchError};

/// How long a query waits on a briefly locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_millis(250);

/// Read-only wrapper around a [`rusqlite::Connection`].
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the platform message history database.
    ///
    /// On macOS this is `~/Library/Messages/chat.db`, which requires the
    /// embedding application to hold Full Disk Access.
    pub fn open_default() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or(WatchError::NoHomeDir)?;
        let db_path = base_dirs
            .home_dir()
            .join("Library")
            .join("Messages")
            .join("chat.db");

        tracing::info!(path = %db_path.display(), "opening message database");

        Self::open_at(&db_path)
    }

    /// Open a message database at an explicit path.
    ///
    /// Useful for tests and for watching a copy of the database placed in a
    /// custom location.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        // The owning application may hold short write locks; wait briefly
        // instead of failing the poll outright.
        conn.busy_timeout(BUSY_TIMEOUT)?;

        Ok(Self { conn })
    }

    /// Return a reference to the underlying `rusqlite::Connection`.
    ///
    /// Callers should prefer the typed query helpers, but direct access is
    /// occasionally needed for ad-hoc reads.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Return the filesystem path of the open database (if any).
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }
}
