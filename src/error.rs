use thiserror::Error;

/// Errors produced by the watch layer.
#[derive(Error, Debug)]
pub enum WatchError {
    /// SQLite error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to determine the user's home directory.
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WatchError>;
