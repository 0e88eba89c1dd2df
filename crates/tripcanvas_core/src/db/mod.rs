//! SQLite file behind the blob repository.
//!
//! The planner keeps its whole document in one `blobs` table, so this layer
//! only has to open a connection, set a busy timeout and bring the schema up
//! to date before `repo::blob_repo` touches it.
//!
//! # Invariants
//! - The schema version lives in `PRAGMA user_version`.
//! - A file written by a newer build is refused rather than downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or migrating the blob store file.
#[derive(Debug)]
pub enum DbError {
    /// Error reported by SQLite itself (open, pragma, migration SQL).
    Sqlite(rusqlite::Error),
    /// The file carries a schema this build does not know how to read.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "blob store sqlite error: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "blob store was written with schema v{db_version}; this build reads up to v{latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
