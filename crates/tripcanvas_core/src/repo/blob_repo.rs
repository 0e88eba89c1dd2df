//! Blob repository contract with SQLite and in-memory implementations.

use crate::db::DbError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Blob persistence error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Backend refused the operation (used by non-SQLite stores).
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "blob store unavailable: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Get/set string blobs by key.
pub trait BlobRepository {
    fn get_blob(&self, key: &str) -> RepoResult<Option<String>>;
    fn put_blob(&self, key: &str, value: &str) -> RepoResult<()>;
}

impl<R: BlobRepository + ?Sized> BlobRepository for &R {
    fn get_blob(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get_blob(key)
    }

    fn put_blob(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).put_blob(key, value)
    }
}

/// SQLite-backed blob repository over a migrated connection.
pub struct SqliteBlobRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBlobRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BlobRepository for SqliteBlobRepository<'_> {
    fn get_blob(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM blobs WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_blob(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value, Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }
}

/// Process-local blob repository for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryBlobRepository {
    blobs: RefCell<BTreeMap<String, String>>,
}

impl MemoryBlobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with one blob.
    pub fn with_blob(key: &str, value: impl Into<String>) -> Self {
        let repo = Self::new();
        repo.blobs.borrow_mut().insert(key.to_string(), value.into());
        repo
    }

    pub fn len(&self) -> usize {
        self.blobs.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.borrow().is_empty()
    }
}

impl BlobRepository for MemoryBlobRepository {
    fn get_blob(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn put_blob(&self, key: &str, value: &str) -> RepoResult<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{BlobRepository, MemoryBlobRepository, SqliteBlobRepository};
    use crate::db::open_db_in_memory;

    #[test]
    fn memory_repo_replaces_values() {
        let repo = MemoryBlobRepository::new();
        repo.put_blob("k", "one").unwrap();
        repo.put_blob("k", "two").unwrap();
        assert_eq!(repo.get_blob("k").unwrap().as_deref(), Some("two"));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn sqlite_repo_upserts_and_reads_back() {
        let conn = open_db_in_memory().unwrap();
        let repo = SqliteBlobRepository::new(&conn);

        assert_eq!(repo.get_blob("trips-data").unwrap(), None);
        repo.put_blob("trips-data", "[]").unwrap();
        repo.put_blob("trips-data", "[1]").unwrap();
        assert_eq!(repo.get_blob("trips-data").unwrap().as_deref(), Some("[1]"));
    }
}
