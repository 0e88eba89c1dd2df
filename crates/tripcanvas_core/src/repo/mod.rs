//! Key-value blob persistence.
//!
//! # Responsibility
//! - Define the blob store contract used by the document store.
//! - Keep SQLite details inside the persistence boundary.
//!
//! # Invariants
//! - Blobs are opaque strings; this layer never parses them.
//! - `put_blob` replaces any previous value for the same key.

pub mod blob_repo;
