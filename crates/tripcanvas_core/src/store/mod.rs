//! Trip document ownership and persistence round-trip.
//!
//! # Invariants
//! - The document store is the only owner of the trip collection.
//! - Every write replaces the collection value; nothing is edited in place
//!   behind an outstanding snapshot.

pub mod defaults;
pub mod document_store;
