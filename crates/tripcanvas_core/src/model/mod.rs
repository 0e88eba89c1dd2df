//! Trip document model.
//!
//! # Responsibility
//! - Define the tree-shaped planning document: Trip → Day → Activity → Block.
//! - Fix the persisted wire names for every field.
//!
//! # Invariants
//! - Ownership is strictly hierarchical; no entity holds a back-reference.
//! - Ids are opaque strings assigned at creation and never rewritten.
//! - Sequence position is the only ordering signal for days and blocks.

pub mod activity;
pub mod block;
pub mod ids;
pub(crate) mod lenient;
pub mod palette;
pub mod trip;
