//! Planner use-case layer.
//!
//! # Responsibility
//! - Pure engines over one trip (`itinerary_service`) and one activity's
//!   note canvas (`canvas_service`).
//! - The top-level controller that applies commands and persists
//!   (`planner_service`).
//!
//! # Invariants
//! - Engines never hold state and never see "current selection"; callers
//!   pass ids and indices explicitly.

pub mod calendar;
pub mod canvas_service;
pub mod itinerary_service;
pub mod planner_service;
