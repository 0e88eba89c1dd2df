//! Core planning logic for TripCanvas.
//! This crate is the single source of truth for the trip document and its
//! mutation rules.

pub mod config;
pub mod db;
pub mod image_ref;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{ConfigError, CoreConfig};
pub use image_ref::{placeholder_image_ref, DataUrlImageRefs, ImageRefFactory};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::activity::{Activity, ActivityDraft, ActivityPatch, Category, MediaItem, MediaKind};
pub use model::block::{BlockKind, CanvasBlock};
pub use model::ids::{ActivityId, BlockId, TripId};
pub use model::palette::VibePalette;
pub use model::trip::{DayItinerary, Trip};
pub use repo::blob_repo::{
    BlobRepository, MemoryBlobRepository, RepoError, RepoResult, SqliteBlobRepository,
};
pub use service::planner_service::{
    CommandOutcome, PlannerCommand, PlannerError, PlannerResult, PlannerService,
};
pub use store::document_store::{DocumentStore, StoreError, StoreResult, AVATAR_KEY, TRIPS_KEY};

/// Minimal health-check API for host wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
