//! Document store for the full trip collection.
//!
//! # Responsibility
//! - Own the trip collection and the user avatar reference.
//! - Create, replace and delete trips as whole values.
//! - Serialize to / deserialize from the blob repository.
//!
//! # Invariants
//! - The collection is held behind an `Arc` and is copied on write, so a
//!   snapshot handed out earlier never observes a later mutation.
//! - Loading never fails: missing, unreadable or non-JSON blobs fall back
//!   to the built-in defaults. A parseable document is kept even when some
//!   of its entries are not recognized.
//! - Mutations do not persist by themselves; callers invoke `persist`.

use crate::image_ref::placeholder_image_ref;
use crate::model::ids::{new_trip_id, TripId};
use crate::model::lenient::skip_unrecognized;
use crate::model::trip::{Trip, DEFAULT_TRIP_VIBE};
use crate::repo::blob_repo::{BlobRepository, RepoError};
use crate::service::calendar::{
    date_range_label, days_from, inclusive_day_count, is_inverted, parse_iso_date,
};
use crate::store::defaults::{default_trips, DEFAULT_AVATAR_REF};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Blob key holding the serialized trip collection.
pub const TRIPS_KEY: &str = "trips-data";
/// Blob key holding the raw avatar reference.
pub const AVATAR_KEY: &str = "user-avatar";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure while writing the document.
#[derive(Debug)]
pub enum StoreError {
    Repo(RepoError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize trips: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Serializes a trip collection to its persisted JSON form.
pub fn serialize_trips(trips: &[Trip]) -> Result<String, serde_json::Error> {
    serde_json::to_string(trips)
}

/// Parses a persisted trip collection.
///
/// Entries that cannot be read as a trip are dropped; only input that is not
/// a JSON array fails.
pub fn deserialize_trips(raw: &str) -> Result<Vec<Trip>, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    let trips = skip_unrecognized(&mut deserializer)?;
    deserializer.end()?;
    Ok(trips)
}

/// Builds a new trip spanning `start_date..=end_date`.
///
/// One empty day is generated per calendar day, counted forward from
/// `start_date`. An inverted range keeps its absolute length. When either
/// date cannot be parsed the itinerary is empty and the label shows the raw
/// input.
pub fn build_trip(id: TripId, title: &str, start_date: &str, end_date: &str) -> Trip {
    let itinerary = match (parse_iso_date(start_date), parse_iso_date(end_date)) {
        (Some(start), Some(end)) => {
            if is_inverted(start, end) {
                warn!("event=trip_build module=store status=degraded reason=inverted_range");
            }
            days_from(start, inclusive_day_count(start, end))
        }
        _ => {
            warn!("event=trip_build module=store status=degraded reason=unparseable_dates");
            Vec::new()
        }
    };

    Trip {
        cover_image_ref: placeholder_image_ref(&id),
        id,
        title: title.to_string(),
        date_range_label: date_range_label(start_date, end_date),
        vibe_color: DEFAULT_TRIP_VIBE.to_string(),
        itinerary,
    }
}

/// Owner of the trip collection and avatar, backed by a blob repository.
pub struct DocumentStore<R: BlobRepository> {
    repo: R,
    trips: Arc<Vec<Trip>>,
    avatar: String,
}

impl<R: BlobRepository> DocumentStore<R> {
    /// Opens the store and loads both blobs, falling back to defaults.
    pub fn open(repo: R) -> Self {
        let trips = load_trips(&repo);
        let avatar = load_avatar(&repo);
        Self {
            repo,
            trips: Arc::new(trips),
            avatar,
        }
    }

    /// Reads the persisted collection, or the defaults when it is unusable.
    ///
    /// Does not touch the in-memory collection.
    pub fn load(&self) -> Vec<Trip> {
        load_trips(&self.repo)
    }

    /// Cheap handle to the current collection.
    pub fn snapshot(&self) -> Arc<Vec<Trip>> {
        Arc::clone(&self.trips)
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == trip_id)
    }

    /// Creates a trip, appends it to the collection and returns it.
    pub fn create(&mut self, title: &str, start_date: &str, end_date: &str) -> Trip {
        let trip = build_trip(new_trip_id(), title, start_date, end_date);
        Arc::make_mut(&mut self.trips).push(trip.clone());
        info!(
            "event=trip_create module=store status=ok days={} total={}",
            trip.itinerary.len(),
            self.trips.len()
        );
        trip
    }

    /// Replaces the stored trip with the same id.
    ///
    /// Returns `false` when no trip matches or the value is unchanged.
    pub fn update(&mut self, trip: Trip) -> bool {
        let Some(position) = self.position(&trip.id) else {
            return false;
        };
        if self.trips[position] == trip {
            return false;
        }
        Arc::make_mut(&mut self.trips)[position] = trip;
        true
    }

    /// Removes the trip with `trip_id`. Returns `false` when it was absent.
    pub fn delete(&mut self, trip_id: &str) -> bool {
        let Some(position) = self.position(trip_id) else {
            return false;
        };
        Arc::make_mut(&mut self.trips).remove(position);
        info!(
            "event=trip_delete module=store status=ok total={}",
            self.trips.len()
        );
        true
    }

    /// Writes the current collection to `trips-data`.
    pub fn persist(&self) -> StoreResult<()> {
        let raw = serialize_trips(&self.trips)?;
        self.repo.put_blob(TRIPS_KEY, &raw)?;
        info!(
            "event=trips_persist module=store status=ok trips={} bytes={}",
            self.trips.len(),
            raw.len()
        );
        Ok(())
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Replaces the avatar reference. Returns `false` when unchanged.
    pub fn set_avatar(&mut self, image_ref: impl Into<String>) -> bool {
        let image_ref = image_ref.into();
        if self.avatar == image_ref {
            return false;
        }
        self.avatar = image_ref;
        true
    }

    /// Writes the avatar reference to `user-avatar`.
    pub fn persist_avatar(&self) -> StoreResult<()> {
        self.repo.put_blob(AVATAR_KEY, &self.avatar)?;
        Ok(())
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    fn position(&self, trip_id: &str) -> Option<usize> {
        self.trips.iter().position(|trip| trip.id == trip_id)
    }
}

fn load_trips<R: BlobRepository>(repo: &R) -> Vec<Trip> {
    match repo.get_blob(TRIPS_KEY) {
        Ok(Some(raw)) => match deserialize_trips(&raw) {
            Ok(trips) => {
                info!(
                    "event=trips_load module=store status=ok trips={}",
                    trips.len()
                );
                trips
            }
            Err(err) => {
                warn!(
                    "event=trips_load module=store status=fallback reason=malformed line={} column={}",
                    err.line(),
                    err.column()
                );
                default_trips()
            }
        },
        Ok(None) => {
            info!("event=trips_load module=store status=fallback reason=missing");
            default_trips()
        }
        Err(err) => {
            warn!("event=trips_load module=store status=fallback reason=read_failed error={err}");
            default_trips()
        }
    }
}

fn load_avatar<R: BlobRepository>(repo: &R) -> String {
    match repo.get_blob(AVATAR_KEY) {
        Ok(Some(avatar)) if !avatar.is_empty() => avatar,
        Ok(_) => DEFAULT_AVATAR_REF.to_string(),
        Err(err) => {
            warn!("event=avatar_load module=store status=fallback reason=read_failed error={err}");
            DEFAULT_AVATAR_REF.to_string()
        }
    }
}
