//! Trip and day models.
//!
//! # Responsibility
//! - Define the top-level planning unit and its per-day schedules.
//!
//! # Invariants
//! - `itinerary` is ascending by date by construction and never re-sorted.
//! - Day dates are unique within one trip.
//! - `date_range_label` and day `label` are stamped at creation and are not
//!   recomputed when days are added or removed.

use super::activity::Activity;
use super::ids::{new_trip_id, TripId};
use super::lenient::skip_unrecognized;
use serde::{Deserialize, Serialize};

/// Display token used for trips created in-app.
pub const DEFAULT_TRIP_VIBE: &str = "bg-stone-200";

/// Top-level travel plan.
///
/// Missing display strings read as empty and a missing id is generated, so a
/// partially written document still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default = "new_trip_id")]
    pub id: TripId,
    #[serde(default)]
    pub title: String,
    /// Human-readable range such as `"May 10 - May 12"`.
    #[serde(rename = "dates", default)]
    pub date_range_label: String,
    /// Opaque image reference.
    #[serde(rename = "coverUrl", default)]
    pub cover_image_ref: String,
    #[serde(rename = "vibeColor", default = "default_trip_vibe")]
    pub vibe_color: String,
    #[serde(default, deserialize_with = "skip_unrecognized")]
    pub itinerary: Vec<DayItinerary>,
}

fn default_trip_vibe() -> String {
    DEFAULT_TRIP_VIBE.to_string()
}

impl Trip {
    /// Finds an activity anywhere in the itinerary (first match).
    ///
    /// Returns the owning day index together with the activity.
    pub fn find_activity(&self, activity_id: &str) -> Option<(usize, &Activity)> {
        self.itinerary.iter().enumerate().find_map(|(day_index, day)| {
            day.activity(activity_id)
                .map(|activity| (day_index, activity))
        })
    }
}

/// One calendar day of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayItinerary {
    /// ISO calendar date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    /// Informational label such as `"Day 2"`; never used for lookup.
    #[serde(rename = "dayLabel", default)]
    pub label: String,
    /// Sorted by start time, ascending and stable.
    #[serde(default, deserialize_with = "skip_unrecognized")]
    pub activities: Vec<Activity>,
}

impl DayItinerary {
    /// Creates an empty day.
    pub fn new(date: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            label: label.into(),
            activities: Vec::new(),
        }
    }

    /// Standard ordinal label stamped on generated days.
    pub fn ordinal_label(ordinal: usize) -> String {
        format!("Day {ordinal}")
    }

    pub fn activity(&self, activity_id: &str) -> Option<&Activity> {
        self.activities
            .iter()
            .find(|activity| activity.id == activity_id)
    }
}
