//! Itinerary engine: pure operations over one trip.
//!
//! # Responsibility
//! - Add and delete days with calendar-date continuation.
//! - Add, merge-update and delete activities.
//! - Keep each day's activities ordered by start time.
//!
//! # Invariants
//! - Every operation takes `&Trip` and returns a new `Trip`; input is untouched.
//! - Lookup misses (bad index, unknown id) return an unchanged copy.
//! - Activity order is a stable sort on the start-time key, re-established
//!   after every insert or update.
//! - Stored day labels are never renumbered.

use crate::image_ref::placeholder_image_ref;
use crate::model::activity::{Activity, ActivityDraft, ActivityPatch};
use crate::model::ids::{new_activity_id, ActivityId};
use crate::model::trip::{DayItinerary, Trip};
use crate::service::calendar::{format_iso_date, next_day};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading integer regex"));

/// Sort key of a time range: minutes since midnight of its start part.
///
/// The start part is everything before the first `-`. Hours and minutes are
/// read with leading-integer semantics (`"5pm"` reads as 5); missing or
/// non-numeric parts count as 0, and digit runs too long for `i64` saturate.
pub fn start_minutes(time_range: &str) -> i64 {
    let start = time_range.split('-').next().unwrap_or_default().trim();
    let mut parts = start.split(':');
    let hours = parts.next().map_or(0, leading_int);
    let minutes = parts.next().map_or(0, leading_int);
    hours.saturating_mul(60).saturating_add(minutes)
}

fn leading_int(value: &str) -> i64 {
    LEADING_INT_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|digits| {
            let digits = digits.as_str();
            digits.parse().unwrap_or(if digits.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            })
        })
        .unwrap_or(0)
}

/// Stable in-place sort by start time; equal keys keep their relative order.
pub fn sort_activities(activities: &mut [Activity]) {
    activities.sort_by_key(|activity| start_minutes(&activity.time_range));
}

/// Appends a day after the last one, using the local current date when the
/// itinerary is empty.
pub fn add_day(trip: &Trip) -> Trip {
    add_day_on(trip, Local::now().date_naive())
}

/// Appends a day after the last one, falling back to `today`.
///
/// The new day is labelled `"Day {count+1}"`. When the fallback date is
/// already taken it moves forward until it is free.
pub fn add_day_on(trip: &Trip, today: NaiveDate) -> Trip {
    let date = trip
        .itinerary
        .last()
        .and_then(|day| next_day(&day.date))
        .unwrap_or_else(|| first_free_date(trip, format_iso_date(today)));

    let mut next = trip.clone();
    next.itinerary.push(DayItinerary::new(
        date,
        DayItinerary::ordinal_label(trip.itinerary.len() + 1),
    ));
    next
}

fn first_free_date(trip: &Trip, mut candidate: String) -> String {
    while trip.itinerary.iter().any(|day| day.date == candidate) {
        match next_day(&candidate) {
            Some(following) => candidate = following,
            None => break,
        }
    }
    candidate
}

/// Removes the day at `day_index` together with its activities.
pub fn delete_day(trip: &Trip, day_index: usize) -> Trip {
    let mut next = trip.clone();
    if day_index < next.itinerary.len() {
        next.itinerary.remove(day_index);
    }
    next
}

/// Builds an activity from `draft` with a fresh id and placeholder image,
/// then inserts it into the day.
///
/// Returns the new id alongside the trip, or `None` when the day does not
/// exist and the trip is unchanged.
pub fn add_activity(
    trip: &Trip,
    day_index: usize,
    draft: ActivityDraft,
) -> (Trip, Option<ActivityId>) {
    if day_index >= trip.itinerary.len() {
        return (trip.clone(), None);
    }
    let id = new_activity_id();
    let image_ref = placeholder_image_ref(&id);
    let activity = Activity::from_draft(id.clone(), image_ref, draft);
    (insert_activity(trip, day_index, activity), Some(id))
}

/// Inserts a fully built activity into the day and re-sorts that day.
pub fn insert_activity(trip: &Trip, day_index: usize, activity: Activity) -> Trip {
    let mut next = trip.clone();
    if let Some(day) = next.itinerary.get_mut(day_index) {
        day.activities.push(activity);
        sort_activities(&mut day.activities);
    }
    next
}

/// Merges `patch` over the first activity with `activity_id` and re-sorts
/// its day.
pub fn update_activity(trip: &Trip, activity_id: &str, patch: &ActivityPatch) -> Trip {
    let mut next = trip.clone();
    let Some(day) = next
        .itinerary
        .iter_mut()
        .find(|day| day.activity(activity_id).is_some())
    else {
        return next;
    };

    if let Some(activity) = day
        .activities
        .iter_mut()
        .find(|activity| activity.id == activity_id)
    {
        patch.apply_to(activity);
    }
    sort_activities(&mut day.activities);
    next
}

/// Removes the activity with `activity_id` from the day at `day_index`.
pub fn delete_activity(trip: &Trip, day_index: usize, activity_id: &str) -> Trip {
    let mut next = trip.clone();
    if let Some(day) = next.itinerary.get_mut(day_index) {
        day.activities.retain(|activity| activity.id != activity_id);
    }
    next
}
