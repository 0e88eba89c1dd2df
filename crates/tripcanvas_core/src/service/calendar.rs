//! Calendar-date helpers for itinerary days.
//!
//! # Invariants
//! - Dates are handled as calendar components (`NaiveDate`), never through
//!   timestamps, so no timezone shift can move a day.
//! - Unparseable input never fails a caller; helpers degrade to the raw text
//!   or to an empty result.

use crate::model::trip::DayItinerary;
use chrono::{Days, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";
const SHORT_FORMAT: &str = "%b %-d";

/// Parses a `YYYY-MM-DD` string as a calendar date.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Renders `May 10` style short month + day.
pub fn format_short(date: NaiveDate) -> String {
    date.format(SHORT_FORMAT).to_string()
}

/// Formats a day header from a stored ISO date.
///
/// Input that is not a valid date is echoed back unchanged.
pub fn format_date_header(value: &str) -> String {
    parse_iso_date(value).map_or_else(|| value.to_string(), format_short)
}

/// Builds the `"Mon D - Mon D"` label stamped on a new trip.
pub fn date_range_label(start: &str, end: &str) -> String {
    format!("{} - {}", format_date_header(start), format_date_header(end))
}

/// Number of calendar days covered by `start..=end`.
///
/// Uses the absolute difference, so an inverted range still counts the same
/// number of days.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> u64 {
    (end - start).num_days().unsigned_abs() + 1
}

/// Returns whether `end` falls before `start`.
pub fn is_inverted(start: NaiveDate, end: NaiveDate) -> bool {
    end < start
}

/// Generates one empty day per calendar day, counted forward from `start`.
pub fn days_from(start: NaiveDate, count: u64) -> Vec<DayItinerary> {
    (0..count)
        .map_while(|offset| start.checked_add_days(Days::new(offset)))
        .enumerate()
        .map(|(index, date)| {
            DayItinerary::new(format_iso_date(date), DayItinerary::ordinal_label(index + 1))
        })
        .collect()
}

/// The calendar day after `value`, or `None` when `value` is not a date.
pub fn next_day(value: &str) -> Option<String> {
    parse_iso_date(value)
        .and_then(|date| date.checked_add_days(Days::new(1)))
        .map(format_iso_date)
}
