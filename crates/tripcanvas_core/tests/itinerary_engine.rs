use chrono::NaiveDate;
use tripcanvas_core::service::itinerary_service::{
    add_activity, add_day_on, delete_activity, delete_day, insert_activity, update_activity,
};
use tripcanvas_core::store::document_store::build_trip;
use tripcanvas_core::{Activity, ActivityDraft, ActivityPatch, Category, Trip, VibePalette};

fn trip() -> Trip {
    build_trip("trip_1".to_string(), "Trip", "2024-05-10", "2024-05-12")
}

fn activity(id: &str, time_range: &str) -> Activity {
    Activity::from_draft(
        id,
        format!("img-{id}"),
        ActivityDraft::default()
            .with_title(id)
            .with_time_range(time_range),
    )
}

fn ids(trip: &Trip, day_index: usize) -> Vec<&str> {
    trip.itinerary[day_index]
        .activities
        .iter()
        .map(|activity| activity.id.as_str())
        .collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

#[test]
fn create_spans_inclusive_day_range() {
    let trip = trip();
    let dates: Vec<&str> = trip.itinerary.iter().map(|d| d.date.as_str()).collect();
    let labels: Vec<&str> = trip.itinerary.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(dates, ["2024-05-10", "2024-05-11", "2024-05-12"]);
    assert_eq!(labels, ["Day 1", "Day 2", "Day 3"]);
    assert_eq!(trip.date_range_label, "May 10 - May 12");
    assert!(trip.itinerary.iter().all(|d| d.activities.is_empty()));
}

#[test]
fn add_day_continues_after_last_date() {
    let original = trip();
    let next = add_day_on(&original, today());

    assert_eq!(original.itinerary.len(), 3);
    assert_eq!(next.itinerary.len(), 4);
    assert_eq!(next.itinerary[3].date, "2024-05-13");
    assert_eq!(next.itinerary[3].label, "Day 4");
}

#[test]
fn delete_day_keeps_stamped_labels() {
    let next = delete_day(&trip(), 1);
    let labels: Vec<&str> = next.itinerary.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, ["Day 1", "Day 3"]);

    let after_add = add_day_on(&next, today());
    assert_eq!(after_add.itinerary[2].date, "2024-05-13");
    assert_eq!(after_add.itinerary[2].label, "Day 3");
}

#[test]
fn delete_day_out_of_range_is_noop() {
    let original = trip();
    assert_eq!(delete_day(&original, 3), original);
    assert_eq!(delete_day(&original, usize::MAX), original);
}

#[test]
fn insert_keeps_day_sorted_by_start_time() {
    let mut trip = trip();
    for (id, time) in [("lunch", "12:30 - 13:30"), ("coffee", "8:15 - 9:00"), ("dinner", "19:00 - 21:00")] {
        trip = insert_activity(&trip, 0, activity(id, time));
    }
    assert_eq!(ids(&trip, 0), ["coffee", "lunch", "dinner"]);
}

#[test]
fn insert_into_missing_day_is_noop() {
    let original = trip();
    assert_eq!(insert_activity(&original, 9, activity("x", "10:00")), original);
}

#[test]
fn add_activity_applies_draft_defaults() {
    let (trip, created) = add_activity(&trip(), 2, ActivityDraft::default());
    let added = &trip.itinerary[2].activities[0];
    assert_eq!(created.as_deref(), Some(added.id.as_str()));
    assert!(added.id.starts_with("act_"));
    assert_eq!(added.time_range, "09:00 - 10:00");
    assert_eq!(added.title, "New Activity");
    assert_eq!(added.category, Category::Spot);
    assert_eq!(added.palette(), Some(VibePalette::MINIMAL));
    assert!(added.image_ref.contains(&added.id));
    assert!(added.blocks.is_empty());
    assert_eq!(added.legacy_note, "");
}

#[test]
fn add_activity_treats_blank_draft_fields_as_unset() {
    let draft = ActivityDraft {
        vibe_color: Some(String::new()),
        text_color: Some("  ".to_string()),
        ..ActivityDraft::default()
    }
    .with_title("")
    .with_time_range("   ");
    let (trip, _) = add_activity(&trip(), 0, draft);

    let added = &trip.itinerary[0].activities[0];
    assert_eq!(added.title, "New Activity");
    assert_eq!(added.time_range, "09:00 - 10:00");
    assert_eq!(added.palette(), Some(VibePalette::MINIMAL));
}

#[test]
fn add_activity_to_missing_day_reports_no_id() {
    let original = trip();
    let (next, created) = add_activity(&original, 3, ActivityDraft::default());
    assert_eq!(next, original);
    assert_eq!(created, None);
}

#[test]
fn update_changes_only_the_named_field() {
    let mut original = trip();
    original = insert_activity(&original, 0, activity("a", "09:00 - 10:00"));
    original = insert_activity(&original, 0, activity("b", "11:00 - 12:00"));
    original = insert_activity(&original, 1, activity("c", "09:00 - 10:00"));

    let next = update_activity(&original, "b", &ActivityPatch::title("X"));

    let mut expected = original.clone();
    expected.itinerary[0].activities[1].title = "X".to_string();
    assert_eq!(next, expected);
}

#[test]
fn update_time_resorts_owning_day() {
    let mut trip = trip();
    trip = insert_activity(&trip, 0, activity("a", "09:00 - 10:00"));
    trip = insert_activity(&trip, 0, activity("b", "11:00 - 12:00"));

    let moved = update_activity(&trip, "b", &ActivityPatch::time_range("07:00 - 08:00"));
    assert_eq!(ids(&moved, 0), ["b", "a"]);
}

#[test]
fn equal_start_times_keep_relative_order() {
    let mut trip = trip();
    trip = insert_activity(&trip, 0, activity("first", "09:00 - 10:00"));
    trip = insert_activity(&trip, 0, activity("second", "09:00 - 11:00"));
    trip = insert_activity(&trip, 0, activity("third", "9:0 - 9:30"));
    assert_eq!(ids(&trip, 0), ["first", "second", "third"]);

    let renamed = update_activity(&trip, "second", &ActivityPatch::title("renamed"));
    assert_eq!(ids(&renamed, 0), ["first", "second", "third"]);

    let retimed = update_activity(&renamed, "first", &ActivityPatch::time_range("09:00 - 12:00"));
    assert_eq!(ids(&retimed, 0), ["first", "second", "third"]);
}

#[test]
fn update_unknown_activity_is_noop() {
    let original = insert_activity(&trip(), 0, activity("a", "09:00"));
    assert_eq!(
        update_activity(&original, "missing", &ActivityPatch::title("X")),
        original
    );
}

#[test]
fn update_palette_sets_both_tokens() {
    let original = insert_activity(&trip(), 0, activity("a", "09:00"));
    let patch = ActivityPatch::default().with_palette(VibePalette::OCEAN);
    let next = update_activity(&original, "a", &patch);
    assert_eq!(next.itinerary[0].activities[0].palette(), Some(VibePalette::OCEAN));
}

#[test]
fn delete_activity_is_idempotent() {
    let original = insert_activity(&trip(), 0, activity("a", "09:00"));
    let once = delete_activity(&original, 0, "a");
    assert!(once.itinerary[0].activities.is_empty());
    assert_eq!(delete_activity(&once, 0, "a"), once);
    assert_eq!(delete_activity(&original, 1, "a"), original);
    assert_eq!(delete_activity(&original, 7, "a"), original);
}
