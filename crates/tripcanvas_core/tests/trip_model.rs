use tripcanvas_core::store::defaults::default_trips;
use tripcanvas_core::store::document_store::{build_trip, deserialize_trips, serialize_trips};
use tripcanvas_core::{Activity, ActivityDraft, CanvasBlock, Category, MediaItem, MediaKind, Trip};

fn rich_trip() -> Trip {
    let mut trip = build_trip("trip_1".to_string(), "Kyoto", "2024-05-10", "2024-05-11");
    let mut activity = Activity::from_draft(
        "act_1",
        "https://example.com/a.png",
        ActivityDraft::default()
            .with_title("Tea")
            .with_category(Category::Chill)
            .with_location("Gion"),
    );
    activity.blocks = vec![
        CanvasBlock::Text {
            id: "b1".to_string(),
            content: "matcha".to_string(),
        },
        CanvasBlock::image("b2", "data:image/png;base64,AAAA"),
    ];
    activity.media = vec![MediaItem {
        id: "m1".to_string(),
        kind: MediaKind::Video,
        url: "https://example.com/v.mp4".to_string(),
    }];
    activity.legacy_note = "old note".to_string();
    trip.itinerary[1].activities.push(activity);
    trip
}

#[test]
fn collection_round_trips_field_for_field() {
    let mut trips = default_trips();
    trips.push(rich_trip());

    let raw = serialize_trips(&trips).unwrap();
    let decoded = deserialize_trips(&raw).unwrap();
    assert_eq!(decoded, trips);
}

#[test]
fn activity_uses_persisted_wire_names() {
    let trip = rich_trip();
    let json = serde_json::to_value(&trip).unwrap();
    let activity = &json["itinerary"][1]["activities"][0];

    assert_eq!(activity["time_range"], "09:00 - 10:00");
    assert_eq!(activity["image_url"], "https://example.com/a.png");
    assert_eq!(activity["user_note"], "old note");
    assert_eq!(activity["vibe_color"], "bg-stone-300");
    assert_eq!(activity["text_color"], "text-stone-900");
    assert_eq!(activity["category"], "chill");
    assert_eq!(activity["location"], "Gion");
    assert_eq!(activity["blocks"][0]["type"], "text");
    assert_eq!(activity["blocks"][1]["type"], "image");
    assert_eq!(activity["blocks"][1]["url"], "data:image/png;base64,AAAA");
    assert_eq!(activity["media"][0]["type"], "video");
}

#[test]
fn document_written_by_older_clients_loads() {
    let raw = r#"[{
        "id": "tokyo",
        "title": "Tokyo Trip",
        "dates": "May 10 - May 12",
        "coverUrl": "https://picsum.photos/id/1060/800/600",
        "vibeColor": "bg-rose-200",
        "itinerary": [{
            "date": "2024-05-10",
            "dayLabel": "Day 1",
            "activities": [{
                "id": "a1",
                "time_range": "09:00 - 10:30",
                "title": "Brew",
                "category": "food",
                "vibe_color": "bg-orange-300",
                "text_color": "text-orange-950",
                "image_url": "x",
                "description": "d",
                "user_note": "Must try the honey latte!"
            }]
        }]
    }]"#;

    let trips = deserialize_trips(raw).unwrap();
    let activity = &trips[0].itinerary[0].activities[0];
    assert_eq!(activity.legacy_note, "Must try the honey latte!");
    assert!(activity.blocks.is_empty());
    assert!(activity.has_notes());
}

#[test]
fn unknown_block_type_is_skipped() {
    let raw = r#"[{"id":"t","title":"t","dates":"","coverUrl":"","itinerary":[{
        "date":"2024-01-01","dayLabel":"Day 1","activities":[{
            "id":"a","time_range":"","title":"","category":"spot",
            "vibe_color":"","text_color":"","image_url":"",
            "blocks":[
                {"id":"b","type":"video","url":"v"},
                {"id":"c","type":"text","content":"kept"}
            ]
        }]}]}]"#;
    let trips = deserialize_trips(raw).unwrap();
    let blocks = &trips[0].itinerary[0].activities[0].blocks;
    assert_eq!(
        blocks,
        &[CanvasBlock::Text {
            id: "c".to_string(),
            content: "kept".to_string(),
        }]
    );
}

#[test]
fn unknown_category_reads_as_spot() {
    let raw = r#"[{"id":"mine","title":"Mine","dates":"","coverUrl":"","itinerary":[{
        "date":"2024-01-01","dayLabel":"Day 1","activities":[{
            "id":"a","time_range":"10:00 - 11:00","title":"Mall",
            "category":"shopping","vibe_color":"bg-sky-300","text_color":"text-sky-950",
            "image_url":"x"
        }]}]}]"#;
    let trips = deserialize_trips(raw).unwrap();
    let activity = &trips[0].itinerary[0].activities[0];
    assert_eq!(activity.category, Category::Spot);
    assert_eq!(activity.title, "Mall");
}

#[test]
fn missing_strings_read_as_empty() {
    let raw = r#"[{"id":"mine","itinerary":[{"date":"2024-01-01","activities":[
        {"time_range":"10:00 - 11:00"}
    ]}]}]"#;
    let trips = deserialize_trips(raw).unwrap();
    assert_eq!(trips[0].title, "");
    assert_eq!(trips[0].date_range_label, "");
    assert_eq!(trips[0].itinerary[0].label, "");

    let activity = &trips[0].itinerary[0].activities[0];
    assert!(activity.id.starts_with("act_"));
    assert_eq!(activity.title, "");
    assert_eq!(activity.vibe_color, "");
    assert_eq!(activity.image_ref, "");
}

#[test]
fn unreadable_trip_is_dropped_and_siblings_kept() {
    let raw = r#"[{"id":"bad","title":42},{"id":"good","title":"Good"}]"#;
    let trips = deserialize_trips(raw).unwrap();
    let ids: Vec<&str> = trips.iter().map(|trip| trip.id.as_str()).collect();
    assert_eq!(ids, ["good"]);
}

#[test]
fn non_array_document_is_rejected() {
    assert!(deserialize_trips("{not json").is_err());
    assert!(deserialize_trips(r#"{"id":"t"}"#).is_err());
}
