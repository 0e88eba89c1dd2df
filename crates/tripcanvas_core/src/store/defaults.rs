//! Built-in documents used when nothing usable is persisted.

use crate::model::activity::{Activity, Category};
use crate::model::block::CanvasBlock;
use crate::model::palette::VibePalette;
use crate::model::trip::{DayItinerary, Trip};

/// Avatar reference used until the user picks one.
pub const DEFAULT_AVATAR_REF: &str = "https://picsum.photos/id/64/100/100";

/// The seeded trip collection shown on first launch.
pub fn default_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "tokyo".to_string(),
            title: "Tokyo Trip".to_string(),
            date_range_label: "May 10 - May 12".to_string(),
            cover_image_ref: "https://picsum.photos/id/1060/800/600".to_string(),
            vibe_color: "bg-rose-200".to_string(),
            itinerary: tokyo_itinerary(),
        },
        Trip {
            id: "shanghai".to_string(),
            title: "Shanghai Weekend".to_string(),
            date_range_label: "Jun 05 - Jun 07".to_string(),
            cover_image_ref: "https://picsum.photos/id/1047/800/600".to_string(),
            vibe_color: "bg-sky-200".to_string(),
            itinerary: Vec::new(),
        },
    ]
}

fn tokyo_itinerary() -> Vec<DayItinerary> {
    let mut arrival = DayItinerary::new("2024-05-10", "Day 1: Arrival & Vibe");
    arrival.activities = vec![
        seeded(
            SeedActivity {
                id: "a1",
                time_range: "09:00 - 10:30",
                title: "Morning Brew @ Cloud",
                category: Category::Food,
                palette: VibePalette::SUNRISE,
                image_ref: "https://picsum.photos/id/1060/800/600",
                description: "Start the trip with the famous cloud latte. The aesthetic here is pure white and wood.",
                legacy_note: "Must try the honey latte!",
            },
            vec![
                text("b1", "The coffee aroma hit me as soon as I walked in. \u{2615}\u{fe0f}"),
                text("b2", "It's a bit pricey, but the atmosphere is unmatched."),
            ],
        ),
        seeded(
            SeedActivity {
                id: "a2",
                time_range: "11:00 - 13:00",
                title: "Modern Art Walk",
                category: Category::Spot,
                palette: VibePalette::DAYDREAM,
                image_ref: "https://picsum.photos/id/1047/800/600",
                description: "A gentle stroll through the contemporary district. Look for the blue sculpture.",
                legacy_note: "",
            },
            Vec::new(),
        ),
    ];

    let mut colors = DayItinerary::new("2024-05-11", "Day 2: City Colors");
    colors.activities = vec![seeded(
        SeedActivity {
            id: "b1",
            time_range: "10:00 - 12:00",
            title: "Pink Park Picnic",
            category: Category::Spot,
            palette: VibePalette::SAKURA,
            image_ref: "https://picsum.photos/id/326/800/600",
            description: "Cherry blossoms might be late, but the vibe is eternal pink. Rent a mat nearby.",
            legacy_note: "",
        },
        vec![text("b3", "Remember to bring a portable speaker!")],
    )];

    vec![arrival, colors]
}

struct SeedActivity {
    id: &'static str,
    time_range: &'static str,
    title: &'static str,
    category: Category,
    palette: VibePalette,
    image_ref: &'static str,
    description: &'static str,
    legacy_note: &'static str,
}

fn seeded(seed: SeedActivity, blocks: Vec<CanvasBlock>) -> Activity {
    Activity {
        id: seed.id.to_string(),
        time_range: seed.time_range.to_string(),
        title: seed.title.to_string(),
        location: None,
        category: seed.category,
        vibe_color: seed.palette.bg.to_string(),
        text_color: seed.palette.text.to_string(),
        image_ref: seed.image_ref.to_string(),
        description: seed.description.to_string(),
        legacy_note: seed.legacy_note.to_string(),
        blocks,
        media: Vec::new(),
    }
}

fn text(id: &str, content: &str) -> CanvasBlock {
    CanvasBlock::Text {
        id: id.to_string(),
        content: content.to_string(),
    }
}
