//! Activity domain model.
//!
//! # Responsibility
//! - Define one planned event within a day and its note canvas.
//! - Define the creation draft and partial-update patch shapes.
//!
//! # Invariants
//! - `id` is stable for the activity lifetime.
//! - `time_range` is the sole sort key of the owning day.
//! - `vibe_color` and `text_color` are set together from one palette.
//! - `legacy_note` and `media` are read-compat fields; engines never edit them.

use super::block::CanvasBlock;
use super::ids::{new_activity_id, ActivityId};
use super::lenient::{or_default, skip_unrecognized};
use super::palette::VibePalette;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_RANGE: &str = "09:00 - 10:00";
pub const DEFAULT_ACTIVITY_TITLE: &str = "New Activity";
pub const DEFAULT_DESCRIPTION: &str = "Tap to add details...";

/// Activity category shown as an icon by editors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    #[default]
    Spot,
    Transport,
    Chill,
}

/// Kind of a legacy media attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// Legacy media attachment, superseded by image blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(default)]
    pub url: String,
}

/// One planned event within a day.
///
/// Reading is tolerant: missing strings read as empty, a missing id is
/// generated, an unknown category reads as `spot`, and unreadable blocks or
/// media entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default = "new_activity_id")]
    pub id: ActivityId,
    /// `"HH:MM - HH:MM"`; only the start part matters for ordering.
    #[serde(default)]
    pub time_range: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub category: Category,
    #[serde(default)]
    pub vibe_color: String,
    #[serde(default)]
    pub text_color: String,
    /// Opaque image reference.
    #[serde(rename = "image_url", default)]
    pub image_ref: String,
    #[serde(default)]
    pub description: String,
    /// Deprecated free-text note, kept so older documents still load.
    #[serde(rename = "user_note", default)]
    pub legacy_note: String,
    #[serde(default, deserialize_with = "skip_unrecognized")]
    pub blocks: Vec<CanvasBlock>,
    #[serde(default, deserialize_with = "skip_unrecognized")]
    pub media: Vec<MediaItem>,
}

impl Activity {
    /// Builds a full activity from a draft, filling every unset or blank field
    /// with its creation default.
    pub fn from_draft(
        id: impl Into<ActivityId>,
        image_ref: impl Into<String>,
        draft: ActivityDraft,
    ) -> Self {
        let palette = VibePalette::default();
        Self {
            id: id.into(),
            time_range: non_blank(draft.time_range)
                .unwrap_or_else(|| DEFAULT_TIME_RANGE.to_string()),
            title: non_blank(draft.title).unwrap_or_else(|| DEFAULT_ACTIVITY_TITLE.to_string()),
            location: Some(draft.location.unwrap_or_default()),
            category: draft.category.unwrap_or_default(),
            vibe_color: non_blank(draft.vibe_color).unwrap_or_else(|| palette.bg.to_string()),
            text_color: non_blank(draft.text_color).unwrap_or_else(|| palette.text.to_string()),
            image_ref: image_ref.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            legacy_note: String::new(),
            blocks: Vec::new(),
            media: Vec::new(),
        }
    }

    /// Returns the palette matching the stored color pair, if it is a known one.
    pub fn palette(&self) -> Option<VibePalette> {
        VibePalette::from_bg(&self.vibe_color).filter(|palette| palette.text == self.text_color)
    }

    /// Returns whether the note surface has any content (blocks or legacy note).
    pub fn has_notes(&self) -> bool {
        !self.blocks.is_empty() || !self.legacy_note.is_empty()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// User-supplied fields for a new activity. Unset or blank fields get defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDraft {
    pub time_range: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub category: Option<Category>,
    pub vibe_color: Option<String>,
    pub text_color: Option<String>,
}

impl ActivityDraft {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_time_range(mut self, time_range: impl Into<String>) -> Self {
        self.time_range = Some(time_range.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets both color tokens from one palette.
    pub fn with_palette(mut self, palette: VibePalette) -> Self {
        self.vibe_color = Some(palette.bg.to_string());
        self.text_color = Some(palette.text.to_string());
        self
    }
}

/// Partial update for an existing activity. `None` leaves a field untouched.
///
/// `description`, `legacy_note` and `media` are intentionally absent: they
/// are not editable after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityPatch {
    pub time_range: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub category: Option<Category>,
    pub vibe_color: Option<String>,
    pub text_color: Option<String>,
    pub image_ref: Option<String>,
    pub blocks: Option<Vec<CanvasBlock>>,
}

impl ActivityPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn time_range(time_range: impl Into<String>) -> Self {
        Self {
            time_range: Some(time_range.into()),
            ..Self::default()
        }
    }

    pub fn image_ref(image_ref: impl Into<String>) -> Self {
        Self {
            image_ref: Some(image_ref.into()),
            ..Self::default()
        }
    }

    pub fn blocks(blocks: Vec<CanvasBlock>) -> Self {
        Self {
            blocks: Some(blocks),
            ..Self::default()
        }
    }

    /// Sets both color tokens from one palette.
    pub fn with_palette(mut self, palette: VibePalette) -> Self {
        self.vibe_color = Some(palette.bg.to_string());
        self.text_color = Some(palette.text.to_string());
        self
    }

    /// Returns whether applying this patch can change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the supplied fields over `activity`.
    pub fn apply_to(&self, activity: &mut Activity) {
        if let Some(time_range) = &self.time_range {
            activity.time_range = time_range.clone();
        }
        if let Some(title) = &self.title {
            activity.title = title.clone();
        }
        if let Some(location) = &self.location {
            activity.location = Some(location.clone());
        }
        if let Some(category) = self.category {
            activity.category = category;
        }
        if let Some(vibe_color) = &self.vibe_color {
            activity.vibe_color = vibe_color.clone();
        }
        if let Some(text_color) = &self.text_color {
            activity.text_color = text_color.clone();
        }
        if let Some(image_ref) = &self.image_ref {
            activity.image_ref = image_ref.clone();
        }
        if let Some(blocks) = &self.blocks {
            activity.blocks = blocks.clone();
        }
    }
}
