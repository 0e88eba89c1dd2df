//! Opaque image references.
//!
//! The core stores and echoes image references; it never decodes them. This
//! module only knows how to mint references from user-supplied bytes and how
//! to build the seeded placeholder used for new trips and activities.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const PLACEHOLDER_BASE: &str = "https://picsum.photos/seed";
const PLACEHOLDER_SIZE: &str = "800/600";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Turns user-supplied image bytes into a reference usable anywhere the
/// model stores an image.
pub trait ImageRefFactory {
    fn image_ref(&self, bytes: &[u8], mime: &str) -> String;
}

/// Embeds the bytes as a `data:` URL.
///
/// The same bytes and mime type always produce the same reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlImageRefs;

impl ImageRefFactory for DataUrlImageRefs {
    fn image_ref(&self, bytes: &[u8], mime: &str) -> String {
        let mime = mime.trim();
        let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
        format!("data:{mime};base64,{}", STANDARD.encode(bytes))
    }
}

/// Seeded placeholder image reference for a freshly created entity.
pub fn placeholder_image_ref(seed: &str) -> String {
    format!("{PLACEHOLDER_BASE}/{seed}/{PLACEHOLDER_SIZE}")
}

#[cfg(test)]
mod tests {
    use super::{placeholder_image_ref, DataUrlImageRefs, ImageRefFactory};

    #[test]
    fn data_url_is_stable_for_same_bytes() {
        let refs = DataUrlImageRefs;
        let first = refs.image_ref(b"\x89PNG", "image/png");
        let second = refs.image_ref(b"\x89PNG", "image/png");
        assert_eq!(first, second);
        assert_eq!(first, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn blank_mime_falls_back() {
        let reference = DataUrlImageRefs.image_ref(b"", " ");
        assert_eq!(reference, "data:application/octet-stream;base64,");
    }

    #[test]
    fn placeholder_embeds_seed() {
        assert_eq!(
            placeholder_image_ref("trip_1"),
            "https://picsum.photos/seed/trip_1/800/600"
        );
    }
}
