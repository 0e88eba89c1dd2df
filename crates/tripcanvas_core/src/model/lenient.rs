//! Tolerant readers for documents written by other client versions.
//!
//! # Invariants
//! - A list entry that cannot be read is dropped; its siblings survive.
//! - A scalar that cannot be read takes its type's default.
//! - Only input that is not JSON at all fails the whole document.

use log::warn;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Recognized<T> {
    Value(T),
    Other(IgnoredAny),
}

/// Reads a list, dropping entries whose shape is not recognized.
pub(crate) fn skip_unrecognized<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Vec::<Recognized<T>>::deserialize(deserializer)?;
    let total = entries.len();
    let kept: Vec<T> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Recognized::Value(value) => Some(value),
            Recognized::Other(_) => None,
        })
        .collect();
    if kept.len() < total {
        warn!(
            "event=document_read module=model status=degraded skipped={}",
            total - kept.len()
        );
    }
    Ok(kept)
}

/// Reads a value, falling back to its default when it is not recognized.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    match Recognized::<T>::deserialize(deserializer)? {
        Recognized::Value(value) => Ok(value),
        Recognized::Other(_) => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::{or_default, skip_unrecognized};
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Eq, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum Mood {
        #[default]
        Calm,
        Busy,
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "or_default")]
        mood: Mood,
        #[serde(default, deserialize_with = "skip_unrecognized")]
        counts: Vec<u8>,
    }

    #[test]
    fn unknown_enum_value_reads_as_default() {
        let holder: Holder = serde_json::from_str(r#"{"mood": "frantic"}"#).unwrap();
        assert_eq!(holder.mood, Mood::Calm);
        let holder: Holder = serde_json::from_str(r#"{"mood": "busy"}"#).unwrap();
        assert_eq!(holder.mood, Mood::Busy);
    }

    #[test]
    fn unreadable_list_entries_are_dropped() {
        let holder: Holder = serde_json::from_str(r#"{"counts": [1, "two", 3, 999]}"#).unwrap();
        assert_eq!(holder.counts, vec![1, 3]);
    }
}
