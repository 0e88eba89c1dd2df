//! Opaque id generation for trips, activities and canvas blocks.
//!
//! Ids combine the creation time with a random suffix so two entities created
//! within the same millisecond still get distinct ids.

use chrono::Utc;
use uuid::Uuid;

/// Stable identifier of a trip within the document store.
pub type TripId = String;
/// Identifier of an activity, unique within its trip.
pub type ActivityId = String;
/// Identifier of a canvas block, unique within its activity.
pub type BlockId = String;

const SUFFIX_LEN: usize = 8;

/// Generates a new trip id (`trip_<millis>_<suffix>`).
pub fn new_trip_id() -> TripId {
    generate("trip")
}

/// Generates a new activity id (`act_<millis>_<suffix>`).
pub fn new_activity_id() -> ActivityId {
    generate("act")
}

/// Generates a new canvas block id (`block_<millis>_<suffix>`).
pub fn new_block_id() -> BlockId {
    generate("block")
}

fn generate(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}_{millis}_{}", &suffix[..SUFFIX_LEN])
}

#[cfg(test)]
mod tests {
    use super::{new_activity_id, new_block_id, new_trip_id};

    #[test]
    fn ids_carry_kind_prefix() {
        assert!(new_trip_id().starts_with("trip_"));
        assert!(new_activity_id().starts_with("act_"));
        assert!(new_block_id().starts_with("block_"));
    }

    #[test]
    fn back_to_back_ids_are_distinct() {
        let first = new_block_id();
        let second = new_block_id();
        assert_ne!(first, second);
    }
}
