// SPDX-License-Identifier: MIT

//! Persistence-marker tests: `#[image_cache(true)]` keeps the generated
//! fields out of serde-managed storage.

use image_cache::image_cache;

#[image_cache(true)]
#[derive(serde::Serialize, serde::Deserialize)]
struct Badge {
    badge_data: Option<Vec<u8>>,
}

#[test]
fn generated_fields_are_not_serialized() {
    let badge = Badge::new(Some(vec![1, 2, 3]));
    let value = serde_json::to_value(&badge).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("badge_data"));
}

#[test]
fn deserializes_without_generated_fields() {
    let mut badge: Badge = serde_json::from_str(r#"{"badge_data":null}"#).unwrap();
    assert!(badge.badge().is_none());
}

#[test]
fn buffer_round_trips() {
    let badge = Badge::new(Some(vec![9, 8, 7]));
    let json = serde_json::to_string(&badge).unwrap();
    let back: Badge = serde_json::from_str(&json).unwrap();
    assert_eq!(back.badge_data, Some(vec![9, 8, 7]));
}
