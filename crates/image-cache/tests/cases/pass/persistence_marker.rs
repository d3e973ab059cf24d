// SPDX-License-Identifier: MIT

use image_cache::image_cache;

#[image_cache(true)]
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Badge {
    pub badge_data: Option<Vec<u8>>,
}

fn main() {
    let badge = Badge::new(None);
    let json = serde_json::to_string(&badge).unwrap();
    assert_eq!(json, r#"{"badge_data":null}"#);
}
