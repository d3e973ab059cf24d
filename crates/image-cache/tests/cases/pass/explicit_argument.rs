// SPDX-License-Identifier: MIT

use image_cache::image_cache;

#[image_cache(false)]
struct Thumbnail {
    thumbnail_data: Option<Vec<u8>>,
}

fn main() {
    let mut thumb = Thumbnail::new(Some(Vec::new()));
    // an empty buffer is present but undecodable: the slot stays empty
    assert!(thumb.thumbnail().is_none());
}
