// SPDX-License-Identifier: MIT

use image_cache::image_cache;

#[image_cache]
struct ProfilePicture {
    pub profile_picture_data: Option<Vec<u8>>,
}

fn main() {
    let mut picture = ProfilePicture::new(None);
    assert!(picture.profile_picture().is_none());
}
