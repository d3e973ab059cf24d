// SPDX-License-Identifier: MIT

use image_cache::image_cache;

#[image_cache]
struct Picture {
    icon_data: Option<Vec<u8>>,
    label: String,
}

fn main() {}
