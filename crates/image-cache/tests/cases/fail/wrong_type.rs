// SPDX-License-Identifier: MIT

use image_cache::image_cache;

#[image_cache]
struct Picture {
    icon_data: Vec<u8>,
}

fn main() {}
