// SPDX-License-Identifier: MIT

use image_cache::image_cache;

#[image_cache(1)]
struct Icon {
    icon_data: Option<Vec<u8>>,
}

fn main() {}
