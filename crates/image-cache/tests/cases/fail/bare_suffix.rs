// SPDX-License-Identifier: MIT

use image_cache::image_cache;

#[image_cache]
struct Picture {
    _data: Option<Vec<u8>>,
}

fn main() {}
