// SPDX-License-Identifier: MIT

use image_cache::image_cache;

#[image_cache]
struct Picture {
    fn_data: Option<Vec<u8>>,
}

fn main() {}
