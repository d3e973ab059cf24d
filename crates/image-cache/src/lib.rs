// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub use image_cache_core::Image;
pub use image_cache_impl::image_cache;

/// Runtime support for generated accessors.
///
/// Macro expansions resolve against these paths; nothing here is a public
/// API and anything may change between releases.
#[doc(hidden)]
pub mod runtime {
    pub use image_cache_core::content_hash;
    #[cfg(not(target_arch = "wasm32"))]
    pub use image_cache_core::decode::decode_image;
    #[cfg(target_arch = "wasm32")]
    pub use image_cache_core::decode::decode_image_web;
}
