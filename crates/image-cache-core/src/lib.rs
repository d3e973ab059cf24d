// SPDX-License-Identifier: MIT

//! Runtime types for `image-cache` generated accessors.
//!
//! This crate provides the pieces a generated accessor links against:
//!
//! - [`Image`] — the decoded resource held in a cache slot
//! - [`content_hash`] — the change-detection token over a raw buffer
//! - [`decode`] — the platform decode backends
//!
//! Most users should depend on `image-cache`, which re-exports everything
//! the macro expansion needs. Nothing here is useful on its own except
//! [`Image`], which is the type returned by generated accessors.

#![warn(missing_docs)]
#![warn(clippy::all)]

// the decode backends cover exactly these platform families
#[cfg(not(any(unix, windows, target_arch = "wasm32")))]
compile_error!("image-cache does not support this build target");

pub mod decode;
mod hash;
mod resource;

pub use hash::content_hash;
pub use resource::{Image, RgbaFrame};
