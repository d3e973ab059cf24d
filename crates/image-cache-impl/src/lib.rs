// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod cache;
mod error;

use proc_macro::TokenStream;

/// Attribute macro deriving a memoized image accessor from a raw buffer
/// field.
///
/// Annotate a struct holding a single `Option<Vec<u8>>` field whose name
/// ends in `_data`. The macro adds a content-hash token and a cache slot to
/// the struct, plus an accessor that decodes the buffer on first read and
/// re-decodes only when the buffer content changes.
///
/// # Example
///
/// ```rust,ignore
/// use image_cache::image_cache;
///
/// #[image_cache]
/// struct ProfilePicture {
///     pub profile_picture_data: Option<Vec<u8>>,
/// }
/// ```
///
/// expands to
///
/// ```rust,ignore
/// struct ProfilePicture {
///     pub profile_picture_data: Option<Vec<u8>>,
///     profile_picture_hash: u64,
///     profile_picture_cache: Option<image_cache::Image>,
/// }
///
/// impl ProfilePicture {
///     pub fn new(profile_picture_data: Option<Vec<u8>>) -> Self { /* ... */ }
///
///     #[cfg(not(target_arch = "wasm32"))]
///     pub fn profile_picture(&mut self) -> Option<&image_cache::Image> {
///         let hash = image_cache::runtime::content_hash(
///             self.profile_picture_data.as_deref(),
///         );
///         if hash != self.profile_picture_hash {
///             if let Some(bytes) = self.profile_picture_data.as_deref() {
///                 if let Some(decoded) = image_cache::runtime::decode_image(bytes) {
///                     self.profile_picture_cache =
///                         Some(image_cache::Image::from_dynamic(decoded));
///                     self.profile_picture_hash = hash;
///                 }
///             }
///         }
///         self.profile_picture_cache.as_ref()
///     }
/// }
/// ```
///
/// A second `profile_picture` definition, gated on
/// `#[cfg(target_arch = "wasm32")]`, decodes via the PNG/JPEG-only web
/// backend instead; the annotated crate's target keeps exactly one of the
/// two. Targets that are neither unix, windows, nor wasm32 fail to build
/// the runtime crate with a fixed diagnostic.
///
/// # Argument
///
/// The attribute takes at most one positional boolean literal. `true` puts
/// `#[serde(skip)]` on both generated fields so a serde-managed struct
/// never persists them:
///
/// ```rust,ignore
/// #[image_cache(true)]
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Badge {
///     badge_data: Option<Vec<u8>>,
/// }
/// ```
///
/// # Rules
///
/// | Rule | Diagnostic on violation |
/// |------|-------------------------|
/// | Item is a struct with named fields | "only supports structs with named fields" |
/// | Struct declares exactly one field | "exactly one field" |
/// | Field type renders as `Option<Vec<u8>>` | "must be of type" |
/// | Field name ends with `_data` | "must end with the suffix" |
/// | Prefix before `_data` is non-empty | "non-empty prefix" |
/// | Prefix is usable as an identifier (not `fn`, `type`, ...) | "reserved identifier" |
/// | Argument, if any, is `true` or `false` | "single boolean literal" |
///
/// # Caching behavior
///
/// The accessor is a single-slot, non-evicting cache. A read re-decodes
/// only when the buffer's content hash differs from the stored token AND
/// the buffer is present AND decoding succeeds; otherwise the previously
/// cached image (possibly `None`) is returned as-is. Decode failures are
/// never surfaced to the caller.
#[proc_macro_attribute]
pub fn image_cache(attr: TokenStream, item: TokenStream) -> TokenStream {
    cache::expand(attr.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
