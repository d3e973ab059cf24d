// SPDX-License-Identifier: MIT

//! Platform decode strategies.
//!
//! A proc macro runs on the host toolchain and never sees the target the
//! annotated crate is compiled for, so the platform switch cannot be
//! resolved here. Instead the generator emits one accessor definition per
//! strategy, each behind that strategy's `cfg` predicate, and the
//! consumer's own compilation keeps exactly one of them. The two paths
//! share the same shape of interface — a decode call yielding an optional
//! decoded value, and a wrap call turning it into the cached `Image`.
//!
//! Targets outside both families are rejected by `image-cache-core` with
//! a fixed compile error.

use proc_macro2::TokenStream;
use quote::quote;

/// One platform decode path emitted into the expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// Non-wasm targets: format-sniffing decode over the full codec set,
    /// wrapped from a `DynamicImage`.
    Native,
    /// wasm32 targets: PNG/JPEG-only decode straight to an RGBA frame.
    Web,
}

impl DecodeStrategy {
    /// Every strategy, in emission order.
    pub const ALL: [Self; 2] = [Self::Native, Self::Web];

    /// `cfg` predicate guarding this strategy's accessor definition.
    ///
    /// The predicates are mutually exclusive and jointly exhaustive, so
    /// any given target compiles exactly one accessor.
    pub fn cfg_predicate(self) -> TokenStream {
        match self {
            Self::Native => quote!(not(target_arch = "wasm32")),
            Self::Web => quote!(target_arch = "wasm32"),
        }
    }

    /// Path of the decode function the accessor calls.
    pub fn decode_call(self) -> TokenStream {
        match self {
            Self::Native => quote!(::image_cache::runtime::decode_image),
            Self::Web => quote!(::image_cache::runtime::decode_image_web),
        }
    }

    /// Path of the constructor wrapping the decoded value into an `Image`.
    pub fn wrap_call(self) -> TokenStream {
        match self {
            Self::Native => quote!(::image_cache::Image::from_dynamic),
            Self::Web => quote!(::image_cache::Image::from_frame),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_partition_on_wasm32() {
        let native = DecodeStrategy::Native.cfg_predicate().to_string();
        let web = DecodeStrategy::Web.cfg_predicate().to_string();
        assert_eq!(native.replace(' ', ""), "not(target_arch=\"wasm32\")");
        assert_eq!(web.replace(' ', ""), "target_arch=\"wasm32\"");
    }

    #[test]
    fn emission_order_covers_both_strategies() {
        assert_eq!(
            DecodeStrategy::ALL,
            [DecodeStrategy::Native, DecodeStrategy::Web]
        );
    }

    #[test]
    fn native_calls_the_full_decoder() {
        let call = DecodeStrategy::Native.decode_call().to_string();
        assert!(call.contains("decode_image"));
        assert!(!call.contains("web"));
    }

    #[test]
    fn web_calls_the_frame_decoder() {
        assert!(
            DecodeStrategy::Web
                .decode_call()
                .to_string()
                .contains("decode_image_web")
        );
        assert!(
            DecodeStrategy::Web
                .wrap_call()
                .to_string()
                .contains("from_frame")
        );
    }
}
