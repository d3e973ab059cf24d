// SPDX-License-Identifier: MIT

//! Emission of the rewritten struct and its memoized accessor.
//!
//! # Generated Code
//!
//! For a validated `profile_picture_data` buffer, emits:
//!
//! ```rust,ignore
//! struct ProfilePicture {
//!     pub profile_picture_data: Option<Vec<u8>>,
//!     profile_picture_hash: u64,
//!     profile_picture_cache: Option<::image_cache::Image>,
//! }
//!
//! impl ProfilePicture {
//!     pub fn new(profile_picture_data: Option<Vec<u8>>) -> Self { /* ... */ }
//!     pub fn profile_picture(&mut self) -> Option<&::image_cache::Image> { /* ... */ }
//! }
//! ```
//!
//! The accessor is a single-slot, non-evicting cache: the slot is
//! overwritten in place only when the content hash differs from the stored
//! token, the buffer is present, and the decode succeeds. In every other
//! case — unchanged hash, absent buffer, failed decode — both fields are
//! left untouched and the previously cached value is returned as-is.
//!
//! One accessor definition is emitted per [`DecodeStrategy`], each behind
//! its `cfg` predicate; the annotated crate's own compilation keeps the
//! one matching its target.

use proc_macro2::TokenStream;
use quote::quote;

use super::{config::GenerationConfig, parse::PropertySpec, strategy::DecodeStrategy};

/// Emits the full expansion for one validated invocation.
pub fn expansion(spec: &PropertySpec, config: &GenerationConfig) -> TokenStream {
    let struct_decl = struct_with_cache_slots(spec, config);
    let accessor_impl = accessor_impl(spec);

    quote! {
        #struct_decl
        #accessor_impl
    }
}

/// Re-emits the annotated struct with the token and slot fields appended.
fn struct_with_cache_slots(spec: &PropertySpec, config: &GenerationConfig) -> TokenStream {
    let item = &spec.item;
    let attrs = &item.attrs;
    let vis = &item.vis;
    let ident = &item.ident;
    let generics = &item.generics;
    let where_clause = &generics.where_clause;
    let source_field = item.fields.iter().next();
    let hash_field = &spec.hash_field;
    let cache_field = &spec.cache_field;
    let marker = config
        .persistence_marker
        .then(|| quote!(#[serde(skip)]));

    quote! {
        #(#attrs)*
        #vis struct #ident #generics #where_clause {
            #source_field,
            #marker
            #hash_field: u64,
            #marker
            #cache_field: ::core::option::Option<::image_cache::Image>,
        }
    }
}

/// Emits the constructor and one cfg-gated accessor per decode strategy.
fn accessor_impl(spec: &PropertySpec) -> TokenStream {
    let item = &spec.item;
    let ident = &item.ident;
    let vis = &item.vis;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let source = &spec.source;
    let hash_field = &spec.hash_field;
    let cache_field = &spec.cache_field;

    let new_doc = format!("Creates a new `{ident}` with an empty cache slot.");
    let accessors = DecodeStrategy::ALL.into_iter().map(|strategy| accessor_fn(spec, strategy));

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #[doc = #new_doc]
            #vis fn new(#source: ::core::option::Option<::std::vec::Vec<u8>>) -> Self {
                Self {
                    #source,
                    #hash_field: 0,
                    #cache_field: ::core::option::Option::None,
                }
            }

            #(#accessors)*
        }
    }
}

/// Emits the memoizing accessor wired to one strategy's decode path.
fn accessor_fn(spec: &PropertySpec, strategy: DecodeStrategy) -> TokenStream {
    let vis = &spec.item.vis;
    let source = &spec.source;
    let hash_field = &spec.hash_field;
    let cache_field = &spec.cache_field;
    let accessor = &spec.accessor;
    let cfg_predicate = strategy.cfg_predicate();
    let decode_call = strategy.decode_call();
    let wrap_call = strategy.wrap_call();

    let accessor_doc = format!(
        "Decoded image for `{source}`, memoized until the buffer content changes.\n\n\
         Returns the previously cached image (possibly `None`) when the buffer is \
         absent or fails to decode."
    );

    quote! {
        #[cfg(#cfg_predicate)]
        #[doc = #accessor_doc]
        #vis fn #accessor(&mut self) -> ::core::option::Option<&::image_cache::Image> {
            let hash = ::image_cache::runtime::content_hash(self.#source.as_deref());
            if hash != self.#hash_field {
                if let ::core::option::Option::Some(bytes) = self.#source.as_deref() {
                    if let ::core::option::Option::Some(decoded) = #decode_call(bytes) {
                        self.#cache_field =
                            ::core::option::Option::Some(#wrap_call(decoded));
                        self.#hash_field = hash;
                    }
                }
            }
            self.#cache_field.as_ref()
        }
    }
}
