// SPDX-License-Identifier: MIT

//! Declaration validation.
//!
//! Turns the annotated item into a [`PropertySpec`] or fails with the
//! first violated rule. Rules run in a fixed order: item shape, field
//! count, field shape, declared type, naming suffix, non-empty prefix.
//!
//! The type check compares the field type's fully rendered form against
//! [`BUFFER_TYPE`]. Full-string comparison is deliberate: a type alias for
//! `Option<Vec<u8>>` does not match, and neither does a re-spelled path
//! like `std::option::Option<Vec<u8>>`.

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident};
use syn::{Fields, Ident, Item, ItemStruct};

use crate::error::ExpandError;

/// Required suffix on the buffer field's identifier.
pub const SOURCE_SUFFIX: &str = "_data";

/// Rendered form the buffer field's declared type must match.
pub const BUFFER_TYPE: &str = "Option<Vec<u8>>";

/// Normalized description of a validated declaration.
///
/// Produced fresh per invocation; everything the generator needs is here.
#[derive(Debug)]
pub struct PropertySpec {
    /// The annotated struct as written, re-emitted by the generator with
    /// the auxiliary fields appended.
    pub item: ItemStruct,
    /// The validated buffer field identifier, e.g. `profile_picture_data`.
    pub source: Ident,
    /// Invalidation token field, `{prefix}_hash`.
    pub hash_field: Ident,
    /// Cache slot field, `{prefix}_cache`.
    pub cache_field: Ident,
    /// Generated accessor, the bare prefix, e.g. `profile_picture`.
    pub accessor: Ident,
}

/// Validates the annotated item and derives the generated names.
pub fn property_spec(item: TokenStream) -> syn::Result<PropertySpec> {
    let item = match syn::parse2::<Item>(item)? {
        Item::Struct(item) => item,
        other => return Err(ExpandError::OnlyStruct.spanned(&other)),
    };

    let field = {
        let Fields::Named(named) = &item.fields else {
            return Err(ExpandError::OnlyStruct.spanned(&item));
        };
        let mut fields = named.named.iter();
        let Some(field) = fields.next() else {
            return Err(ExpandError::OnlyStruct.spanned(&item));
        };
        if fields.next().is_some() {
            return Err(ExpandError::OnlyOneField.spanned(&item));
        }
        field.clone()
    };

    // named-field lists always carry identifiers; anything else is a bug
    let Some(source) = field.ident.clone() else {
        return Err(ExpandError::Internal.spanned(&field));
    };

    if render_type(&field.ty) != BUFFER_TYPE {
        return Err(ExpandError::MustBeType {
            ident: source.to_string(),
            expected: BUFFER_TYPE.to_owned(),
        }
        .spanned(&field.ty));
    }

    let name = source.to_string();
    let Some(prefix) = name.strip_suffix(SOURCE_SUFFIX) else {
        return Err(ExpandError::MustHaveSuffix {
            ident: name,
            suffix: SOURCE_SUFFIX.to_owned(),
        }
        .spanned(&source));
    };
    if prefix.is_empty() {
        return Err(ExpandError::EmptyPrefix {
            ident: name,
            suffix: SOURCE_SUFFIX.to_owned(),
        }
        .spanned(&source));
    }

    // a reserved prefix (e.g. `fn_data`, `__data`) cannot name the accessor
    let mut accessor: Ident = syn::parse_str(prefix).map_err(|_| {
        ExpandError::ReservedPrefix {
            ident: source.to_string(),
            prefix: prefix.to_owned(),
        }
        .spanned(&source)
    })?;
    accessor.set_span(source.span());
    let hash_field = format_ident!("{}_hash", accessor, span = source.span());
    let cache_field = format_ident!("{}_cache", accessor, span = source.span());

    Ok(PropertySpec {
        item,
        source,
        hash_field,
        cache_field,
        accessor,
    })
}

/// Renders a type to its whitespace-free textual form.
fn render_type(ty: &syn::Type) -> String {
    ty.to_token_stream()
        .to_string()
        .split_whitespace()
        .collect()
}
