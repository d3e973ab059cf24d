// SPDX-License-Identifier: MIT

//! Failure taxonomy for `#[image_cache]` expansion.
//!
//! Every failure is terminal for the invocation: the macro emits a single
//! diagnostic attached to the offending tokens and no declarations. None
//! of these cover run-time decode failures, which the generated accessor
//! swallows by design (see `image-cache-core::decode`).

use proc_macro2::Span;
use quote::ToTokens;
use thiserror::Error;

/// Everything that can go wrong while expanding the attribute.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// Shape assumptions were violated in a way user input should not be
    /// able to trigger.
    #[error("#[image_cache] produced an internal error, please report")]
    Internal,

    /// The attribute was placed on something other than a struct with
    /// named fields (or the struct declares no field at all).
    #[error("#[image_cache] only supports structs with a named field")]
    OnlyStruct,

    /// The struct declares more than one field.
    #[error("#[image_cache] requires the struct to declare exactly one field")]
    OnlyOneField,

    /// The buffer field's declared type does not render as the expected
    /// optional buffer type.
    #[error("#[image_cache] requires `{ident}` to be of type `{expected}`")]
    MustBeType {
        /// The offending field identifier.
        ident: String,
        /// The expected rendered type.
        expected: String,
    },

    /// The buffer field's name lacks the required suffix.
    #[error("#[image_cache] requires `{ident}` to end with the suffix `{suffix}`")]
    MustHaveSuffix {
        /// The offending field identifier.
        ident: String,
        /// The required suffix.
        suffix: String,
    },

    /// The buffer field's name is exactly the suffix, leaving nothing to
    /// derive the generated names from.
    #[error("#[image_cache] requires `{ident}` to have a non-empty prefix before `{suffix}`")]
    EmptyPrefix {
        /// The offending field identifier.
        ident: String,
        /// The required suffix.
        suffix: String,
    },

    /// The prefix before the suffix is a reserved word and cannot name
    /// the generated accessor.
    #[error(
        "#[image_cache] cannot derive an accessor named `{prefix}` from `{ident}` because it is a reserved identifier"
    )]
    ReservedPrefix {
        /// The offending field identifier.
        ident: String,
        /// The unusable prefix.
        prefix: String,
    },

    /// The attribute argument is not a literal `true` or `false`.
    #[error("#[image_cache] takes a single boolean literal argument")]
    MustBeBoolLiteral,

    /// The attribute was given more than one argument.
    #[error("#[image_cache] takes at most one argument")]
    TooManyArguments,
}

impl ExpandError {
    /// Converts into a diagnostic at the given span.
    pub fn at(self, span: Span) -> syn::Error {
        syn::Error::new(span, self.to_string())
    }

    /// Converts into a diagnostic covering the given tokens.
    pub fn spanned<T: ToTokens>(self, tokens: T) -> syn::Error {
        syn::Error::new_spanned(tokens, self.to_string())
    }
}
