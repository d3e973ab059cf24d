// SPDX-License-Identifier: MIT

//! Attribute-argument parsing.
//!
//! The attribute takes at most one positional argument, and it must be a
//! literal `true` or `false` — not an expression that evaluates to a bool,
//! not a named parameter. Extra arguments are rejected outright rather
//! than silently ignored.

use proc_macro2::TokenStream;
use syn::{Expr, ExprLit, Lit, Token, punctuated::Punctuated};

use crate::error::ExpandError;

/// Call-site configuration for one expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Put `#[serde(skip)]` on the generated fields so a serde-managed
    /// struct never persists them.
    pub persistence_marker: bool,
}

/// Parses the attribute's argument tokens.
pub fn generation_config(attr: TokenStream) -> syn::Result<GenerationConfig> {
    if attr.is_empty() {
        return Ok(GenerationConfig::default());
    }

    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let args = syn::parse::Parser::parse2(parser, attr)
        .map_err(|err| ExpandError::MustBeBoolLiteral.at(err.span()))?;

    if args.len() > 1 {
        return Err(ExpandError::TooManyArguments.spanned(&args));
    }

    match args.first() {
        Some(Expr::Lit(ExprLit {
            lit: Lit::Bool(flag),
            ..
        })) => Ok(GenerationConfig {
            persistence_marker: flag.value,
        }),
        Some(other) => Err(ExpandError::MustBeBoolLiteral.spanned(other)),
        None => Ok(GenerationConfig::default()),
    }
}
