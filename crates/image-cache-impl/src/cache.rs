// SPDX-License-Identifier: MIT

//! `#[image_cache]` expansion pipeline.
//!
//! This module orchestrates the expansion stages and delegates each to a
//! specialized submodule:
//!
//! ```text
//! cache.rs (orchestrator)
//! ├── parse.rs    — declaration validation (PropertySpec)
//! ├── config.rs   — attribute-argument parsing (GenerationConfig)
//! ├── strategy.rs — platform decode paths (DecodeStrategy)
//! └── generate.rs — emission of the rewritten struct and accessors
//! ```
//!
//! Stages run in that order and the first failure wins; a failed expansion
//! emits exactly one diagnostic and no declarations.

mod config;
mod generate;
mod parse;
mod strategy;

use proc_macro2::TokenStream;

/// Runs the full expansion for one macro invocation.
///
/// Pure with respect to its inputs: identical tokens always expand to
/// identical output. The platform switch is emitted as `cfg`-gated
/// accessor definitions rather than resolved here, so the expansion does
/// not depend on where the macro itself was compiled.
pub fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let spec = parse::property_spec(item)?;
    let config = config::generation_config(attr)?;

    Ok(generate::expansion(&spec, &config))
}
