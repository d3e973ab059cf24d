// SPDX-License-Identifier: MIT

//! Platform decode backends.
//!
//! Macro expansions carry one accessor per backend, each behind the
//! backend's `cfg` gate, so a compiled crate links exactly one:
//!
//! - [`decode_image`] on native (unix and windows) targets, a
//!   format-sniffing decode over the full codec set
//! - [`decode_image_web`] on wasm32, restricted to PNG and JPEG to keep
//!   the compiled module small, producing a raw RGBA frame
//!
//! Decode failures are swallowed on purpose: a generated accessor treats a
//! failed decode as "no update" and keeps serving whatever it cached last.
//! The typed failure is logged at debug level and discarded here, so the
//! accessor seam is a plain `Option`.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use crate::RgbaFrame;

/// Why a decode attempt produced no image.
///
/// Never escapes to generated code; see the module docs for the
/// silent-degradation policy.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The buffer's leading bytes match no recognized image format.
    #[error("unrecognized image format")]
    UnknownFormat,

    /// The underlying codec rejected the buffer.
    #[error(transparent)]
    Codec(#[from] image::ImageError),
}

/// Decodes an encoded image buffer, sniffing the format from its content.
///
/// Returns `None` when the buffer is not a decodable image.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn decode_image(bytes: &[u8]) -> Option<image::DynamicImage> {
    match image::load_from_memory(bytes) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            let err = DecodeError::from(err);
            tracing::debug!(error = %err, len = bytes.len(), "image decode failed, cache left unchanged");
            None
        }
    }
}

/// Decodes a PNG or JPEG buffer straight to an RGBA frame.
///
/// Returns `None` when the buffer is neither, or when decoding fails.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn decode_image_web(bytes: &[u8]) -> Option<RgbaFrame> {
    match try_decode_web(bytes) {
        Ok(frame) => Some(frame),
        Err(err) => {
            tracing::debug!(error = %err, len = bytes.len(), "image decode failed, cache left unchanged");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn try_decode_web(bytes: &[u8]) -> Result<RgbaFrame, DecodeError> {
    let format = sniff_format(bytes).ok_or(DecodeError::UnknownFormat)?;
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    let rgba = decoded.into_rgba8();
    Ok(RgbaFrame {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

#[cfg(target_arch = "wasm32")]
fn sniff_format(bytes: &[u8]) -> Option<image::ImageFormat> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        Some(image::ImageFormat::Png)
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some(image::ImageFormat::Jpeg)
    } else {
        None
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn png_bytes() -> Vec<u8> {
        let buf = image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(buf)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_valid_png() {
        let decoded = decode_image(&png_bytes()).unwrap().into_rgba8();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
    }

    #[test]
    fn garbage_decodes_to_none() {
        // RUST_LOG=debug surfaces the swallowed decode failure
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init()
            .ok();
        assert!(decode_image(b"definitely not an image").is_none());
    }

    #[test]
    fn empty_buffer_decodes_to_none() {
        assert!(decode_image(&[]).is_none());
    }
}
