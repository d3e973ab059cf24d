// SPDX-License-Identifier: MIT

//! The decoded image resource and its raw-frame form.

/// A decoded image, stored as tightly packed RGBA8 pixels.
///
/// This is the value held in a generated cache slot and returned by
/// generated accessors. It is deliberately minimal: consumers that need
/// resampling, color management, or encoding should hand the pixel data to
/// a full imaging library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// A raw RGBA8 frame produced by the web decode backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl Image {
    /// Wraps a decoded [`image::DynamicImage`], converting to RGBA8.
    #[must_use]
    pub fn from_dynamic(decoded: image::DynamicImage) -> Self {
        let rgba = decoded.into_rgba8();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        }
    }

    /// Wraps a raw [`RgbaFrame`] without copying the pixel data.
    #[must_use]
    pub fn from_frame(frame: RgbaFrame) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            pixels: frame.pixels,
        }
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA8 pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
