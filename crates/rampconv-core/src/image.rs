//! Source image representation for ramp conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel layouts a host can hand to the converter.
///
/// Only [`PixelFormat::Bgra8`] is converted; the rest exist so hosts can
/// describe what they have and get an empty result back instead of garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 8-bit per channel, bytes ordered B, G, R, A.
    Bgra8,
    /// 8-bit per channel, bytes ordered R, G, B, A.
    Rgba8,
    /// 8-bit single channel.
    Gray8,
    /// 16-bit unsigned integer per channel, RGBA.
    Rgba16,
    /// 16-bit float per channel, RGBA.
    Rgba16F,
    /// 32-bit float per channel, RGBA.
    Rgba32F,
}

impl PixelFormat {
    /// Bytes occupied by one pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Bgra8 | Self::Rgba8 => 4,
            Self::Rgba16 | Self::Rgba16F => 8,
            Self::Rgba32F => 16,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bgra8 => write!(f, "BGRA8"),
            Self::Rgba8 => write!(f, "RGBA8"),
            Self::Gray8 => write!(f, "G8"),
            Self::Rgba16 => write!(f, "RGBA16"),
            Self::Rgba16F => write!(f, "RGBA16F"),
            Self::Rgba32F => write!(f, "RGBA32F"),
        }
    }
}

/// One 8-bit RGBA pixel, already in R, G, B, A order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Read one [`PixelFormat::Bgra8`] pixel.
    pub const fn from_bgra(bytes: [u8; 4]) -> Self {
        Self {
            r: bytes[2],
            g: bytes[1],
            b: bytes[0],
            a: bytes[3],
        }
    }
}

/// Borrowed view over decoded pixel data supplied by the host.
///
/// The host is responsible for copying texture memory into this flat form
/// (`width * height * bytes_per_pixel` bytes, rows top to bottom).
#[derive(Debug, Clone, Copy)]
pub struct SourceImage<'a> {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Layout of `data`.
    pub format: PixelFormat,
    /// Whether the colour channels are sRGB encoded.
    pub srgb: bool,
    /// Flat pixel buffer.
    pub data: &'a [u8],
}

impl<'a> SourceImage<'a> {
    pub fn new(width: u32, height: u32, format: PixelFormat, srgb: bool, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            format,
            srgb,
            data,
        }
    }

    /// Number of bytes a complete buffer for these dimensions needs.
    ///
    /// Returns `None` if the size overflows `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(self.format.bytes_per_pixel())
    }

    /// True when the dimensions are non-zero and the buffer is long enough.
    pub fn is_complete(&self) -> bool {
        self.width > 0
            && self.height > 0
            && !self.data.is_empty()
            && self
                .expected_len()
                .is_some_and(|len| self.data.len() >= len)
    }
}

/// Owned copy of decoded texture memory, as handed over by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub srgb: bool,
    pub data: Vec<u8>,
}

impl TextureData {
    /// Borrow as a [`SourceImage`] for conversion.
    pub fn view(&self) -> SourceImage<'_> {
        SourceImage::new(self.width, self.height, self.format, self.srgb, &self.data)
    }
}
