//! Linear floating-point colour derived from 8-bit pixels.

use serde::{Deserialize, Serialize};

use super::transfer::{SrgbTransfer, TransferFunction};
use crate::image::Pixel;

/// RGBA colour in linear light, channels nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LinearColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Direct scaling of every channel by 1/255.
    pub fn from_linear8(pixel: Pixel) -> Self {
        Self {
            r: unorm8(pixel.r),
            g: unorm8(pixel.g),
            b: unorm8(pixel.b),
            a: unorm8(pixel.a),
        }
    }

    /// sRGB decode of the colour channels. Alpha is never gamma encoded.
    pub fn from_srgb8(pixel: Pixel) -> Self {
        Self::decode(pixel, &SrgbTransfer)
    }

    /// Decode the colour channels through `transfer`; alpha is scaled linearly.
    pub fn decode(pixel: Pixel, transfer: &dyn TransferFunction) -> Self {
        Self {
            r: transfer.to_linear(unorm8(pixel.r)),
            g: transfer.to_linear(unorm8(pixel.g)),
            b: transfer.to_linear(unorm8(pixel.b)),
            a: unorm8(pixel.a),
        }
    }

    /// Channels as an `[r, g, b, a]` array.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Pixel {
    /// Convert to linear colour, decoding sRGB when `srgb` is set.
    pub fn to_linear(self, srgb: bool) -> LinearColor {
        if srgb {
            LinearColor::from_srgb8(self)
        } else {
            LinearColor::from_linear8(self)
        }
    }
}

fn unorm8(v: u8) -> f32 {
    f32::from(v) / 255.0
}
