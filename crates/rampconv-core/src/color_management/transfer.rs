//! Transfer function (OETF/EOTF) implementations for 8-bit texture data.
//!
//! Transfer functions convert between non-linear (encoded) and linear light values.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f32) -> f32;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f32) -> f32;
}

/// Get the transfer function for a texture's colour encoding.
///
/// Returns `None` for linear textures, whose bytes are scaled directly.
pub fn get_transfer(srgb: bool) -> Option<Box<dyn TransferFunction>> {
    if srgb { Some(Box::new(SrgbTransfer)) } else { None }
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// from_linear: L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    const TOE: f32 = 0.04045;
    const LINEAR_TOE: f32 = 0.003_130_8;
    const SLOPE: f32 = 12.92;
    const GAMMA: f32 = 2.4;

    /// Decode an 8-bit sRGB code value to linear light.
    pub fn decode_u8(&self, value: u8) -> f32 {
        self.to_linear(f32::from(value) / 255.0)
    }
}

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f32) -> f32 {
        if encoded <= Self::TOE {
            encoded / Self::SLOPE
        } else {
            ((encoded + 0.055) / 1.055).powf(Self::GAMMA)
        }
    }

    fn to_encoded(&self, linear: f32) -> f32 {
        if linear <= Self::LINEAR_TOE {
            linear * Self::SLOPE
        } else {
            1.055 * linear.powf(1.0 / Self::GAMMA) - 0.055
        }
    }
}
