//! Ramp texture to curve conversion.
//!
//! Every image row becomes one [`CurveSet`], every column one keyframe per
//! channel. Key times are spread evenly over [0, 1]:
//! ```text
//! time(x) = x / (width - 1)      width > 1
//! time(x) = 0                    width == 1
//! ```
//! Images the converter cannot read produce no output rather than an error.

use tracing::debug;

use crate::color_management::LinearColor;
use crate::color_management::transfer::get_transfer;
use crate::curve::CurveSet;
use crate::image::{Pixel, PixelFormat, SourceImage};

/// The only layout the converter reads.
pub const SUPPORTED_FORMAT: PixelFormat = PixelFormat::Bgra8;

/// Converts ramp textures into per-row colour curves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RampToCurveConverter;

impl RampToCurveConverter {
    /// Produce one [`CurveSet`] per row of `image`, top row first.
    ///
    /// Returns an empty `Vec` for unsupported formats, zero dimensions, or
    /// a buffer too short for the declared size.
    pub fn convert(&self, image: &SourceImage<'_>) -> Vec<CurveSet> {
        if image.format != SUPPORTED_FORMAT {
            debug!(format = %image.format, "skipping image with unsupported pixel format");
            return Vec::new();
        }
        if !image.is_complete() {
            debug!(
                width = image.width,
                height = image.height,
                len = image.data.len(),
                "skipping empty or truncated image"
            );
            return Vec::new();
        }

        let width = image.width as usize;
        let height = image.height as usize;
        let transfer = get_transfer(image.srgb);
        let last_column = width.saturating_sub(1).max(1) as f32;

        let row_bytes = width * 4;
        image.data[..row_bytes * height]
            .chunks_exact(row_bytes)
            .map(|row| {
                let mut set = CurveSet::with_capacity(width);
                for (x, px) in row.chunks_exact(4).enumerate() {
                    let pixel = Pixel::from_bgra([px[0], px[1], px[2], px[3]]);
                    let color = match transfer.as_deref() {
                        Some(tf) => LinearColor::decode(pixel, tf),
                        None => LinearColor::from_linear8(pixel),
                    };
                    // x == 0 whenever width == 1, so the single key lands at 0.
                    let time = x as f32 / last_column;
                    set.add_color_key(time, color);
                }
                set
            })
            .collect()
    }
}

/// Convenience wrapper around [`RampToCurveConverter::convert`].
pub fn convert(image: &SourceImage<'_>) -> Vec<CurveSet> {
    RampToCurveConverter.convert(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Channel;

    fn keys(set: &CurveSet, channel: Channel) -> Vec<(f32, f32)> {
        set.channel(channel)
            .keys()
            .iter()
            .map(|k| (k.time, k.value))
            .collect()
    }

    #[test]
    fn test_two_pixel_bgra_row() {
        let data = [255, 0, 0, 255, 0, 255, 0, 255];
        let image = SourceImage::new(2, 1, PixelFormat::Bgra8, false, &data);
        let sets = convert(&image);
        assert_eq!(sets.len(), 1);
        let set = &sets[0];
        assert_eq!(keys(set, Channel::Red), vec![(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(keys(set, Channel::Green), vec![(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(keys(set, Channel::Blue), vec![(0.0, 1.0), (1.0, 0.0)]);
        assert_eq!(keys(set, Channel::Alpha), vec![(0.0, 1.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_single_column_maps_to_time_zero() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let image = SourceImage::new(1, 2, PixelFormat::Bgra8, false, &data);
        let sets = convert(&image);
        assert_eq!(sets.len(), 2);
        for set in &sets {
            for curve in set.curves() {
                assert_eq!(curve.len(), 1);
                assert_eq!(curve.keys()[0].time, 0.0);
            }
        }
        assert_eq!(sets[1].channel(Channel::Red).keys()[0].value, 7.0 / 255.0);
    }

    #[test]
    fn test_unsupported_format_yields_nothing() {
        let data = [0u8; 16];
        for format in [
            PixelFormat::Rgba8,
            PixelFormat::Gray8,
            PixelFormat::Rgba16,
            PixelFormat::Rgba16F,
            PixelFormat::Rgba32F,
        ] {
            let image = SourceImage::new(1, 1, format, false, &data);
            assert!(convert(&image).is_empty(), "{format} should be skipped");
        }
    }

    #[test]
    fn test_zero_dimensions_and_empty_buffer_yield_nothing() {
        let data = [0u8; 16];
        assert!(convert(&SourceImage::new(0, 4, PixelFormat::Bgra8, false, &data)).is_empty());
        assert!(convert(&SourceImage::new(4, 0, PixelFormat::Bgra8, false, &data)).is_empty());
        assert!(convert(&SourceImage::new(2, 2, PixelFormat::Bgra8, false, &[])).is_empty());
    }

    #[test]
    fn test_truncated_buffer_yields_nothing() {
        let data = [0u8; 12];
        assert!(convert(&SourceImage::new(2, 2, PixelFormat::Bgra8, false, &data)).is_empty());
    }

    #[test]
    fn test_srgb_flag_decodes_colour_but_not_alpha() {
        let data = [128, 128, 128, 128];
        let linear = convert(&SourceImage::new(1, 1, PixelFormat::Bgra8, false, &data));
        let srgb = convert(&SourceImage::new(1, 1, PixelFormat::Bgra8, true, &data));
        let lin_r = linear[0].channel(Channel::Red).keys()[0].value;
        let srgb_r = srgb[0].channel(Channel::Red).keys()[0].value;
        assert_eq!(lin_r, 128.0 / 255.0);
        assert!((srgb_r - 0.2158605).abs() < 1e-4);
        assert_eq!(
            srgb[0].channel(Channel::Alpha).keys()[0].value,
            128.0 / 255.0
        );
    }
}
