//! Image loading and texture packing for the `rampconv` host.

use std::path::Path;

use rampconv_core::image::{PixelFormat, TextureData};

/// Load an image from disk and pack it the way a texture source stores it.
///
/// 8-bit inputs become `Bgra8`. Deeper inputs keep their precision as
/// `Rgba16` or `Rgba32F`, which the converter does not read.
pub fn load_texture(path: &Path, srgb: bool) -> Result<TextureData, ImageLoadError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes).map_err(ImageLoadError::Decode)?;
    Ok(pack_texture(&img, srgb))
}

/// Pack a decoded image into flat texture memory.
pub fn pack_texture(img: &image::DynamicImage, srgb: bool) -> TextureData {
    let ((width, height), format, data) = match img.color() {
        image::ColorType::L16
        | image::ColorType::La16
        | image::ColorType::Rgb16
        | image::ColorType::Rgba16 => {
            let buf = img.to_rgba16();
            let dims = buf.dimensions();
            let data: Vec<u8> = buf.into_raw().into_iter().flat_map(u16::to_ne_bytes).collect();
            (dims, PixelFormat::Rgba16, data)
        }
        image::ColorType::Rgb32F | image::ColorType::Rgba32F => {
            let buf = img.to_rgba32f();
            let dims = buf.dimensions();
            let data: Vec<u8> = buf.into_raw().into_iter().flat_map(f32::to_ne_bytes).collect();
            (dims, PixelFormat::Rgba32F, data)
        }
        _ => {
            let buf = img.to_rgba8();
            let dims = buf.dimensions();
            (dims, PixelFormat::Bgra8, rgba_to_bgra(buf.into_raw()))
        }
    };

    TextureData {
        width,
        height,
        format,
        srgb,
        data,
    }
}

/// Swap R and B in place for every 4-byte pixel.
fn rgba_to_bgra(mut data: Vec<u8>) -> Vec<u8> {
    for px in data.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    data
}

/// Errors that can occur during image loading.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
