use palette::{LinSrgb, Srgb};
use rampconv_core::color_management::{SrgbTransfer, TransferFunction};
use rampconv_core::{Channel, CurveSet, PixelFormat, SourceImage, convert};

const EPSILON: f32 = 1e-5;

/// Build a BGRA8 buffer where each pixel encodes its own coordinates.
fn gradient_bgra(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            data.extend_from_slice(&[255 - r, g, r, 200]);
        }
    }
    data
}

fn assert_shape(sets: &[CurveSet], width: u32, height: u32) {
    assert_eq!(sets.len(), height as usize);
    for set in sets {
        assert_eq!(set.curves().len(), 4);
        for curve in set.curves() {
            assert_eq!(curve.len(), width as usize);
        }
    }
}

#[test]
fn test_one_curve_set_per_row_with_one_key_per_column() {
    for (w, h) in [(1, 1), (2, 3), (16, 4), (256, 2)] {
        let data = gradient_bgra(w, h);
        for srgb in [false, true] {
            let sets = convert(&SourceImage::new(w, h, PixelFormat::Bgra8, srgb, &data));
            assert_shape(&sets, w, h);
        }
    }
}

#[test]
fn test_key_times_strictly_increase_and_span_unit_range() {
    let (w, h) = (37, 3);
    let data = gradient_bgra(w, h);
    let sets = convert(&SourceImage::new(w, h, PixelFormat::Bgra8, false, &data));
    for set in &sets {
        for curve in set.curves() {
            let keys = curve.keys();
            assert_eq!(keys.first().unwrap().time, 0.0);
            assert_eq!(keys.last().unwrap().time, 1.0);
            for pair in keys.windows(2) {
                assert!(pair[0].time < pair[1].time);
            }
            let step = 1.0 / (w - 1) as f32;
            for (x, key) in keys.iter().enumerate() {
                assert!((key.time - x as f32 * step).abs() < EPSILON);
            }
        }
    }
}

#[test]
fn test_rows_are_emitted_top_to_bottom() {
    let (w, h) = (4, 5);
    let data = gradient_bgra(w, h);
    let sets = convert(&SourceImage::new(w, h, PixelFormat::Bgra8, false, &data));
    for (y, set) in sets.iter().enumerate() {
        let expected = (y as u32 * 255 / h) as f32 / 255.0;
        for key in set.channel(Channel::Green).keys() {
            assert_eq!(key.value, expected);
        }
    }
}

#[test]
fn test_linear_values_are_exact_byte_scaling() {
    let data: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v, v]).collect();
    let sets = convert(&SourceImage::new(256, 1, PixelFormat::Bgra8, false, &data));
    for channel in Channel::ALL {
        for (code, key) in sets[0].channel(channel).keys().iter().enumerate() {
            assert_eq!(key.value, code as f32 / 255.0);
        }
    }
}

#[test]
fn test_srgb_values_match_reference_decoder() {
    let data: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v, v]).collect();
    let sets = convert(&SourceImage::new(256, 1, PixelFormat::Bgra8, true, &data));
    let red = sets[0].channel(Channel::Red).keys();
    let alpha = sets[0].channel(Channel::Alpha).keys();
    for code in 0..=255u8 {
        let reference: LinSrgb<f32> = Srgb::new(code, code, code).into_format::<f32>().into_linear();
        let got = red[code as usize].value;
        assert!(
            (got - reference.red).abs() < EPSILON,
            "code {code}: got {got}, reference {}",
            reference.red
        );
        assert_eq!(alpha[code as usize].value, f32::from(code) / 255.0);
    }
}

#[test]
fn test_srgb_values_reencode_to_original_bytes() {
    let data: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v, 255]).collect();
    let sets = convert(&SourceImage::new(256, 1, PixelFormat::Bgra8, true, &data));
    let tf = SrgbTransfer;
    for (code, key) in sets[0].channel(Channel::Blue).keys().iter().enumerate() {
        let back = tf.to_encoded(key.value);
        assert!((back - code as f32 / 255.0).abs() <= 1.0 / 255.0);
    }
}

#[test]
fn test_documented_two_pixel_example() {
    let data = [255, 0, 0, 255, 0, 255, 0, 255];
    let sets = convert(&SourceImage::new(2, 1, PixelFormat::Bgra8, false, &data));
    assert_eq!(sets.len(), 1);
    let pairs = |c: Channel| -> Vec<(f32, f32)> {
        sets[0].channel(c).keys().iter().map(|k| (k.time, k.value)).collect()
    };
    assert_eq!(pairs(Channel::Red), [(0.0, 0.0), (1.0, 0.0)]);
    assert_eq!(pairs(Channel::Green), [(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(pairs(Channel::Blue), [(0.0, 1.0), (1.0, 0.0)]);
    assert_eq!(pairs(Channel::Alpha), [(0.0, 1.0), (1.0, 1.0)]);
}

#[test]
fn test_rejected_inputs_produce_no_curves() {
    let data = gradient_bgra(4, 4);
    assert!(convert(&SourceImage::new(4, 4, PixelFormat::Rgba8, false, &data)).is_empty());
    assert!(convert(&SourceImage::new(0, 4, PixelFormat::Bgra8, false, &data)).is_empty());
    assert!(convert(&SourceImage::new(4, 0, PixelFormat::Bgra8, false, &data)).is_empty());
    assert!(convert(&SourceImage::new(4, 4, PixelFormat::Bgra8, false, &[])).is_empty());
}

#[test]
fn test_curve_set_serializes_to_json() {
    let data = [0, 128, 255, 255];
    let sets = convert(&SourceImage::new(1, 1, PixelFormat::Bgra8, false, &data));
    let json = serde_json::to_string(&sets[0]).unwrap();
    let back: CurveSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sets[0]);
}
