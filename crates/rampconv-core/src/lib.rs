//! Rampconv Core — ramp texture to colour curve conversion.
//!
//! This crate turns the rows of a decoded ramp texture into RGBA keyframe
//! curves, and models the host-side plumbing (selection actions, naming,
//! storage) around it. No file format or framework dependencies.

pub mod actions;
pub mod color_management;
pub mod convert;
pub mod curve;
pub mod error;
pub mod image;
pub mod naming;

// Re-exports for convenience.
pub use color_management::LinearColor;
pub use convert::{RampToCurveConverter, convert};
pub use curve::{Channel, CurveSet, FloatCurve, Keyframe};
pub use error::{ActionError, StoreError};
pub use image::{PixelFormat, SourceImage, TextureData};
pub use naming::{NamedCurveSet, name_curve_sets};
