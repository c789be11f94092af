//! Colour decoding — transfer functions and linear colour values.

pub mod linear;
pub mod transfer;

pub use linear::LinearColor;
pub use transfer::{SrgbTransfer, TransferFunction};
