pub mod matrix;
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QRCode, Version, symbol_size};
