#![forbid(unsafe_code)]
//! Seam to the QR symbol encoder.
//!
//! Encoding (segment modes, Reed-Solomon codewords, masking) is delegated to the `qrcode` crate.
//! This module narrows it to what the terminal renderer needs: an error correction level and an
//! immutable square grid of dark and light modules.

use core::str::FromStr;

use qrcode::{EcLevel, QrCode};

use crate::error::{Error, Result};

/// Error correction level accepted on the command line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum QrCodeEcc {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl QrCodeEcc {
    fn ec_level(self) -> EcLevel {
        match self {
            QrCodeEcc::Low => EcLevel::L,
            QrCodeEcc::Medium => EcLevel::M,
            QrCodeEcc::High => EcLevel::H,
        }
    }
}

impl FromStr for QrCodeEcc {
    type Err = Error;

    /// Parses `l`, `m` or `h` in either case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "l" => Ok(QrCodeEcc::Low),
            "m" => Ok(QrCodeEcc::Medium),
            "h" => Ok(QrCodeEcc::High),
            _ => Err(Error::InvalidErrorLevel(s.to_string())),
        }
    }
}

/// A QR Code symbol as a square grid of dark and light modules.
///
/// Instances are immutable after creation. Use [`QrMatrix::encode_text`] to build one from text.
///
/// # Example
///
/// ```rust
/// use qiterm::encoder::{QrCodeEcc, QrMatrix};
///
/// let qr = QrMatrix::encode_text("Hello, World!", QrCodeEcc::Low).unwrap();
/// assert_eq!(qr.size(), 21);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QrMatrix {
    /// Width and height in modules.
    size: i32,

    /// Row-major modules, `true` = dark.
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Encodes the given text at the given error correction level.
    ///
    /// The smallest version that fits is chosen by the encoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingCapacityExceeded`] when the text is too long for any version at
    /// this level.
    pub fn encode_text(text: &str, ecl: QrCodeEcc) -> Result<Self> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), ecl.ec_level())?;
        let size = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == qrcode::Color::Dark)
            .collect();
        Ok(Self::from_modules(size, modules))
    }

    /// Builds a matrix from row-major modules.
    ///
    /// # Panics
    ///
    /// Panics if `modules.len() != size * size`.
    pub fn from_modules(size: usize, modules: Vec<bool>) -> Self {
        assert_eq!(modules.len(), size * size, "matrix must be square");
        let size = i32::try_from(size).unwrap_or(i32::MAX);
        Self { size, modules }
    }

    /// Returns the width and height of this symbol in modules.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns the color of the module at the given coordinates.
    ///
    /// Returns `true` for dark modules and `false` for light modules. Coordinates outside the
    /// symbol return `false`, which is what the quiet zone and the padding row below an odd
    /// height look like.
    ///
    /// # Arguments
    ///
    /// * `x` - X-coordinate (0 is left).
    /// * `y` - Y-coordinate (0 is top).
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        let range = 0..self.size;
        range.contains(&x) && range.contains(&y) && self.modules[(y * self.size + x) as usize]
    }
}
