use std::io::Write;

use crate::config::{AnsiSupport, RenderConfig};
use crate::encoder::{QrCodeEcc, QrMatrix};
use crate::error::Result;
use crate::render::render;

/*---- Utilities ----*/

/// Encodes `content` and writes it to `out` with the given configuration.
///
/// Encoding finishes before the first byte is written, so a capacity error never leaves a partial
/// QR code behind.
///
/// # Arguments
///
/// * `content` - The text to encode.
/// * `config` - Level, quiet zone and palette to draw with.
/// * `out` - Where the glyphs go.
///
/// # Errors
///
/// Returns [`Error::EncodingCapacityExceeded`](crate::Error::EncodingCapacityExceeded) when the
/// text does not fit, or [`Error::Io`](crate::Error::Io) when writing fails.
///
/// # Example
///
/// ```rust
/// use qiterm::config::RenderConfig;
/// use qiterm::helper::generate_with_config;
///
/// let mut out = Vec::new();
/// generate_with_config("https://example.com", &RenderConfig::default(), &mut out).unwrap();
/// assert!(!out.is_empty());
/// ```
pub fn generate_with_config<W: Write>(content: &str, config: &RenderConfig, out: &mut W) -> Result<()> {
    let qr = QrMatrix::encode_text(content, config.level)?;
    render(&qr, config, out)
}

/// Full-block rendering with a two module quiet zone.
pub fn generate<W: Write>(content: &str, level: QrCodeEcc, out: &mut W) -> Result<()> {
    let config = RenderConfig::select(level, 2, false, AnsiSupport::Native);
    generate_with_config(content, &config, out)
}

/// Half-block rendering with a two module quiet zone.
pub fn generate_half_block<W: Write>(content: &str, level: QrCodeEcc, out: &mut W) -> Result<()> {
    let config = RenderConfig::select(level, 2, true, AnsiSupport::Native);
    generate_with_config(content, &config, out)
}

/// Returns the rendering of `content` as a string of glyphs and ANSI escapes.
///
/// # Example
///
/// ```
/// use qiterm::config::RenderConfig;
/// use qiterm::helper::to_terminal_string;
///
/// let text = to_terminal_string("Hello, World!", &RenderConfig::default()).unwrap();
/// assert_eq!(text.lines().count(), 25);
/// ```
pub fn to_terminal_string(content: &str, config: &RenderConfig) -> Result<String> {
    let mut out = Vec::new();
    generate_with_config(content, config, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_matches_default_config() {
        let mut a = Vec::new();
        generate("HELLO", QrCodeEcc::Low, &mut a).unwrap();
        let b = to_terminal_string("HELLO", &RenderConfig::default()).unwrap();
        assert_eq!(String::from_utf8(a).unwrap(), b);
    }

    #[test]
    fn test_generate_half_block_halves_lines() {
        let mut full = Vec::new();
        let mut half = Vec::new();
        generate("TEST", QrCodeEcc::Low, &mut full).unwrap();
        generate_half_block("TEST", QrCodeEcc::Low, &mut half).unwrap();
        let full = String::from_utf8(full).unwrap().lines().count();
        let half = String::from_utf8(half).unwrap().lines().count();
        assert_eq!(full, 25);
        assert_eq!(half, 13);
    }

    #[test]
    fn test_capacity_error_writes_nothing() {
        let mut out = Vec::new();
        let text = "x".repeat(4000);
        let result = generate(&text, QrCodeEcc::High, &mut out);
        assert!(matches!(result, Err(Error::EncodingCapacityExceeded(_))));
        assert!(out.is_empty());
    }
}
