//! Streams a [`QrMatrix`] to a writer as colored glyphs.

use std::io::Write;

use tracing::debug;

use crate::config::RenderConfig;
use crate::encoder::QrMatrix;
use crate::error::Result;

/// Writes `qr` framed by `config.quiet_zone` light modules on every side.
///
/// Each printed line covers [`Palette::rows_per_line`](crate::config::Palette::rows_per_line)
/// matrix rows. In half-block mode a final row without a partner is paired with a light row.
/// Every line ends with `\n`. The writer is flushed before returning.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the writer fails.
pub fn render<W: Write>(qr: &QrMatrix, config: &RenderConfig, out: &mut W) -> Result<()> {
    let border = i32::try_from(config.quiet_zone).unwrap_or(i32::MAX / 4);
    let step = config.palette.rows_per_line();
    let (start, end) = (-border, qr.size() + border);
    debug!(size = qr.size(), border, step, "rendering QR matrix");

    for y in (start..end).step_by(step) {
        for x in start..end {
            let top = qr.get_module(x, y);
            let bottom = qr.get_module(x, y + 1);
            config.palette.glyph(top, bottom).write_to(out)?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Number of lines [`render`] prints for a matrix of side `size`.
///
/// Saturates at `usize::MAX` for borders too wide to print.
pub fn line_count(size: usize, config: &RenderConfig) -> usize {
    size.saturating_add(config.quiet_zone.saturating_mul(2))
        .div_ceil(config.palette.rows_per_line())
}
