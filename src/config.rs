//! Render configuration: glyph palettes and the pure configuration selector.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::encoder::QrCodeEcc;

/// Half-block mode draws the upper half in the foreground color and the lower half in the
/// background color.
const UPPER_HALF_BLOCK: &str = "\u{2580}";

/// Full-block mode draws each module two columns wide so it comes out roughly square.
const FULL_CELL: &str = "  ";

/// A single printed symbol with its colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Glyph {
    pub symbol: &'static str,
    pub foreground: Color,
    pub background: Color,
}

impl Glyph {
    const fn new(symbol: &'static str, foreground: Color, background: Color) -> Self {
        Self { symbol, foreground, background }
    }

    /// Queues the colored symbol on `out`, resetting colors afterwards.
    ///
    /// Goes through crossterm commands, so on a Windows console without virtual terminal
    /// processing the colors are applied through the console API instead of escape sequences.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(
            out,
            SetForegroundColor(self.foreground),
            SetBackgroundColor(self.background),
            Print(self.symbol),
            ResetColor
        )
    }
}

pub const BLACK: Glyph = Glyph::new(FULL_CELL, Color::Black, Color::Black);
pub const WHITE: Glyph = Glyph::new(FULL_CELL, Color::White, Color::White);

pub const BLACK_BLACK: Glyph = Glyph::new(UPPER_HALF_BLOCK, Color::Black, Color::Black);
pub const BLACK_WHITE: Glyph = Glyph::new(UPPER_HALF_BLOCK, Color::Black, Color::White);
pub const WHITE_BLACK: Glyph = Glyph::new(UPPER_HALF_BLOCK, Color::White, Color::Black);
pub const WHITE_WHITE: Glyph = Glyph::new(UPPER_HALF_BLOCK, Color::White, Color::White);

/// The glyph set a QR code is drawn with.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Palette {
    /// One printed line per matrix row.
    Full { dark: Glyph, light: Glyph },
    /// One printed line per pair of matrix rows, named `top_bottom`.
    Half {
        dark_dark: Glyph,
        dark_light: Glyph,
        light_dark: Glyph,
        light_light: Glyph,
    },
}

impl Palette {
    pub const FULL: Palette = Palette::Full { dark: BLACK, light: WHITE };

    pub const HALF: Palette = Palette::Half {
        dark_dark: BLACK_BLACK,
        dark_light: BLACK_WHITE,
        light_dark: WHITE_BLACK,
        light_light: WHITE_WHITE,
    };

    /// Number of matrix rows consumed by one printed line.
    pub fn rows_per_line(&self) -> usize {
        match self {
            Palette::Full { .. } => 1,
            Palette::Half { .. } => 2,
        }
    }

    /// Picks the glyph for a column. `bottom` is ignored in full-block mode.
    pub fn glyph(&self, top: bool, bottom: bool) -> Glyph {
        match *self {
            Palette::Full { dark, light } => {
                if top {
                    dark
                } else {
                    light
                }
            }
            Palette::Half { dark_dark, dark_light, light_dark, light_light } => match (top, bottom) {
                (true, true) => dark_dark,
                (true, false) => dark_light,
                (false, true) => light_dark,
                (false, false) => light_light,
            },
        }
    }

    /// The glyph used for the quiet zone.
    pub fn light(&self) -> Glyph {
        self.glyph(false, false)
    }
}

/// How the output sink treats ANSI color sequences.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnsiSupport {
    /// Escape sequences are interpreted by the terminal (or passed through to a pipe).
    Native,
    /// A legacy console; colors are translated into console API calls.
    Translated,
}

/// Everything needed to draw one QR code.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderConfig {
    pub level: QrCodeEcc,
    pub quiet_zone: usize,
    pub half_blocks: bool,
    pub palette: Palette,
    pub ansi: AnsiSupport,
}

impl RenderConfig {
    /// Selects the palette for the requested size and the sink's color capability.
    ///
    /// A translated sink cannot compose two colors in one cell reliably, so it always gets the
    /// full-block palette.
    pub fn select(level: QrCodeEcc, quiet_zone: usize, half_blocks: bool, ansi: AnsiSupport) -> Self {
        let half_blocks = half_blocks && ansi == AnsiSupport::Native;
        let palette = if half_blocks { Palette::HALF } else { Palette::FULL };
        Self { level, quiet_zone, half_blocks, palette, ansi }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::select(QrCodeEcc::Low, 2, false, AnsiSupport::Native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_full() {
        let cfg = RenderConfig::select(QrCodeEcc::Medium, 4, false, AnsiSupport::Native);
        assert_eq!(cfg.palette, Palette::FULL);
        assert_eq!(cfg.quiet_zone, 4);
        assert_eq!(cfg.level, QrCodeEcc::Medium);
        assert!(!cfg.half_blocks);
    }

    #[test]
    fn test_select_half() {
        let cfg = RenderConfig::select(QrCodeEcc::Low, 2, true, AnsiSupport::Native);
        assert_eq!(cfg.palette, Palette::HALF);
        assert!(cfg.half_blocks);
        assert_eq!(cfg.palette.rows_per_line(), 2);
    }

    #[test]
    fn test_translated_sink_forces_full_blocks() {
        let cfg = RenderConfig::select(QrCodeEcc::High, 2, true, AnsiSupport::Translated);
        assert_eq!(cfg.palette, Palette::FULL);
        assert!(!cfg.half_blocks);
    }

    #[test]
    fn test_half_palette_combinations() {
        let p = Palette::HALF;
        assert_eq!(p.glyph(true, true), BLACK_BLACK);
        assert_eq!(p.glyph(true, false), BLACK_WHITE);
        assert_eq!(p.glyph(false, true), WHITE_BLACK);
        assert_eq!(p.glyph(false, false), WHITE_WHITE);
        assert_eq!(p.light(), WHITE_WHITE);
    }

    #[test]
    fn test_full_palette_ignores_bottom() {
        let p = Palette::FULL;
        assert_eq!(p.glyph(true, false), p.glyph(true, true));
        assert_eq!(p.glyph(false, true), WHITE);
    }

    #[test]
    fn test_glyph_writes_ansi() {
        let mut out = Vec::new();
        BLACK.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  "));
        assert!(text.starts_with('\u{1b}'));
        assert!(text.ends_with("\u{1b}[0m"));
    }
}
