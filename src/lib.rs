//! # qiterm
//!
//! Render QR codes directly in the terminal using colored block characters.
//!
//! `qiterm` takes text, encodes it into a QR symbol at error correction level L, M or H, and
//! streams the symbol to any writer as ANSI-colored glyphs framed by a light quiet zone. Two glyph
//! sets are available: full blocks (one printed line per module row) and half blocks (two module
//! rows per printed line).
//!
//! ## Features
//!
//! - Case-insensitive error correction levels: L, M, H.
//! - Configurable quiet zone width.
//! - Full-block or half-block output.
//! - Legacy Windows consoles get colors through the console API and fall back to full blocks.
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! qiterm = "0.1" # Replace with the latest version
//! ```
//!
//! ## Example
//!
//! Print a half-block QR code to stdout:
//!
//! ```rust
//! use qiterm::{encoder::QrCodeEcc, helper::generate_half_block};
//!
//! fn main() {
//!     let mut stdout = std::io::stdout();
//!     generate_half_block("https://example.com", QrCodeEcc::Medium, &mut stdout).unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`encoder`]: Error correction levels and the QR module grid.
//! - [`config`]: Glyph palettes and render configuration.
//! - [`render`]: Writes a QR grid to a terminal.
//! - [`helper`]: One-call helpers from text to terminal output.
//! - [`sink`]: Startup check for ANSI color support.
//! - [`cli`]: The `qiterm` command line.

pub mod cli;
pub mod config;
pub mod encoder;
pub mod error;
pub mod helper;
pub mod render;
pub mod sink;

pub use error::{Error, Result};
