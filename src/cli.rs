//! Command line surface of the `qiterm` binary.

use std::io::{self, BufWriter, Write};

use clap::{CommandFactory, Parser};
use tracing::{debug, warn};

use crate::config::{AnsiSupport, RenderConfig};
use crate::encoder::{QrCodeEcc, QrMatrix};
use crate::error::{Error, Result};
use crate::render::render;
use crate::sink::detect_ansi_support;

#[derive(Parser, Debug)]
#[command(name = "qiterm")]
#[command(version)]
#[command(about = "Render a QR code in the terminal", long_about = None)]
pub struct Args {
    /// Output debugging information
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Use smaller characters
    #[arg(short = 's')]
    pub half_size: bool,

    /// Error correction level
    #[arg(short = 'l', default_value = "L")]
    pub level: String,

    /// Size of quietzone border
    #[arg(short = 'q', default_value_t = 2)]
    pub quiet_zone: u16,

    /// Text to encode, multiple arguments are joined with newlines. Everything after the first
    /// word is text, including words starting with `-`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub text: Vec<String>,
}

impl Args {
    /// The text to encode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArguments`] when no positional argument was given.
    pub fn text(&self) -> Result<String> {
        if self.text.is_empty() {
            return Err(Error::InvalidArguments {
                program: Self::command().get_name().to_string(),
            });
        }
        Ok(self.text.join("\n"))
    }

    /// The parsed error correction level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidErrorLevel`] when `-l` is not L, M or H.
    pub fn level(&self) -> Result<QrCodeEcc> {
        self.level.parse()
    }

    pub fn render_config(&self, ansi: AnsiSupport) -> Result<RenderConfig> {
        Ok(RenderConfig::select(self.level()?, usize::from(self.quiet_zone), self.half_size, ansi))
    }
}

/// Writes the `-v` report.
pub fn verbose_report<W: Write>(args: &Args, text: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "Level: {} ", args.level)?;
    writeln!(out, "Quietzone Border Size: {} ", args.quiet_zone)?;
    writeln!(out, "Encoded data: {} ", text)?;
    writeln!(out)
}

/// Prints the usage banner and option list to stderr.
pub fn print_usage(program: &str) {
    eprintln!("usage of {}: \"[arguments]\"", program);
    eprintln!("Options:");
    eprintln!("{}", Args::command().render_help());
}

/// Validates the arguments, encodes the text and writes the QR code to stdout.
///
/// Nothing is written to stdout until validation and encoding have both succeeded.
///
/// # Errors
///
/// Any [`Error`]; all of them are fatal to the binary.
pub fn run(args: &Args) -> Result<()> {
    let text = args.text()?;
    let config = args.render_config(detect_ansi_support())?;
    if args.half_size && !config.half_blocks {
        warn!("stdout does not interpret ANSI colors, using full blocks");
    }
    debug!(?config, "selected render configuration");

    let qr = QrMatrix::encode_text(&text, config.level)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.verbose {
        verbose_report(args, &text, &mut out)?;
    }
    render(&qr, &config, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["qiterm", "HELLO"]);
        assert!(!args.verbose);
        assert!(!args.half_size);
        assert_eq!(args.level, "L");
        assert_eq!(args.quiet_zone, 2);
        assert_eq!(args.text().unwrap(), "HELLO");
        assert_eq!(args.level().unwrap(), QrCodeEcc::Low);
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&["qiterm", "-v", "-s", "-l", "h", "-q", "4", "one", "two"]);
        assert!(args.verbose);
        assert!(args.half_size);
        assert_eq!(args.level().unwrap(), QrCodeEcc::High);
        assert_eq!(args.quiet_zone, 4);
        assert_eq!(args.text().unwrap(), "one\ntwo");

        let cfg = args.render_config(AnsiSupport::Native).unwrap();
        assert!(cfg.half_blocks);
        assert_eq!(cfg.quiet_zone, 4);
    }

    #[test]
    fn test_missing_text() {
        let args = parse(&["qiterm"]);
        assert!(matches!(args.text(), Err(Error::InvalidArguments { .. })));
    }

    #[test]
    fn test_invalid_level() {
        let args = parse(&["qiterm", "-l", "X", "HELLO"]);
        let err = args.level().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid error correction level: X\nValid options are [L, M, H]"
        );
        assert!(args.render_config(AnsiSupport::Native).is_err());
    }

    #[test]
    fn test_negative_quiet_zone_rejected() {
        assert!(Args::try_parse_from(["qiterm", "-q", "-1", "HELLO"]).is_err());
    }

    #[test]
    fn test_flags_after_text_are_text() {
        let args = parse(&["qiterm", "HELLO", "-s"]);
        assert!(!args.half_size);
        assert_eq!(args.text().unwrap(), "HELLO\n-s");

        let args = parse(&["qiterm", "-s", "HELLO", "-x", "-l", "q"]);
        assert!(args.half_size);
        assert_eq!(args.level().unwrap(), QrCodeEcc::Low);
        assert_eq!(args.text().unwrap(), "HELLO\n-x\n-l\nq");
    }

    #[test]
    fn test_quiet_zone_upper_bound() {
        let args = parse(&["qiterm", "-q", "65535", "HELLO"]);
        assert_eq!(args.quiet_zone, u16::MAX);
        assert!(Args::try_parse_from(["qiterm", "-q", "65536", "HELLO"]).is_err());
    }

    #[test]
    fn test_verbose_report() {
        let args = parse(&["qiterm", "-v", "-l", "m", "a", "b"]);
        let mut out = Vec::new();
        verbose_report(&args, &args.text().unwrap(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Level: m \nQuietzone Border Size: 2 \nEncoded data: a\nb \n\n"
        );
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }
}
