//! qiterm - print a QR code in the terminal.
//!
//! ```text
//! qiterm https://example.com          # full blocks, level L
//! qiterm -s -l h -q 1 "some text"     # half blocks, level H, thin border
//! ```

use std::process::ExitCode;

use clap::Parser;
use qiterm::cli::{print_usage, run, Args};
use qiterm::Error;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::InvalidArguments { program }) => {
            print_usage(&program);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
