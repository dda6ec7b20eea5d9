//! Error type shared by the library and the `qiterm` binary.

use std::io;

use thiserror::Error;

/// Everything that can stop a QR code from reaching the terminal.
#[derive(Debug, Error)]
pub enum Error {
    /// No text was given on the command line.
    #[error("usage of {program}: \"[arguments]\"")]
    InvalidArguments { program: String },

    /// The error correction level is not one of L, M or H.
    #[error("Invalid error correction level: {0}\nValid options are [L, M, H]")]
    InvalidErrorLevel(String),

    /// The text does not fit in a QR symbol at the requested level.
    #[error(transparent)]
    EncodingCapacityExceeded(#[from] qrcode::types::QrError),

    /// Writing to the output sink failed.
    #[error("failed to write QR code: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
