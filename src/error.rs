// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// A filesystem operation failed.
    Io(std::io::Error),

    /// An HTTP request failed or returned a non-success status.
    Http(String),

    /// Failed to parse an SVG source.
    SvgParsing(resvg::usvg::Error),

    /// Failed to decode a PNG file.
    PngDecoding(png::DecodingError),

    /// Failed to encode a PNG file.
    PngEncoding(png::EncodingError),

    /// An image size is zero or too large to allocate.
    InvalidSize(u32),

    /// An external converter exited with a non-zero status.
    ToolFailed {
        /// Program name.
        program: &'static str,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
    },

    /// None of the requested SVG converters is installed.
    NoConverter,

    /// The source file of an operation doesn't exist.
    SourceNotFound(PathBuf),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<resvg::usvg::Error> for Error {
    fn from(e: resvg::usvg::Error) -> Self {
        Error::SvgParsing(e)
    }
}

impl From<png::DecodingError> for Error {
    fn from(e: png::DecodingError) -> Self {
        Error::PngDecoding(e)
    }
}

impl From<png::EncodingError> for Error {
    fn from(e: png::EncodingError) -> Self {
        Error::PngEncoding(e)
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        Error::Http(e.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::Io(ref e) => {
                write!(f, "{}", e)
            }
            Error::Http(ref e) => {
                write!(f, "request failed cause {}", e)
            }
            Error::SvgParsing(ref e) => {
                write!(f, "{}", e)
            }
            Error::PngDecoding(ref e) => {
                write!(f, "PNG decoding failed cause {}", e)
            }
            Error::PngEncoding(ref e) => {
                write!(f, "PNG encoding failed cause {}", e)
            }
            Error::InvalidSize(size) => {
                write!(f, "{}x{} is not a valid image size", size, size)
            }
            Error::ToolFailed { program, code } => match code {
                Some(code) => write!(f, "'{}' exited with status {}", program, code),
                None => write!(f, "'{}' was terminated by a signal", program),
            },
            Error::NoConverter => {
                write!(f, "neither Inkscape nor ImageMagick found")
            }
            Error::SourceNotFound(ref path) => {
                write!(f, "source {} not found", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}
