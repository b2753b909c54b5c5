// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! External SVG to PNG converters.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::Error;

/// An external SVG converter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tool {
    /// `inkscape`, 1.0 command line syntax.
    Inkscape,
    /// ImageMagick's `convert`.
    ImageMagick,
}

impl Tool {
    /// All tools in the order of preference.
    pub const ALL: [Tool; 2] = [Tool::Inkscape, Tool::ImageMagick];

    /// Returns the executable name.
    pub fn program(self) -> &'static str {
        match self {
            Tool::Inkscape => "inkscape",
            Tool::ImageMagick => "convert",
        }
    }

    /// Returns a human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Inkscape => "Inkscape",
            Tool::ImageMagick => "ImageMagick",
        }
    }

    /// Checks that the tool is on `PATH` and responds to `--version`.
    pub fn is_available(self) -> bool {
        let path = match which::which(self.program()) {
            Ok(path) => path,
            Err(_) => return false,
        };

        log::debug!("Found {} at {}.", self.name(), path.display());

        Command::new(path)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Builds a command that converts `src` into a `size`x`size` PNG at `out`.
    pub fn command(self, src: &Path, out: &Path, size: u32) -> Command {
        let mut cmd = Command::new(self.program());
        match self {
            Tool::Inkscape => {
                cmd.arg("--export-filename")
                    .arg(out)
                    .arg("--export-width")
                    .arg(size.to_string())
                    .arg("--export-height")
                    .arg(size.to_string())
                    .arg(src);
            }
            Tool::ImageMagick => {
                let geometry = format!("{}x{}", size, size);
                cmd.arg("-background")
                    .arg("none")
                    .arg("-size")
                    .arg(&geometry)
                    .arg(src)
                    .arg("-resize")
                    .arg(&geometry)
                    .arg(out);
            }
        }

        cmd
    }

    /// Runs the conversion and waits for it to finish.
    pub fn convert(self, src: &Path, out: &Path, size: u32) -> Result<(), Error> {
        let status = self.command(src, out, size).stdin(Stdio::null()).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(Error::ToolFailed {
                program: self.program(),
                code: status.code(),
            })
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
