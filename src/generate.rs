// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::tools::Tool;
use crate::{icon_file_name, raster, Action, Error, Report, ICON_SIZES};

/// A converter selection.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Backend {
    /// Inkscape, then ImageMagick, then the built-in renderer.
    #[default]
    Auto,
    /// Inkscape only.
    Inkscape,
    /// ImageMagick only.
    ImageMagick,
    /// The built-in `resvg` renderer.
    Builtin,
}

impl std::str::FromStr for Backend {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Backend::Auto),
            "inkscape" => Ok(Backend::Inkscape),
            "imagemagick" => Ok(Backend::ImageMagick),
            "builtin" => Ok(Backend::Builtin),
            _ => Err("invalid backend"),
        }
    }
}

/// A resolved converter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Converter {
    /// An external tool.
    External(Tool),
    /// The built-in renderer.
    Builtin,
}

impl std::fmt::Display for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Converter::External(tool) => write!(f, "{}", tool),
            Converter::Builtin => write!(f, "resvg"),
        }
    }
}

/// App icons generation options.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    /// SVG source.
    ///
    /// Default: `./icons/tiktok-logo/tiktok-logo.svg`
    pub source: PathBuf,

    /// Directory for `icon-NxN.png` files.
    ///
    /// Default: `./icons`
    pub out_dir: PathBuf,

    /// Sizes to produce.
    ///
    /// Default: [`ICON_SIZES`]
    pub sizes: Vec<u32>,

    /// Converter selection.
    ///
    /// Default: [`Backend::Auto`]
    pub backend: Backend,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            source: PathBuf::from("./icons/tiktok-logo/tiktok-logo.svg"),
            out_dir: PathBuf::from("./icons"),
            sizes: ICON_SIZES.to_vec(),
            backend: Backend::Auto,
        }
    }
}

/// Picks a converter for the backend.
///
/// `is_available` is queried lazily and in the order of preference.
pub fn select_converter<F>(backend: Backend, mut is_available: F) -> Result<Converter, Error>
where
    F: FnMut(Tool) -> bool,
{
    match backend {
        Backend::Builtin => Ok(Converter::Builtin),
        Backend::Inkscape | Backend::ImageMagick => {
            let tool = if backend == Backend::Inkscape {
                Tool::Inkscape
            } else {
                Tool::ImageMagick
            };

            if is_available(tool) {
                Ok(Converter::External(tool))
            } else {
                Err(Error::NoConverter)
            }
        }
        Backend::Auto => {
            for tool in Tool::ALL {
                if is_available(tool) {
                    return Ok(Converter::External(tool));
                }

                log::info!("{} not found.", tool);
            }

            log::info!("Neither Inkscape nor ImageMagick found. Using the built-in renderer.");
            Ok(Converter::Builtin)
        }
    }
}

/// Generates all app icon sizes from an SVG.
///
/// A failed size is logged and recorded in the report,
/// the remaining sizes are still generated.
pub fn generate(opt: &GenerateOptions) -> Result<Report, Error> {
    log::info!("Generating PWA icons from SVG...");

    if !opt.source.exists() {
        return Err(Error::SourceNotFound(opt.source.clone()));
    }

    std::fs::create_dir_all(&opt.out_dir)?;

    let converter = select_converter(opt.backend, Tool::is_available)?;
    log::debug!("Converting with {}.", converter);

    let mut report = Report::default();
    match converter {
        Converter::External(tool) => {
            for &size in &opt.sizes {
                let out = opt.out_dir.join(icon_file_name(size));
                report.record(&out, tool.convert(&opt.source, &out, size), Action::Generate);
            }
        }
        Converter::Builtin => {
            let tree = raster::load_svg(&opt.source)?;
            for &size in &opt.sizes {
                let out = opt.out_dir.join(icon_file_name(size));
                report.record(&out, render_to(&tree, size, &out), Action::Generate);
            }
        }
    }

    log::info!("Icon generation complete: {}.", report);
    Ok(report)
}

fn render_to(tree: &resvg::usvg::Tree, size: u32, out: &Path) -> Result<(), Error> {
    let pixmap = raster::render_svg(tree, size)?;
    raster::save_png(&pixmap, out)
}
