// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Placeholder icons for when no converter is available.

use std::fmt::Write;
use std::path::Path;

use resvg::usvg::{self, fontdb};

use crate::{raster, AssetSpec, Action, Error, Report};

/// Font families tried for the size label, in order.
pub const LABEL_FONTS: &[&str] = &[
    "Arial",
    "Verdana",
    "DejaVu Sans",
    "Tahoma",
    "Roboto",
    "Helvetica",
];

/// Steps for converting the sources by hand.
pub const MANUAL_INSTRUCTIONS: &str = "\
Option 1: Use an online converter
1. Visit a site like https://svgtopng.com/ or https://cloudconvert.com/svg-to-png
2. Upload each SVG file and convert it to the required PNG sizes
3. Download the PNGs and place them in your icons folder

Option 2: Use Inkscape (if installed)
1. Open each SVG file in Inkscape
2. Go to File > Export PNG Image
3. Set the desired dimensions
4. Export to the correct location

Option 3: Use ImageMagick (if installed)
1. Run: convert -background none input.svg -resize WIDTHxHEIGHT output.png
   replacing WIDTH and HEIGHT with the desired size
";

/// Placeholder rendering options.
#[derive(Clone, Debug)]
pub struct PlaceholderOptions {
    /// Background color.
    ///
    /// Default: `#ff004f`
    pub background: svgtypes::Color,

    /// Circle color.
    ///
    /// Default: white
    pub foreground: svgtypes::Color,

    /// Label color.
    ///
    /// Default: black
    pub label: svgtypes::Color,
}

impl Default for PlaceholderOptions {
    fn default() -> Self {
        PlaceholderOptions {
            background: svgtypes::Color::new_rgba(255, 0, 79, 255),
            foreground: svgtypes::Color::white(),
            label: svgtypes::Color::black(),
        }
    }
}

/// Lists every source with its conversion targets.
///
/// ```text
/// ✓ Found: ./icons/tiktok-logo/maskable-icon.svg
///   → Convert to: ./icons/maskable-icon.png (512x512px)
/// ✗ Missing: ./icons/tiktok-logo/widget-icon.svg
/// ```
pub fn conversion_report(assets: &[AssetSpec]) -> String {
    let mut s = String::new();
    for asset in assets {
        if asset.src.exists() {
            let _ = writeln!(s, "✓ Found: {}", asset.src.display());
            for (size, dest) in asset.outputs() {
                let _ = writeln!(
                    s,
                    "  → Convert to: {} ({}x{}px)",
                    dest.display(),
                    size,
                    size
                );
            }
        } else {
            let _ = writeln!(s, "✗ Missing: {}", asset.src.display());
        }
    }

    s
}

/// Returns the first label font present in the database.
pub fn label_font(fontdb: &fontdb::Database) -> Option<&'static str> {
    LABEL_FONTS.iter().copied().find(|name| {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(name)],
            ..fontdb::Query::default()
        };
        fontdb.query(&query).is_some()
    })
}

/// Builds the placeholder SVG: a filled square, a centered circle
/// and a `NxN` label when a font is available.
pub fn placeholder_svg(size: u32, font: Option<&str>, opt: &PlaceholderOptions) -> String {
    let center = size / 2;
    let radius = size / 3;

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{s}\" height=\"{s}\" viewBox=\"0 0 {s} {s}\">",
        s = size
    );
    let _ = write!(
        svg,
        "<rect width=\"{s}\" height=\"{s}\" {}/>",
        paint(opt.background),
        s = size
    );
    let _ = write!(
        svg,
        "<circle cx=\"{c}\" cy=\"{c}\" r=\"{}\" {}/>",
        radius,
        paint(opt.foreground),
        c = center
    );

    if let Some(family) = font {
        let font_size = (size / 8).max(10);
        let _ = write!(
            svg,
            "<text x=\"{c}\" y=\"{c}\" font-family=\"{}\" font-size=\"{}\" \
             text-anchor=\"middle\" dominant-baseline=\"central\" {}>{s}x{s}</text>",
            family,
            font_size,
            paint(opt.label),
            c = center,
            s = size
        );
    }

    svg.push_str("</svg>");
    svg
}

fn paint(c: svgtypes::Color) -> String {
    format!(
        "fill=\"rgb({},{},{})\" fill-opacity=\"{}\"",
        c.red,
        c.green,
        c.blue,
        c.alpha as f32 / 255.0
    )
}

/// Renders a placeholder icon.
pub fn placeholder(
    size: u32,
    fontdb: &fontdb::Database,
    opt: &PlaceholderOptions,
) -> Result<tiny_skia::Pixmap, Error> {
    let font = label_font(fontdb);
    if font.is_none() {
        log::warn!("Could not add text to image: no suitable font found.");
    }

    let svg = placeholder_svg(size, font, opt);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default(), fontdb)?;
    raster::render_svg(&tree, size)
}

/// Writes a placeholder for every asset output.
///
/// Parent directories are created as needed.
pub fn create_placeholders(
    assets: &[AssetSpec],
    fontdb: &fontdb::Database,
    opt: &PlaceholderOptions,
) -> Report {
    log::info!("Creating placeholder PNG files...");

    let mut report = Report::default();
    for asset in assets {
        for (size, dest) in asset.outputs() {
            let result = write_placeholder(size, &dest, fontdb, opt);
            report.record(&dest, result, Action::Placeholder);
        }
    }

    report
}

fn write_placeholder(
    size: u32,
    dest: &Path,
    fontdb: &fontdb::Database,
    opt: &PlaceholderOptions,
) -> Result<(), Error> {
    if let Some(dir) = dest.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let pixmap = placeholder(size, fontdb, opt)?;
    raster::save_png(&pixmap, dest)
}
