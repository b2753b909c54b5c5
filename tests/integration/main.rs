use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use pwa_icons::resvg::usvg::fontdb;

mod download;
mod generate;
mod placeholders;
mod resize;

/// A database without any fonts, so labels are never rendered.
static EMPTY_FONTDB: Lazy<fontdb::Database> = Lazy::new(fontdb::Database::new);

pub fn resource(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources")
        .join(name)
}

/// Returns a demultiplied RGBA pixel of a PNG file.
pub fn pixel(path: &Path, x: u32, y: u32) -> (u8, u8, u8, u8) {
    let pixmap = pwa_icons::raster::load_png(path).unwrap();
    let c = pixmap.pixel(x, y).unwrap().demultiply();
    (c.red(), c.green(), c.blue(), c.alpha())
}

pub fn dimensions(path: &Path) -> (u32, u32) {
    pwa_icons::raster::png_dimensions(path).unwrap()
}
