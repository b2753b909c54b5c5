// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Built-in rasterization, resampling and PNG I/O.

use std::path::Path;

use resvg::usvg::{self, fontdb};
use rgb::{FromSlice, RGBA8};

use crate::Error;

/// Creates a transparent square pixmap.
pub fn new_pixmap(size: u32) -> Result<tiny_skia::Pixmap, Error> {
    tiny_skia::Pixmap::new(size, size).ok_or(Error::InvalidSize(size))
}

/// Creates a fonts database with system fonts and the usual generic families.
pub fn load_fonts() -> fontdb::Database {
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    fontdb.set_serif_family("Times New Roman");
    fontdb.set_sans_serif_family("Arial");
    fontdb.set_cursive_family("Comic Sans MS");
    fontdb.set_fantasy_family("Impact");
    fontdb.set_monospace_family("Courier New");
    fontdb
}

/// Loads an SVG or SVGZ file.
///
/// Relative `href`s are resolved against the file directory.
pub fn load_svg(path: &Path) -> Result<usvg::Tree, Error> {
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }

    let mut svg_data = std::fs::read(path)?;
    if svg_data.starts_with(&[0x1f, 0x8b]) {
        svg_data = usvg::decompress_svgz(&svg_data)?;
    }

    let svg_string = std::str::from_utf8(&svg_data).map_err(|_| usvg::Error::NotAnUtf8Str)?;

    let xml_opt = usvg::roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let xml_tree = usvg::roxmltree::Document::parse_with_options(svg_string, xml_opt)
        .map_err(usvg::Error::ParsingFailed)?;

    // fontdb initialization is pretty expensive, so perform it only when needed.
    let has_text_nodes = xml_tree
        .descendants()
        .any(|n| n.has_tag_name(("http://www.w3.org/2000/svg", "text")));

    let fontdb = if has_text_nodes {
        load_fonts()
    } else {
        fontdb::Database::new()
    };

    let opt = usvg::Options {
        resources_dir: std::fs::canonicalize(path)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf())),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_xmltree(&xml_tree, &opt, &fontdb)?;
    Ok(tree)
}

/// Renders a tree into a `size`x`size` pixmap.
///
/// The image is scaled to fit and centered, keeping its aspect ratio.
pub fn render_svg(tree: &usvg::Tree, size: u32) -> Result<tiny_skia::Pixmap, Error> {
    let mut pixmap = new_pixmap(size)?;

    let tree_size = tree.size();
    let side = size as f32;
    let scale = (side / tree_size.width()).min(side / tree_size.height());
    let dx = (side - tree_size.width() * scale) / 2.0;
    let dy = (side - tree_size.height() * scale) / 2.0;
    let ts = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, dx, dy);

    resvg::render(tree, ts, &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Resamples a pixmap to `size`x`size`.
///
/// Large reductions are done in bicubic halving steps until the image is
/// within 2x of the target, so every source pixel contributes to the result.
/// Non-square sources are stretched.
pub fn resize(pixmap: &tiny_skia::Pixmap, size: u32) -> Result<tiny_skia::Pixmap, Error> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }

    let mut step: Option<tiny_skia::Pixmap> = None;
    loop {
        let src = step.as_ref().unwrap_or(pixmap);
        let (w, h) = (src.width(), src.height());
        if w < size * 2 && h < size * 2 {
            break;
        }

        let next = scale_to(src, (w / 2).max(size), (h / 2).max(size))?;
        step = Some(next);
    }

    scale_to(step.as_ref().unwrap_or(pixmap), size, size)
}

fn scale_to(
    pixmap: &tiny_skia::Pixmap,
    width: u32,
    height: u32,
) -> Result<tiny_skia::Pixmap, Error> {
    let mut scaled =
        tiny_skia::Pixmap::new(width, height).ok_or(Error::InvalidSize(width.max(height)))?;

    let ts = tiny_skia::Transform::from_scale(
        width as f32 / pixmap.width() as f32,
        height as f32 / pixmap.height() as f32,
    );

    let paint = tiny_skia::PixmapPaint {
        quality: tiny_skia::FilterQuality::Bicubic,
        ..tiny_skia::PixmapPaint::default()
    };

    scaled.draw_pixmap(0, 0, pixmap.as_ref(), &paint, ts, None);
    Ok(scaled)
}

/// Loads a PNG file of any color type.
pub fn load_png(path: &Path) -> Result<tiny_skia::Pixmap, Error> {
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }

    let data = std::fs::read(path)?;
    let pixmap = tiny_skia::Pixmap::decode_png(&data)?;
    Ok(pixmap)
}

/// Returns PNG dimensions without decoding the image data.
pub fn png_dimensions(path: &Path) -> Result<(u32, u32), Error> {
    let file = std::fs::File::open(path)?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let reader = decoder.read_info()?;
    let info = reader.info();
    Ok((info.width, info.height))
}

/// Saves a pixmap as an RGBA PNG with the best compression.
pub fn save_png(pixmap: &tiny_skia::Pixmap, path: &Path) -> Result<(), Error> {
    let mut data = pixmap.data().to_vec();
    demultiply_alpha(data.as_rgba_mut());

    let file = std::fs::File::create(path)?;
    let w = std::io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Best);
    encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&data)?;
    writer.finish()?;
    Ok(())
}

fn demultiply_alpha(data: &mut [RGBA8]) {
    for p in data {
        if p.a == 0 {
            continue;
        }

        let a = p.a as f64 / 255.0;
        p.b = (p.b as f64 / a + 0.5) as u8;
        p.g = (p.g as f64 / a + 0.5) as u8;
        p.r = (p.r as f64 / a + 0.5) as u8;
    }
}
