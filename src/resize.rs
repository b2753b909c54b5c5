// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::{icon_file_name, raster, Action, Error, Report, ICON_SIZES};

/// Options for resampling an existing icon.
#[derive(Clone, Debug)]
pub struct ResizeOptions {
    /// The largest available icon.
    ///
    /// Default: `./icons/icon-512x512.png`
    pub source: PathBuf,

    /// Directory for `icon-NxN.png` files.
    ///
    /// Default: `./icons`
    pub out_dir: PathBuf,

    /// Sizes to produce.
    ///
    /// Default: [`ICON_SIZES`]
    pub sizes: Vec<u32>,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        ResizeOptions {
            source: PathBuf::from("./icons/icon-512x512.png"),
            out_dir: PathBuf::from("./icons"),
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

/// Produces all icon sizes from an existing PNG.
///
/// Outputs that already exist with the right dimensions are skipped.
/// Existing outputs that cannot be read are regenerated.
pub fn resize_icons(opt: &ResizeOptions) -> Result<Report, Error> {
    log::info!("Generating PWA icons from existing icon...");

    let source = raster::load_png(&opt.source)?;

    std::fs::create_dir_all(&opt.out_dir)?;

    let mut report = Report::default();
    for &size in &opt.sizes {
        let out = opt.out_dir.join(icon_file_name(size));

        if is_up_to_date(&out, size) {
            report.skip(&out);
            continue;
        }

        let result = raster::resize(&source, size).and_then(|img| raster::save_png(&img, &out));
        report.record(&out, result, Action::Generate);
    }

    log::info!("Icon generation complete: {}.", report);
    Ok(report)
}

fn is_up_to_date(path: &Path, size: u32) -> bool {
    if !path.exists() {
        return false;
    }

    match raster::png_dimensions(path) {
        Ok(dims) => dims == (size, size),
        Err(e) => {
            log::debug!("Cannot read {} cause {}. Regenerating.", path.display(), e);
            false
        }
    }
}
