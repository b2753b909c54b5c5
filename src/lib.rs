// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`pwa-icons` prepares icon assets of a Progressive Web App.

- [`download`] fetches Material Icons SVGs and builds an offline fallback script.
- [`generate`] converts an SVG into all app icon sizes using Inkscape,
  ImageMagick or the built-in `resvg` renderer.
- [`resize_icons`] resamples an existing PNG into all app icon sizes.
- [`create_placeholders`] draws placeholder PNGs for every asset.

All batch operations are best effort: a failed output is logged
and recorded in a [`Report`], the rest is still produced.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

pub use resvg;
pub use svgtypes;
pub use tiny_skia;

mod assets;
mod error;
mod generate;
mod material;
mod placeholder;
pub mod raster;
mod report;
mod resize;
mod sizes;
pub mod tools;

pub use assets::{default_assets, AssetSpec};
pub use error::Error;
pub use generate::{generate, select_converter, Backend, Converter, GenerateOptions};
pub use material::{
    download, fallback_script, DownloadOptions, DownloadReport, Fetch, HttpFetcher,
    ICON_URL_TEMPLATE, LOCAL_STYLESHEET, MATERIAL_ICONS,
};
pub use placeholder::{
    conversion_report, create_placeholders, label_font, placeholder, placeholder_svg,
    PlaceholderOptions, LABEL_FONTS, MANUAL_INSTRUCTIONS,
};
pub(crate) use report::Action;
pub use report::Report;
pub use resize::{resize_icons, ResizeOptions};
pub use sizes::{icon_file_name, parse_size, parse_sizes, ICON_SIZES, MAX_SIZE};
