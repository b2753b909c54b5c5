// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use crate::ICON_SIZES;

/// An SVG source and the PNG files that should be produced from it.
#[derive(Clone, PartialEq, Debug)]
pub struct AssetSpec {
    /// Path to the SVG source.
    pub src: PathBuf,

    /// Output path template.
    ///
    /// Every `{size}` occurrence is replaced by the target size.
    pub dest: String,

    /// Target sizes. Icons are always square.
    pub sizes: Vec<u32>,
}

impl AssetSpec {
    /// Creates a new asset spec.
    pub fn new(src: impl Into<PathBuf>, dest: impl Into<String>, sizes: &[u32]) -> Self {
        AssetSpec {
            src: src.into(),
            dest: dest.into(),
            sizes: sizes.to_vec(),
        }
    }

    /// Returns the output path for the specified size.
    pub fn dest_for(&self, size: u32) -> PathBuf {
        PathBuf::from(self.dest.replace("{size}", &size.to_string()))
    }

    /// Returns all `(size, output path)` pairs.
    pub fn outputs(&self) -> impl Iterator<Item = (u32, PathBuf)> + '_ {
        self.sizes.iter().map(move |&size| (size, self.dest_for(size)))
    }
}

/// Returns the asset table of the web app.
///
/// Sources are expected in `<icons_dir>/tiktok-logo/`,
/// outputs are written directly into `icons_dir`.
pub fn default_assets(icons_dir: &Path) -> Vec<AssetSpec> {
    let src_dir = icons_dir.join("tiktok-logo");
    let src = |name: &str| src_dir.join(format!("{}.svg", name));
    let dest = |name: &str| icons_dir.join(name).to_string_lossy().into_owned();

    vec![
        // App icons.
        AssetSpec::new(src("tiktok-logo"), dest("icon-{size}x{size}.png"), &ICON_SIZES),
        AssetSpec::new(src("maskable-icon"), dest("maskable-icon.png"), &[512]),
        AssetSpec::new(src("monochrome-icon"), dest("monochrome-icon.png"), &[512]),
        // Shortcuts.
        AssetSpec::new(src("shortcut-recent"), dest("shortcut-recent.png"), &[96]),
        AssetSpec::new(src("shortcut-paste"), dest("shortcut-paste.png"), &[96]),
        // Widgets.
        AssetSpec::new(src("widget-icon"), dest("widget-icon.png"), &[96]),
        AssetSpec::new(src("widget-play-icon"), dest("widget-play-icon.png"), &[96]),
    ]
}
