// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Icon sizes needed for a complete PWA.
///
/// 120, 152 and 180 are required by iOS.
pub const ICON_SIZES: [u32; 12] = [48, 72, 96, 120, 128, 144, 152, 180, 192, 256, 384, 512];

/// The largest size accepted from the command line.
pub const MAX_SIZE: u32 = 4096;

/// Returns the conventional file name of a square app icon.
///
/// ```
/// assert_eq!(pwa_icons::icon_file_name(48), "icon-48x48.png");
/// ```
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}x{}.png", size, size)
}

/// Parses a single icon size.
pub fn parse_size(s: &str) -> Result<u32, String> {
    let n: u32 = s.trim().parse().map_err(|_| "invalid size")?;

    if (1..=MAX_SIZE).contains(&n) {
        Ok(n)
    } else {
        Err("size out of bounds".to_string())
    }
}

/// Parses a comma-separated list of icon sizes.
///
/// Duplicates are removed, the original order is preserved.
pub fn parse_sizes(s: &str) -> Result<Vec<u32>, String> {
    let mut sizes = Vec::new();
    for part in s.split(',').filter(|p| !p.trim().is_empty()) {
        let n = parse_size(part)?;
        if !sizes.contains(&n) {
            sizes.push(n);
        }
    }

    if sizes.is_empty() {
        return Err("sizes list cannot be empty".to_string());
    }

    Ok(sizes)
}
