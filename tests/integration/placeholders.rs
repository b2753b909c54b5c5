use pwa_icons::{conversion_report, create_placeholders, default_assets, PlaceholderOptions};

use crate::{dimensions, pixel, EMPTY_FONTDB};

#[test]
fn every_asset_output() {
    let dir = tempfile::tempdir().unwrap();
    let icons_dir = dir.path().join("icons");
    let assets = default_assets(&icons_dir);

    let report = create_placeholders(&assets, &EMPTY_FONTDB, &PlaceholderOptions::default());

    assert!(report.is_ok());
    assert_eq!(report.written.len(), 12 + 6);

    assert_eq!(dimensions(&icons_dir.join("icon-180x180.png")), (180, 180));
    assert_eq!(dimensions(&icons_dir.join("maskable-icon.png")), (512, 512));
    assert_eq!(dimensions(&icons_dir.join("shortcut-paste.png")), (96, 96));

    let icon = icons_dir.join("widget-icon.png");
    assert_eq!(pixel(&icon, 0, 0), (255, 0, 79, 255));
    assert_eq!(pixel(&icon, 48, 30), (255, 255, 255, 255));
}

#[test]
fn custom_background() {
    let dir = tempfile::tempdir().unwrap();
    let assets = vec![pwa_icons::AssetSpec::new(
        dir.path().join("logo.svg"),
        dir.path().join("out-{size}.png").to_string_lossy(),
        &[64],
    )];

    let opt = PlaceholderOptions {
        background: "#00ff00".parse().unwrap(),
        ..PlaceholderOptions::default()
    };
    create_placeholders(&assets, &EMPTY_FONTDB, &opt);

    assert_eq!(pixel(&dir.path().join("out-64.png"), 2, 2), (0, 255, 0, 255));
}

#[test]
fn report_lists_found_and_missing() {
    let dir = tempfile::tempdir().unwrap();
    let icons_dir = dir.path().join("icons");
    let assets = default_assets(&icons_dir);

    std::fs::create_dir_all(icons_dir.join("tiktok-logo")).unwrap();
    std::fs::copy(
        crate::resource("logo.svg"),
        icons_dir.join("tiktok-logo").join("maskable-icon.svg"),
    )
    .unwrap();

    let listing = conversion_report(&assets);
    let lines: Vec<_> = listing.lines().collect();

    let found = format!(
        "✓ Found: {}",
        icons_dir.join("tiktok-logo/maskable-icon.svg").display()
    );
    let target = format!(
        "  → Convert to: {} (512x512px)",
        icons_dir.join("maskable-icon.png").display()
    );
    let missing = format!(
        "✗ Missing: {}",
        icons_dir.join("tiktok-logo/tiktok-logo.svg").display()
    );

    assert_eq!(lines.len(), 8);
    assert!(lines.contains(&missing.as_str()));
    assert!(lines.contains(&found.as_str()));
    assert!(lines.contains(&target.as_str()));
    assert_eq!(lines.iter().filter(|l| l.starts_with("✗")).count(), 6);
}
