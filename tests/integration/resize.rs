use pwa_icons::raster;
use pwa_icons::{resize_icons, Error, ResizeOptions};

use crate::{dimensions, pixel};

fn write_source(dir: &std::path::Path, size: u32) -> std::path::PathBuf {
    let mut pixmap = raster::new_pixmap(size).unwrap();
    pixmap.fill(tiny_skia::Color::from_rgba8(0, 200, 100, 255));

    let path = dir.join(pwa_icons::icon_file_name(size));
    raster::save_png(&pixmap, &path).unwrap();
    path
}

#[test]
fn all_sizes_from_largest() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), 512);

    let opt = ResizeOptions {
        source,
        out_dir: dir.path().to_path_buf(),
        ..ResizeOptions::default()
    };
    let report = resize_icons(&opt).unwrap();

    // The source itself is already 512x512.
    assert_eq!(report.skipped, vec![dir.path().join("icon-512x512.png")]);
    assert_eq!(report.written.len(), 11);
    assert!(report.is_ok());

    for size in pwa_icons::ICON_SIZES {
        let path = dir.path().join(pwa_icons::icon_file_name(size));
        assert_eq!(dimensions(&path), (size, size));
    }

    let (r, g, b, a) = pixel(&dir.path().join("icon-48x48.png"), 24, 24);
    assert_eq!((r, a), (0, 255));
    assert!((g as i32 - 200).abs() <= 1 && (b as i32 - 100).abs() <= 1);
}

#[test]
fn regenerates_wrong_size() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), 256);

    // A stale 96x96 file that is actually 50x50.
    let stale = dir.path().join("icon-96x96.png");
    raster::save_png(&raster::new_pixmap(50).unwrap(), &stale).unwrap();

    let opt = ResizeOptions {
        source,
        out_dir: dir.path().to_path_buf(),
        sizes: vec![96],
    };
    let report = resize_icons(&opt).unwrap();

    assert_eq!(report.written, vec![stale.clone()]);
    assert_eq!(dimensions(&stale), (96, 96));
}

#[test]
fn regenerates_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), 256);

    let broken = dir.path().join("icon-48x48.png");
    std::fs::write(&broken, b"not a png").unwrap();

    let opt = ResizeOptions {
        source,
        out_dir: dir.path().to_path_buf(),
        sizes: vec![48],
    };
    let report = resize_icons(&opt).unwrap();

    assert!(report.skipped.is_empty());
    assert_eq!(dimensions(&broken), (48, 48));
}

#[test]
fn missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let opt = ResizeOptions {
        source: dir.path().join("icon-512x512.png"),
        out_dir: dir.path().to_path_buf(),
        ..ResizeOptions::default()
    };

    let err = resize_icons(&opt).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(_)));
}

#[test]
fn undecodable_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("icon-512x512.png");
    std::fs::write(&source, b"GIF89a").unwrap();

    let opt = ResizeOptions {
        source,
        out_dir: dir.path().to_path_buf(),
        sizes: vec![48],
    };

    let err = resize_icons(&opt).unwrap_err();
    assert!(matches!(err, Error::PngDecoding(_)));
}
