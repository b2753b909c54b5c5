use pwa_icons::{generate, Backend, Error, GenerateOptions};

use crate::{dimensions, pixel, resource};

fn builtin(source: &str, out_dir: &std::path::Path, sizes: &[u32]) -> GenerateOptions {
    GenerateOptions {
        source: resource(source),
        out_dir: out_dir.to_path_buf(),
        sizes: sizes.to_vec(),
        backend: Backend::Builtin,
    }
}

#[test]
fn builtin_all_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let report = generate(&builtin("logo.svg", dir.path(), &[48, 96])).unwrap();

    assert!(report.is_ok());
    assert_eq!(report.written.len(), 2);

    let icon = dir.path().join("icon-48x48.png");
    assert_eq!(dimensions(&icon), (48, 48));
    assert_eq!(dimensions(&dir.path().join("icon-96x96.png")), (96, 96));

    assert_eq!(pixel(&icon, 1, 1), (255, 0, 79, 255));
    assert_eq!(pixel(&icon, 24, 24), (255, 255, 255, 255));
}

#[test]
fn builtin_keeps_aspect_ratio() {
    let dir = tempfile::tempdir().unwrap();
    generate(&builtin("wide.svg", dir.path(), &[64])).unwrap();

    let icon = dir.path().join("icon-64x64.png");
    assert_eq!(pixel(&icon, 32, 2).3, 0);
    assert_eq!(pixel(&icon, 32, 32), (0, 0, 255, 255));
}

#[test]
fn creates_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("public").join("icons");
    generate(&builtin("logo.svg", &out_dir, &[72])).unwrap();
    assert!(out_dir.join("icon-72x72.png").exists());
}

#[test]
fn missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate(&builtin("no-such-logo.svg", dir.path(), &[48])).unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(_)));
    assert!(!dir.path().join("icon-48x48.png").exists());
}

#[test]
fn malformed_source() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate(&builtin("broken.svg", dir.path(), &[48])).unwrap_err();
    assert!(matches!(err, Error::SvgParsing(_)));
}
