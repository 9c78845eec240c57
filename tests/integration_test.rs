use radar_assets::{
    inspect::{default_asset_path, inspect, AssetKind},
    palette::Palette,
    radar,
};
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Runs `radar-assets -o <dir>` and asserts that both PNG files are written with
/// the expected dimensions and without an alpha channel.
#[test]
fn test_generates_icon_and_splash() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("public");

    let output = run_generator(&output_dir);

    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("radar-assets command failed");
    }
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created icon.png (1024x1024)"));
    assert!(stdout.contains("Created splash.png (200x200)"));
    assert!(stdout.contains("All images created successfully!"));

    let palette = Palette::radar().unwrap();

    let icon = inspect(&output_dir.join("icon.png")).expect("icon.png should decode");
    assert_eq!((icon.width, icon.height), (1024, 1024));
    assert!(!icon.has_alpha(), "icon.png must not carry an alpha channel");
    assert_eq!(icon.kind, Some(AssetKind::Icon));
    assert_eq!(icon.center, palette.eye);

    let splash = inspect(&output_dir.join("splash.png")).expect("splash.png should decode");
    assert_eq!((splash.width, splash.height), (200, 200));
    assert!(!splash.has_alpha(), "splash.png must not carry an alpha channel");
    assert_eq!(splash.kind, Some(AssetKind::Splash));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("public");

    assert!(run_generator(&output_dir).status.success());
    let icon = std::fs::read(output_dir.join("icon.png")).unwrap();
    let splash = std::fs::read(output_dir.join("splash.png")).unwrap();

    // Second run overwrites the files in place
    assert!(run_generator(&output_dir).status.success());
    assert_eq!(icon, std::fs::read(output_dir.join("icon.png")).unwrap());
    assert_eq!(splash, std::fs::read(output_dir.join("splash.png")).unwrap());
}

#[test]
fn test_missing_png_support_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("public");
    let mut log = Vec::new();

    let code = radar_assets::run(&output_dir, false, &mut log);

    assert_eq!(code, 1);
    let log = String::from_utf8(log).unwrap();
    assert!(log.contains("PNG encoding support is not available"));
    assert!(log.contains("run again"));
    assert!(!output_dir.exists());
}

#[test]
fn test_run_reports_success() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut log = Vec::new();

    let code = radar_assets::run(temp_dir.path(), true, &mut log);

    assert_eq!(code, 0);
    let log = String::from_utf8(log).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Created icon.png (1024x1024)",
            "Created splash.png (200x200)",
            "✓ All images created successfully!",
        ]
    );
}

#[test]
fn test_splash_failure_keeps_icon() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    // A directory in the way makes the splash write fail
    std::fs::create_dir(temp_dir.path().join("splash.png")).unwrap();

    let mut log = Vec::new();
    let code = radar_assets::run(temp_dir.path(), true, &mut log);

    assert_eq!(code, 1);
    assert!(temp_dir.path().join("icon.png").is_file());

    let log = String::from_utf8(log).unwrap();
    assert!(log.contains("Created icon.png"));
    assert!(log.contains("Error: Failed to create splash"));
    assert!(!log.contains("All images created successfully!"));
}

#[test]
fn test_unusable_output_dir_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let blocker = temp_dir.path().join("public");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let mut log = Vec::new();
    let code = radar_assets::run(&blocker, true, &mut log);

    assert_eq!(code, 1);
    let log = String::from_utf8(log).unwrap();
    assert!(log.contains("Error: Can't create output directory"));
}

#[test]
fn test_inspect_rejects_non_image() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("icon.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    assert!(inspect(&path).is_err());
}

/// A log sink that rejects every write.
struct BrokenLog;

impl Write for BrokenLog {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "log closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "log closed"))
    }
}

#[test]
fn test_generate_icon_ignores_broken_log() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let palette = Palette::radar().unwrap();

    let path = radar::generate_icon(temp_dir.path(), &palette, &mut BrokenLog)
        .expect("A failing log must not fail icon generation");

    assert!(path.is_file());
}

#[test]
fn test_run_with_broken_log_still_succeeds() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let code = radar_assets::run(temp_dir.path(), true, &mut BrokenLog);

    assert_eq!(code, 0);
    assert!(temp_dir.path().join("icon.png").is_file());
    assert!(temp_dir.path().join("splash.png").is_file());
}

#[test]
fn test_default_asset_path_follows_output_dir() {
    let path = default_asset_path().expect("Executable location should resolve");

    assert_eq!(path.file_name().unwrap(), "icon.png");
    let expected_dir = radar_assets::default_output_dir().unwrap();
    assert_eq!(path.parent().unwrap(), expected_dir.as_path());
    assert!(path.parent().unwrap().ends_with("public"));
}

fn run_generator(output_dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_radar-assets"))
        .arg("-o")
        .arg(output_dir)
        .output()
        .expect("Failed to run radar-assets command")
}
