use anyhow::Result;
use radar_assets::inspect::{default_asset_path, inspect};
use std::path::PathBuf;

fn main() -> Result<()> {
    let path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => default_asset_path()?,
    };

    let report = inspect(&path)?;

    println!("Checking asset: {}", path.display());
    println!("Image dimensions: {}x{}", report.width, report.height);
    println!("Color type: {:?}", report.color_type);
    println!(
        "Center pixel: RGB [{}, {}, {}]",
        report.center[0], report.center[1], report.center[2]
    );

    match report.kind {
        Some(kind) => println!("✓ Matches the {} asset", kind),
        None if report.has_alpha() => println!("⚠ Image has an alpha channel"),
        None => println!("⚠ Not a recognized asset size"),
    }

    Ok(())
}
