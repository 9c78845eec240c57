use crate::{canvas::Canvas, palette::Palette};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbImage,
};
use std::{
    fs::create_dir_all,
    io::Write,
    path::{Path, PathBuf},
};

pub const ICON_SIZE: u32 = 1024;
pub const SPLASH_SIZE: u32 = 200;
pub const ICON_FILE: &str = "icon.png";
pub const SPLASH_FILE: &str = "splash.png";

/// Radius of the icon's background gradient, measured from the canvas center.
pub const GRADIENT_RADIUS: f64 = 512.0;

/// Render the 1024x1024 application icon.
pub fn render_icon(palette: &Palette) -> RgbImage {
    let mut canvas = Canvas::new(ICON_SIZE, ICON_SIZE, palette.icon_background);
    let center = (ICON_SIZE as i32 / 2, ICON_SIZE as i32 / 2);

    paint_icon_background(&mut canvas, palette);

    // Radar rings
    canvas.ellipse([212, 212, 812, 812], None, Some(palette.accent), 4);
    canvas.ellipse([312, 312, 712, 712], None, Some(palette.accent), 3);
    canvas.ellipse([412, 412, 612, 612], None, Some(palette.accent), 2);

    // Eye
    canvas.ellipse([432, 462, 592, 562], Some(palette.eye), Some(palette.accent), 2);
    canvas.ellipse([487, 487, 537, 537], Some(palette.pupil), None, 0);
    canvas.ellipse([500, 500, 524, 524], Some(palette.pupil_center), None, 0);

    // Crosshair
    canvas.line((392, 512), (632, 512), palette.accent, 2);
    canvas.line((512, 432), (512, 592), palette.accent, 2);

    // Sweep with its tip
    canvas.line(center, (512, 212), palette.accent, 3);
    canvas.ellipse([504, 204, 520, 220], Some(palette.accent), None, 0);

    for (x, y) in [(150, 150), (874, 150), (150, 874), (874, 874)] {
        canvas.ellipse([x - 6, y - 6, x + 6, y + 6], Some(palette.accent), None, 0);
    }

    // Trust network: each node is wired back to the center
    for (x, y) in [(300, 300), (724, 300), (300, 724), (724, 724)] {
        canvas.ellipse([x - 4, y - 4, x + 4, y + 4], Some(palette.eye), None, 0);
        canvas.line((x, y), center, palette.eye, 1);
    }

    canvas.into_image()
}

/// Paint only the icon's radial gradient over its flat background.
pub fn paint_icon_background(canvas: &mut Canvas, palette: &Palette) {
    let center = (canvas.width() as f64 / 2.0, canvas.height() as f64 / 2.0);
    canvas.radial_gradient(
        center,
        GRADIENT_RADIUS,
        palette.gradient_inner,
        palette.gradient_outer,
    );
}

/// Render the 200x200 splash screen, a reduced version of the icon on a flat background.
pub fn render_splash(palette: &Palette) -> RgbImage {
    let mut canvas = Canvas::new(SPLASH_SIZE, SPLASH_SIZE, palette.splash_background);

    canvas.ellipse([40, 40, 160, 160], None, Some(palette.accent), 2);
    canvas.ellipse([65, 65, 135, 135], None, Some(palette.accent), 1);

    canvas.ellipse([75, 85, 125, 115], Some(palette.eye), Some(palette.accent), 1);
    canvas.ellipse([92, 92, 108, 108], Some(palette.pupil), None, 0);
    canvas.ellipse([96, 96, 104, 104], Some(palette.pupil_center), None, 0);

    canvas.line((65, 100), (135, 100), palette.accent, 1);
    canvas.line((100, 65), (100, 135), palette.accent, 1);

    canvas.into_image()
}

/// Render the icon and write it to `<out_dir>/icon.png`, reporting progress to `log`.
pub fn generate_icon<W: Write>(
    out_dir: &Path,
    palette: &Palette,
    log: &mut W,
) -> Result<PathBuf> {
    let path = out_dir.join(ICON_FILE);
    save_png(&render_icon(palette), &path)?;
    // The file is already on disk, so a broken log does not fail the step.
    let _ = writeln!(log, "Created {} ({}x{})", ICON_FILE, ICON_SIZE, ICON_SIZE);
    Ok(path)
}

pub fn generate_splash<W: Write>(
    out_dir: &Path,
    palette: &Palette,
    log: &mut W,
) -> Result<PathBuf> {
    let path = out_dir.join(SPLASH_FILE);
    save_png(&render_splash(palette), &path)?;
    let _ = writeln!(log, "Created {} ({}x{})", SPLASH_FILE, SPLASH_SIZE, SPLASH_SIZE);
    Ok(path)
}

/// Write both assets into `out_dir`, creating it when needed.
///
/// The icon is written first. A failure on the splash leaves the icon on disk.
pub fn generate_all<W: Write>(out_dir: &Path, log: &mut W) -> Result<()> {
    let palette = Palette::radar()?;

    create_dir_all(out_dir)
        .with_context(|| format!("Can't create output directory {}", out_dir.display()))?;

    generate_icon(out_dir, &palette, log).context("Failed to create icon")?;
    generate_splash(out_dir, &palette, log).context("Failed to create splash")?;

    Ok(())
}

fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let buf = encode_png(image)?;
    std::fs::write(path, buf)
        .with_context(|| format!("Failed to write PNG file {}", path.display()))?;
    Ok(())
}

/// Encode an RGB image as a PNG. The output depends only on the pixels.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_png(image.as_raw(), &mut buf, image.width(), image.height())?;
    Ok(buf)
}

fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image_data, width, height, ColorType::Rgb8)
        .context("Failed to encode PNG")?;
    Ok(())
}

/// Check that PNG encoding works by encoding a single pixel in memory.
///
/// The codec is linked at build time, so this only catches an encoder that
/// fails at runtime. A build without PNG support does not compile at all.
pub fn png_support_available() -> bool {
    let probe = RgbImage::new(1, 1);
    encode_png(&probe).is_ok()
}
