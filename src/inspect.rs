//! Reading back generated assets
//!
//! Used by the `inspect-asset` binary and the integration tests to confirm that
//! a file on disk is one of the two assets this crate produces.

use crate::radar::{ICON_FILE, ICON_SIZE, SPLASH_SIZE};
use anyhow::{Context, Result};
use image::{io::Reader as ImageReader, ColorType, Rgb};
use std::{
    fmt,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Icon,
    Splash,
}

impl AssetKind {
    pub fn size(self) -> u32 {
        match self {
            AssetKind::Icon => ICON_SIZE,
            AssetKind::Splash => SPLASH_SIZE,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Icon => write!(f, "icon"),
            AssetKind::Splash => write!(f, "splash"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssetReport {
    pub width: u32,
    pub height: u32,
    pub color_type: ColorType,
    pub center: Rgb<u8>,
    /// The asset these dimensions and color type correspond to, if any
    pub kind: Option<AssetKind>,
}

impl AssetReport {
    pub fn has_alpha(&self) -> bool {
        self.color_type.has_alpha()
    }
}

/// Decode the image at `path` and describe it.
pub fn inspect(path: &Path) -> Result<AssetReport> {
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .with_guessed_format()
        .context("Failed to detect image format")?
        .decode()
        .with_context(|| format!("Failed to decode image {}", path.display()))?;

    let width = img.width();
    let height = img.height();
    let color_type = img.color();
    let center = *img.to_rgb8().get_pixel(width / 2, height / 2);

    let kind = [AssetKind::Icon, AssetKind::Splash]
        .into_iter()
        .find(|kind| {
            color_type == ColorType::Rgb8 && width == kind.size() && height == kind.size()
        });

    Ok(AssetReport {
        width,
        height,
        color_type,
        center,
        kind,
    })
}

/// Where the generator writes the icon when no output directory is given.
pub fn default_asset_path() -> Result<PathBuf> {
    Ok(crate::default_output_dir()?.join(ICON_FILE))
}
