use anyhow::{anyhow, Result};
use image::Rgb;
use std::str::FromStr;

/// Colors shared by the icon and the splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Flat icon background, visible outside the gradient disc.
    pub icon_background: Rgb<u8>,
    pub gradient_inner: Rgb<u8>,
    pub gradient_outer: Rgb<u8>,
    pub splash_background: Rgb<u8>,
    /// Radar rings, crosshairs, sweep and accent dots
    pub accent: Rgb<u8>,
    /// Eye fill and network nodes
    pub eye: Rgb<u8>,
    pub pupil: Rgb<u8>,
    pub pupil_center: Rgb<u8>,
}

impl Palette {
    pub fn radar() -> Result<Self> {
        Ok(Self {
            icon_background: parse_color("#1a1a2e")?,
            gradient_inner: parse_color("#16213e")?,
            gradient_outer: parse_color("#0f1419")?,
            splash_background: parse_color("#0f1419")?,
            accent: parse_color("#60a5fa")?,
            eye: parse_color("#3b82f6")?,
            pupil: parse_color("#ffffff")?,
            pupil_center: parse_color("#1e40af")?,
        })
    }
}

/// Parse a CSS color string into an 8-bit RGB pixel. Alpha is dropped.
pub fn parse_color(color: &str) -> Result<Rgb<u8>> {
    let color = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow!("Invalid color: {}", color))?;

    Ok(Rgb([
        to_channel(color.red),
        to_channel(color.green),
        to_channel(color.blue),
    ]))
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0., 1.) * 255.).round() as u8
}
