//! A small RGB drawing surface
//!
//! Shapes are rasterized directly against an [`RgbImage`] with hard edges and no
//! blending, so the output is fully deterministic. Coordinates follow image
//! conventions: the origin is the top-left pixel and `y` grows downwards.

use image::{Rgb, RgbImage};

/// Inclusive bounding box `[x0, y0, x1, y1]` of an ellipse.
pub type BoundingBox = [i32; 4];

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas where every pixel starts as `background`.
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Fill the disc of `radius` around `center` with a linear blend from `inner`
    /// (at the center) to `outer` (at the rim). Pixels outside the disc are left
    /// untouched, which leaves a visible seam against the background.
    pub fn radial_gradient(
        &mut self,
        center: (f64, f64),
        radius: f64,
        inner: Rgb<u8>,
        outer: Rgb<u8>,
    ) {
        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            let dx = x as f64 - center.0;
            let dy = y as f64 - center.1;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance <= radius {
                let ratio = distance / radius;
                *pixel = Rgb([
                    blend(inner[0], outer[0], ratio),
                    blend(inner[1], outer[1], ratio),
                    blend(inner[2], outer[2], ratio),
                ]);
            }
        }
    }

    /// Draw an ellipse inscribed in `bbox`.
    ///
    /// With both `fill` and `outline`, the interior is filled first and the ring
    /// of `width` pixels along the edge is painted with the outline color.
    pub fn ellipse(
        &mut self,
        bbox: BoundingBox,
        fill: Option<Rgb<u8>>,
        outline: Option<Rgb<u8>>,
        width: u32,
    ) {
        let shape = Ellipse::from_bbox(bbox);
        let ring = if outline.is_some() { width as f64 } else { 0.0 };
        let [x0, y0, x1, y1] = bbox;

        for y in y0..=y1 {
            for x in x0..=x1 {
                if !shape.contains(x, y, 0.0) {
                    continue;
                }
                let color = if shape.contains(x, y, ring) {
                    fill
                } else {
                    outline
                };
                if let Some(color) = color {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Draw a straight segment from `from` to `to` that is `width` pixels thick.
    ///
    /// A pixel is covered when it projects onto the segment and its signed distance
    /// from it lies in `[-width/2, width/2)`, so axis-aligned lines are exactly
    /// `width` pixels thick.
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgb<u8>, width: u32) {
        let dx = (to.0 - from.0) as i64;
        let dy = (to.1 - from.1) as i64;
        let length_sq = dx * dx + dy * dy;

        if length_sq == 0 {
            self.put(from.0, from.1, color);
            return;
        }

        // `across` below is the distance to the line scaled by the segment length.
        let half = width as f64 / 2.0 * (length_sq as f64).sqrt();
        let pad = width as i32 / 2 + 1;

        for y in from.1.min(to.1) - pad..=from.1.max(to.1) + pad {
            for x in from.0.min(to.0) - pad..=from.0.max(to.0) + pad {
                let vx = (x - from.0) as i64;
                let vy = (y - from.1) as i64;

                let along = vx * dx + vy * dy;
                if along < 0 || along > length_sq {
                    continue;
                }

                let across = (dx * vy - dy * vx) as f64;
                if -half <= across && across < half {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x < 0 || y < 0 || x as u32 >= self.image.width() || y as u32 >= self.image.height() {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color);
    }
}

struct Ellipse {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    fn from_bbox([x0, y0, x1, y1]: BoundingBox) -> Self {
        Self {
            cx: (x0 + x1) as f64 / 2.0,
            cy: (y0 + y1) as f64 / 2.0,
            rx: (x1 - x0) as f64 / 2.0,
            ry: (y1 - y0) as f64 / 2.0,
        }
    }

    /// Whether the pixel lies inside this ellipse with both radii reduced by `inset`.
    fn contains(&self, x: i32, y: i32, inset: f64) -> bool {
        let rx = self.rx - inset;
        let ry = self.ry - inset;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }

        let nx = (x as f64 - self.cx) / rx;
        let ny = (y as f64 - self.cy) / ry;
        nx * nx + ny * ny <= 1.0
    }
}

// Truncates like an integer cast of the blended value.
fn blend(inner: u8, outer: u8, ratio: f64) -> u8 {
    (inner as f64 * (1.0 - ratio) + outer as f64 * ratio) as u8
}
