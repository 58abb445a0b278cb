//! Fixed-size RGBA raster the logo is drawn onto.
//!
//! Drawing goes through `tiny_skia` (re-exported by `resvg`), which keeps
//! pixels premultiplied. [`Canvas::to_rgba_image`] converts back to straight
//! alpha for resampling and encoding.

use image::{Rgba, RgbaImage};
use palette::Srgba;
use resvg::tiny_skia::{
    Color, FillRule, Paint, Path, PathBuilder, Pixmap, PremultipliedColorU8, Transform,
};
use tracing::trace;

use crate::error::IconError;
use crate::shape::RoundedRect;
use crate::Result;

/// Control-point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// An in-memory square raster initialized to a solid color.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a `size × size` canvas filled with `background`.
    pub fn new(size: u32, background: Srgba<u8>) -> Result<Self> {
        let mut pixmap = Pixmap::new(size, size).ok_or(IconError::CanvasAllocation {
            width: size,
            height: size,
        })?;
        pixmap.fill(skia_color(background));
        Ok(Self { pixmap })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Returns the straight-alpha color at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        // Pixmap::pixel indexes the flat buffer, so x == width wraps to the next row.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(unpremultiply)
    }

    /// Fills an anti-aliased rounded rectangle over the current content.
    pub fn fill_rounded_rect(&mut self, shape: &RoundedRect) -> Result<()> {
        let path = rounded_rect_path(shape)?;

        let mut paint = Paint::default();
        paint.set_color(skia_color(shape.fill));
        paint.anti_alias = true;

        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        trace!(
            x1 = shape.x1,
            y1 = shape.y1,
            x2 = shape.x2,
            y2 = shape.y2,
            "filled rounded rect"
        );
        Ok(())
    }

    /// Copies the canvas into a straight-alpha [`RgbaImage`].
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width(), self.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            *dst = unpremultiply(*src);
        }
        img
    }
}

fn skia_color(color: Srgba<u8>) -> Color {
    let (r, g, b, a) = color.into_components();
    Color::from_rgba8(r, g, b, a)
}

/// Builds the outline of a rounded rectangle in pixel-edge coordinates.
///
/// The radius is clamped to half of the shorter side.
fn rounded_rect_path(shape: &RoundedRect) -> Result<Path> {
    let invalid = || IconError::InvalidShape {
        x1: shape.x1,
        y1: shape.y1,
        x2: shape.x2,
        y2: shape.y2,
    };
    if shape.is_empty() {
        return Err(invalid());
    }

    let (left, top) = (shape.x1 as f32, shape.y1 as f32);
    let (right, bottom) = (shape.x2 as f32, shape.y2 as f32);
    let radius = (shape.radius as f32).min((right - left).min(bottom - top) / 2.0);
    // Offset of each Bézier control point from its corner.
    let c = radius * (1.0 - KAPPA);

    let mut pb = PathBuilder::new();
    pb.move_to(left + radius, top);
    pb.line_to(right - radius, top);
    pb.cubic_to(right - c, top, right, top + c, right, top + radius);
    pb.line_to(right, bottom - radius);
    pb.cubic_to(right, bottom - c, right - c, bottom, right - radius, bottom);
    pb.line_to(left + radius, bottom);
    pb.cubic_to(left + c, bottom, left, bottom - c, left, bottom - radius);
    pb.line_to(left, top + radius);
    pb.cubic_to(left, top + c, left + c, top, left + radius, top);
    pb.close();
    pb.finish().ok_or_else(invalid)
}

/// Unpremultiplies a premultiplied pixel.
fn unpremultiply(pixel: PremultipliedColorU8) -> Rgba<u8> {
    let a = pixel.alpha();
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let a_f = a as f32 / 255.0;
    let channel = |v: u8| (v as f32 / a_f).round().min(255.0) as u8;
    Rgba([
        channel(pixel.red()),
        channel(pixel.green()),
        channel(pixel.blue()),
        a,
    ])
}
