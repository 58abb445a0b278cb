//! Shape primitives drawn onto the icon canvas.

use palette::Srgba;

/// A filled rectangle whose corners are circular arcs.
///
/// Bounds are half-open: `(x1, y1)` is the first covered pixel and
/// `(x2, y2)` lies one past the last one, so the shape covers
/// `(x2 - x1) × (y2 - y1)` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    /// Left edge (inclusive).
    pub x1: u32,
    /// Top edge (inclusive).
    pub y1: u32,
    /// Right edge (exclusive).
    pub x2: u32,
    /// Bottom edge (exclusive).
    pub y2: u32,
    /// Corner radius in pixels.
    pub radius: u32,
    /// Fill color, straight (non-premultiplied) alpha.
    pub fill: Srgba<u8>,
}

impl RoundedRect {
    /// Creates a rounded rectangle from its corners, radius and fill.
    pub const fn new(x1: u32, y1: u32, x2: u32, y2: u32, radius: u32, fill: Srgba<u8>) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            radius,
            fill,
        }
    }

    /// Number of covered columns.
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Number of covered rows.
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Returns true if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Pixel at the middle of the covered region.
    pub fn center(&self) -> (u32, u32) {
        ((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Returns true if the pixel lies inside the bounding box.
    ///
    /// Corner rounding is ignored.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x1..self.x2).contains(&x) && (self.y1..self.y2).contains(&y)
    }

    /// The fill color as raw `[r, g, b, a]` channels.
    pub fn rgba(&self) -> [u8; 4] {
        let (r, g, b, a) = self.fill.into_components();
        [r, g, b, a]
    }
}

/// A named collection of shapes drawn in order.
///
/// The name only exists for readability and logging; grouping has no effect
/// on the rendered output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeGroup {
    /// Human-readable label, e.g. "T block".
    pub name: &'static str,
    /// Shapes in draw order.
    pub shapes: &'static [RoundedRect],
}

impl ShapeGroup {
    /// Returns the number of shapes in the group.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the group has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns an iterator over the shapes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &RoundedRect> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a ShapeGroup {
    type Item = &'a RoundedRect;
    type IntoIter = std::slice::Iter<'a, RoundedRect>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
