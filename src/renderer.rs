//! The drawing and export pipeline for the Tetris icon.

use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::canvas::Canvas;
use crate::export::write_ico;
use crate::icon::{ICON_SIZES, IconSet};
use crate::logo::{BACKGROUND, BACKGROUND_SHAPE, BLOCKS, CANVAS_SIZE};
use crate::Result;

/// Draws the logo and exports it as a multi-resolution icon.
///
/// Each step is a single linear pass:
///
/// 1. Allocate a 64x64 canvas filled with the background color.
/// 2. Draw the rounded background square over it.
/// 3. Draw every block group in order, later shapes on top.
/// 4. Resample to each of [`ICON_SIZES`] and encode the container.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconRenderer;

impl IconRenderer {
    /// Creates a renderer for the Tetris logo.
    pub fn new() -> Self {
        Self
    }

    /// Draws the logo onto a fresh canvas.
    pub fn draw(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(CANVAS_SIZE, BACKGROUND)?;
        canvas.fill_rounded_rect(&BACKGROUND_SHAPE)?;

        for group in &BLOCKS {
            for shape in group {
                canvas.fill_rounded_rect(shape)?;
            }
            debug!(group = group.name, shapes = group.len(), "drew block group");
        }
        Ok(canvas)
    }

    /// Draws the logo and returns the 64x64 source image.
    pub fn render(&self) -> Result<RgbaImage> {
        Ok(self.draw()?.to_rgba_image())
    }

    /// Renders the logo at every exported size.
    pub fn icon_set(&self) -> Result<IconSet> {
        let source = self.render()?;
        Ok(IconSet::from_source(&source, &ICON_SIZES))
    }

    /// Renders the logo and writes the icon container to `path`.
    pub fn export(&self, path: &Path) -> Result<IconSet> {
        let icons = self.icon_set()?;
        write_ico(&icons, path)?;
        Ok(icons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::{CYAN, I_BLOCK, O_BLOCK, PURPLE, T_BLOCK, YELLOW};
    use crate::shape::RoundedRect;

    fn pixel_at(img: &RgbaImage, (x, y): (u32, u32)) -> [u8; 4] {
        img.get_pixel(x, y).0
    }

    #[test]
    fn canvas_is_64_square() {
        let canvas = IconRenderer::new().draw().unwrap();
        assert_eq!((canvas.width(), canvas.height()), (64, 64));
    }

    #[test]
    fn background_corner_keeps_background_color() {
        let img = IconRenderer::new().render().unwrap();
        for corner in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            let px = pixel_at(&img, corner);
            for (got, want) in px.iter().zip([26u8, 26, 46, 255]) {
                assert!(got.abs_diff(want) <= 1, "corner {corner:?} is {px:?}");
            }
        }
        // Gap between blocks.
        assert_eq!(pixel_at(&img, (23, 15)), [26, 26, 46, 255]);
    }

    #[test]
    fn block_centers_match_fill() {
        let img = IconRenderer::new().render().unwrap();
        let first = |shapes: &[RoundedRect]| shapes[0];

        let t = first(T_BLOCK.shapes);
        assert_eq!(pixel_at(&img, t.center()), t.rgba());
        let i = first(I_BLOCK.shapes);
        assert_eq!(pixel_at(&img, i.center()), i.rgba());
        let o = first(O_BLOCK.shapes);
        assert_eq!(pixel_at(&img, o.center()), o.rgba());
    }

    #[test]
    fn uncovered_cell_centers_match_fill() {
        let img = IconRenderer::new().render().unwrap();
        let cells: Vec<RoundedRect> = BLOCKS.iter().flat_map(|g| g.iter().copied()).collect();

        let mut checked = 0;
        for (i, cell) in cells.iter().enumerate() {
            let (x, y) = cell.center();
            if cells[i + 1..].iter().any(|later| later.contains(x, y)) {
                continue;
            }
            assert_eq!(pixel_at(&img, (x, y)), cell.rgba(), "cell {cell:?}");
            checked += 1;
        }
        // Only the T stem center is painted over (by the second O cell).
        assert_eq!(checked, cells.len() - 1);
    }

    #[test]
    fn later_groups_overpaint_earlier_ones() {
        let img = IconRenderer::new().render().unwrap();
        let rgba = |c: palette::Srgba<u8>| {
            let (r, g, b, a) = c.into_components();
            [r, g, b, a]
        };

        // Third T cell (40..54) is clipped by the I block from x = 48.
        assert_eq!(pixel_at(&img, (44, 15)), rgba(PURPLE));
        assert_eq!(pixel_at(&img, (50, 15)), rgba(CYAN));
        // The T stem (24..38, 24..38) is covered by the O block from y = 28.
        assert_eq!(pixel_at(&img, (31, 25)), rgba(PURPLE));
        assert_eq!(pixel_at(&img, (31, 33)), rgba(YELLOW));
    }

    #[test]
    fn render_is_deterministic() {
        let renderer = IconRenderer::new();
        assert_eq!(renderer.render().unwrap(), renderer.render().unwrap());
    }

    #[test]
    fn icon_set_has_all_sizes() {
        let set = IconRenderer::default().icon_set().unwrap();
        assert_eq!(set.sizes(), ICON_SIZES.to_vec());
        let native = set.find_by_size(64).unwrap();
        assert_eq!(native.data, IconRenderer::new().render().unwrap());
    }
}
