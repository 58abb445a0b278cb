//! The Tetris block logo: background, colors and block layout.
//!
//! Every value here is a literal. The logo is three tetromino groups drawn
//! over a dark rounded square; later shapes overpaint earlier ones where
//! they intersect (the I block clips the right end of the T block, and the
//! O block covers the lower half of the T stem).

use palette::Srgba;

use crate::shape::{RoundedRect, ShapeGroup};

/// Width and height of the source canvas.
pub const CANVAS_SIZE: u32 = 64;

/// Dark navy fill of the canvas and the rounded background square.
pub const BACKGROUND: Srgba<u8> = Srgba::new(26, 26, 46, 255);
/// Corner radius of the background square.
pub const BACKGROUND_RADIUS: u32 = 8;

/// Corner radius of every block cell.
pub const BLOCK_RADIUS: u32 = 2;

/// T block fill.
pub const PURPLE: Srgba<u8> = Srgba::new(155, 89, 182, 255);
/// I block fill.
pub const CYAN: Srgba<u8> = Srgba::new(0, 212, 255, 255);
/// O block fill.
pub const YELLOW: Srgba<u8> = Srgba::new(241, 196, 15, 255);

/// Full-canvas rounded square drawn before the blocks.
pub const BACKGROUND_SHAPE: RoundedRect =
    RoundedRect::new(0, 0, CANVAS_SIZE, CANVAS_SIZE, BACKGROUND_RADIUS, BACKGROUND);

const fn cell(x1: u32, y1: u32, x2: u32, y2: u32, fill: Srgba<u8>) -> RoundedRect {
    RoundedRect::new(x1, y1, x2, y2, BLOCK_RADIUS, fill)
}

/// Top bar of three cells with a stem below the middle one.
pub const T_BLOCK: ShapeGroup = ShapeGroup {
    name: "T block",
    shapes: &[
        cell(8, 8, 22, 22, PURPLE),
        cell(24, 8, 38, 22, PURPLE),
        cell(40, 8, 54, 22, PURPLE),
        cell(24, 24, 38, 38, PURPLE),
    ],
};

/// Vertical bar on the right edge.
pub const I_BLOCK: ShapeGroup = ShapeGroup {
    name: "I block",
    shapes: &[
        cell(48, 8, 62, 22, CYAN),
        cell(48, 24, 62, 38, CYAN),
        cell(48, 40, 62, 54, CYAN),
    ],
};

/// Two-by-two square in the lower left.
pub const O_BLOCK: ShapeGroup = ShapeGroup {
    name: "O block",
    shapes: &[
        cell(8, 28, 22, 42, YELLOW),
        cell(24, 28, 38, 42, YELLOW),
        cell(8, 44, 22, 58, YELLOW),
        cell(24, 44, 38, 58, YELLOW),
    ],
};

/// Block groups in draw order.
pub const BLOCKS: [ShapeGroup; 3] = [T_BLOCK, I_BLOCK, O_BLOCK];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_spans_canvas() {
        assert_eq!(BACKGROUND_SHAPE.width(), CANVAS_SIZE);
        assert_eq!(BACKGROUND_SHAPE.height(), CANVAS_SIZE);
        assert_eq!(BACKGROUND_SHAPE.fill, BACKGROUND);
    }

    #[test]
    fn blocks_fit_inside_canvas() {
        for group in &BLOCKS {
            for shape in group {
                assert!(!shape.is_empty(), "{} has an empty cell", group.name);
                assert!(shape.x2 <= CANVAS_SIZE && shape.y2 <= CANVAS_SIZE);
                assert_eq!(shape.radius, BLOCK_RADIUS);
            }
        }
    }

    #[test]
    fn group_sizes_and_colors() {
        assert_eq!(T_BLOCK.len(), 4);
        assert_eq!(I_BLOCK.len(), 3);
        assert_eq!(O_BLOCK.len(), 4);
        assert!(T_BLOCK.iter().all(|s| s.fill == PURPLE));
        assert!(I_BLOCK.iter().all(|s| s.fill == CYAN));
        assert!(O_BLOCK.iter().all(|s| s.fill == YELLOW));
    }

    #[test]
    fn cells_are_fourteen_pixels_square() {
        for shape in BLOCKS.iter().flat_map(|g| g.iter()) {
            assert_eq!((shape.width(), shape.height()), (14, 14));
        }
    }
}
