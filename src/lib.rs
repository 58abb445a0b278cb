//! tetris-icon: draws the Tetris block logo and exports it as a `.ico`.
//!
//! The logo is a fixed 64x64 drawing: a dark rounded square with a T, an I
//! and an O tetromino made of rounded cells. [`IconRenderer`] draws it and
//! writes a Windows icon container embedding 16, 32, 48, 64 and 256 pixel
//! frames, each resampled from the same source.
//!
//! # Example
//!
//! ```
//! use tetris_icon::{ICON_SIZES, IconRenderer};
//!
//! let renderer = IconRenderer::new();
//! let source = renderer.render().unwrap();
//! assert_eq!(source.dimensions(), (64, 64));
//!
//! let icons = renderer.icon_set().unwrap();
//! assert_eq!(icons.sizes(), ICON_SIZES.to_vec());
//!
//! let mut ico = Vec::new();
//! tetris_icon::encode_ico(&icons, &mut ico).unwrap();
//! ```

mod canvas;
mod error;
mod export;
mod icon;
pub mod logo;
mod renderer;
mod shape;

pub use canvas::Canvas;
pub use error::IconError;
pub use export::{encode_ico, write_ico};
pub use icon::{ICON_SIZES, IconImage, IconSet};
pub use renderer::IconRenderer;
pub use shape::{RoundedRect, ShapeGroup};

/// Convenience result type for the crate.
pub type Result<T> = std::result::Result<T, IconError>;
