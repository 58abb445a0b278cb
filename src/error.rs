use thiserror::Error;

/// Errors raised while drawing or exporting the icon.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to allocate a {width}×{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    #[error("invalid rounded rectangle ({x1}, {y1})-({x2}, {y2}): corners must enclose at least one pixel")]
    InvalidShape { x1: u32, y1: u32, x2: u32, y2: u32 },

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
