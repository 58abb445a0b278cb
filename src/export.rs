//! Windows `.ico` export.
//!
//! Each frame is stored PNG-compressed, which every ICO reader since
//! Windows Vista accepts and which keeps the 256x256 frame small.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use tracing::{debug, info};

use crate::icon::IconSet;
use crate::Result;

/// Encodes every frame of `icons` into an ICO container written to `writer`.
///
/// Frames keep the order of the set.
pub fn encode_ico<W: Write>(icons: &IconSet, writer: W) -> Result<()> {
    let mut frames = Vec::with_capacity(icons.len());
    for icon in icons {
        let (width, height) = icon.data.dimensions();
        frames.push(IcoFrame::as_png(
            icon.data.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        )?);
        debug!(width, height, "encoded icon frame");
    }

    IcoEncoder::new(writer).encode_images(&frames)?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the icon into it.
///
/// Missing parent directories are not created.
pub fn write_ico(icons: &IconSet, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode_ico(icons, &mut writer)?;
    writer.flush()?;

    info!(frames = icons.len(), "wrote icon to {}", path.display());
    Ok(())
}
