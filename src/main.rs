use std::path::Path;

use tetris_icon::{IconError, IconRenderer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Where the packaging step picks the icon up, relative to the working directory.
const OUTPUT_PATH: &str = "../resources/tetris.ico";

fn main() -> Result<(), IconError> {
    // Diagnostics go to stderr; stdout only carries the completion line.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    info!("Rendering Tetris icon");
    let icons = IconRenderer::new().export(Path::new(OUTPUT_PATH))?;
    info!(sizes = ?icons.sizes(), "icon exported");

    println!("Icon created successfully!");
    Ok(())
}
