use anyhow::Result;
use signal_fixtures::catalog::{self, OUTPUT_DIR};
use std::path::Path;
use tracing::{Level, info};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Generating test audio assets...");
    let written = catalog::generate_all(Path::new(OUTPUT_DIR))?;
    info!("Done: {} files", written.len());
    Ok(())
}
