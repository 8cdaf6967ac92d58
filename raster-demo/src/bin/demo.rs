//! Filter demo binary.
//!
//! Usage: `raster-demo [SOURCE]`. Settings come from the environment or a
//! `.env` file; a positional argument overrides `RASTER_SOURCE`.

use raster_demo_lib::{DemoConfig, bootstrap};

fn main() -> anyhow::Result<()> {
    bootstrap::init_tracing();
    bootstrap::load_dotenv();

    let mut config = DemoConfig::load()?;
    if let Some(source) = std::env::args_os().nth(1) {
        config.source = source.into();
    }
    tracing::info!(?config, "Starting raster filter demo");

    let summary = raster_demo_lib::run(&config)?;

    tracing::info!(
        panels = summary.panels.len(),
        files = summary.files.len(),
        "Wrote filter results to {}",
        config.output_dir.display()
    );
    if let Some(sheet) = &summary.contact_sheet {
        tracing::info!("Contact sheet: {}", sheet.display());
    }
    Ok(())
}
