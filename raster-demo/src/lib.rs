//! Raster filter demo: load a source image, run every filter, and write the
//! labelled results out as PNG files and a side-by-side contact sheet.

pub mod bootstrap;
pub mod config;
pub mod pipeline;

use std::path::PathBuf;

use raster_io::{ContactSheet, PngDirectorySink, RasterSink};

pub use config::DemoConfig;
pub use pipeline::{Panel, display_all, run_pipeline};

/// File name of the contact sheet inside the output directory.
pub const CONTACT_SHEET_FILE: &str = "contact-sheet.png";

/// Files produced by one demo run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub panels: Vec<&'static str>,
    pub files: Vec<PathBuf>,
    pub contact_sheet: Option<PathBuf>,
}

/// Decode the configured source, run the pipeline, and display every result.
pub fn run(config: &DemoConfig) -> Result<RunSummary, anyhow::Error> {
    let source = raster_io::decode(&config.source, config.dimensions()?)?;
    let panels = run_pipeline(&source, config.red_shift)?;

    let mut files = PngDirectorySink::new(&config.output_dir);
    let mut sheet = ContactSheet::new(config.contact_sheet_gap);
    let mut sinks: Vec<&mut dyn RasterSink> = vec![&mut files];
    if config.contact_sheet {
        sinks.push(&mut sheet);
    }
    display_all(&panels, &mut sinks)?;

    let contact_sheet = if config.contact_sheet {
        let path = config.output_dir.join(CONTACT_SHEET_FILE);
        sheet.save(&path)?;
        Some(path)
    } else {
        None
    };

    Ok(RunSummary {
        panels: panels.iter().map(|p| p.label).collect(),
        files: files.written().to_vec(),
        contact_sheet,
    })
}
