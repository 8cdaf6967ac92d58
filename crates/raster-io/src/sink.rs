//! Display sinks for labelled rasters.
//!
//! A sink receives each filter result with a human-readable label.
//! [`PngDirectorySink`] writes every raster to its own PNG file, while
//! [`ContactSheet`] lays all rasters out left-to-right in a single image.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use raster_filters::Raster;
use tracing::{debug, info};

use crate::DisplayError;
use crate::convert::to_rgb_image;

/// Background colour between and below contact sheet panels.
const SHEET_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Default gap between contact sheet panels, in pixels.
pub const DEFAULT_GAP: u32 = 8;

/// Something that can show a raster under a label.
pub trait RasterSink {
    fn display(&mut self, raster: &Raster, label: &str) -> Result<(), DisplayError>;
}

/// Writes each displayed raster to `<dir>/<label>.png`.
///
/// Labels that reduce to the same file name get a numeric suffix instead of
/// overwriting each other.
#[derive(Debug, Clone)]
pub struct PngDirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Files written so far, in display order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// `<dir>/<stem>.png`, or `<stem>-2.png`, `<stem>-3.png`, ... when an
    /// earlier label already produced that file.
    fn unique_path(&self, stem: &str) -> PathBuf {
        let mut path = self.dir.join(format!("{stem}.png"));
        let mut n = 2;
        while self.written.contains(&path) {
            path = self.dir.join(format!("{stem}-{n}.png"));
            n += 1;
        }
        path
    }
}

impl RasterSink for PngDirectorySink {
    fn display(&mut self, raster: &Raster, label: &str) -> Result<(), DisplayError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.unique_path(&slugify(label));

        to_rgb_image(raster)?.save_with_format(&path, ImageFormat::Png)?;
        info!(label, "Wrote raster to {}", path.display());

        self.written.push(path);
        Ok(())
    }
}

/// Collects rasters and renders them side by side, like a horizontal layout.
#[derive(Debug, Clone)]
pub struct ContactSheet {
    gap: u32,
    panels: Vec<(String, RgbImage)>,
}

impl Default for ContactSheet {
    fn default() -> Self {
        Self::new(DEFAULT_GAP)
    }
}

impl ContactSheet {
    pub fn new(gap: u32) -> Self {
        Self {
            gap,
            panels: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Panel labels in display order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(|(label, _)| label.as_str())
    }

    /// Lay out all panels left-to-right, top-aligned.
    ///
    /// The output height is the tallest panel; shorter panels leave the
    /// background showing beneath them. An empty sheet renders as a single
    /// white pixel. Fails with [`DisplayError::SheetTooWide`] when the panel
    /// widths plus gaps do not fit in `u32`.
    pub fn render(&self) -> Result<RgbImage, DisplayError> {
        if self.panels.is_empty() {
            return Ok(RgbImage::from_pixel(1, 1, SHEET_BACKGROUND));
        }

        let too_wide = || DisplayError::SheetTooWide {
            panels: self.panels.len(),
            gap: self.gap,
        };
        let gaps = u32::try_from(self.panels.len() - 1)
            .ok()
            .and_then(|n| n.checked_mul(self.gap))
            .ok_or_else(too_wide)?;
        let total_width = self
            .panels
            .iter()
            .try_fold(gaps, |acc, (_, p)| acc.checked_add(p.width()))
            .ok_or_else(too_wide)?;
        let max_height = self
            .panels
            .iter()
            .map(|(_, p)| p.height())
            .max()
            .unwrap_or(1);
        debug!(
            panels = self.panels.len(),
            total_width, max_height, "Rendering contact sheet"
        );

        let mut sheet = RgbImage::from_pixel(total_width, max_height, SHEET_BACKGROUND);
        let mut x_offset = 0u32;
        for (_, panel) in &self.panels {
            for (x, y, pixel) in panel.enumerate_pixels() {
                sheet.put_pixel(x_offset + x, y, *pixel);
            }
            // Saturates only after the last panel has been placed
            x_offset = x_offset.saturating_add(panel.width()).saturating_add(self.gap);
        }
        Ok(sheet)
    }

    /// Render and write the sheet as a PNG file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DisplayError> {
        if self.panels.is_empty() {
            return Err(DisplayError::Empty);
        }
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.render()?.save_with_format(path, ImageFormat::Png)?;
        info!(
            panels = self.panels.len(),
            "Wrote contact sheet to {}",
            path.display()
        );
        Ok(())
    }
}

impl RasterSink for ContactSheet {
    fn display(&mut self, raster: &Raster, label: &str) -> Result<(), DisplayError> {
        let panel = to_rgb_image(raster)?;
        debug!(label, width = panel.width(), height = panel.height(), "Added panel");
        self.panels.push((label.to_owned(), panel));
        Ok(())
    }
}

/// Turn a label into a lowercase file stem.
///
/// ASCII alphanumerics are kept; every other run of characters becomes a
/// single `-`. Labels with nothing usable become `raster`.
fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("raster");
    }
    slug
}
