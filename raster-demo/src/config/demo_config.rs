//! Runtime configuration loaded from defaults + environment overrides.

use std::path::PathBuf;

use raster_filters::{Dimensions, RasterError};

use super::defaults::{
    self, CONTACT_SHEET, CONTACT_SHEET_GAP, RASTER_HEIGHT, RASTER_OUTPUT_DIR, RASTER_SOURCE,
    RASTER_WIDTH, RED_SHIFT,
};
use super::validation::validate_setting;

/// Runtime configuration for one demo run.
///
/// Defaults come from [`defaults::SETTINGS`]; use `from_lookup(|_| None)`
/// for an all-defaults config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub height: usize,
    pub width: usize,
    pub red_shift: i32,
    pub contact_sheet: bool,
    pub contact_sheet_gap: u32,
}

impl DemoConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults.
    ///
    /// Every value is validated before parsing; the first invalid value
    /// aborts loading with the offending key in the message.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> Result<String, anyhow::Error> {
            let value = lookup(key)
                .filter(|v| !v.is_empty())
                .or_else(|| defaults::get_default(key).map(str::to_owned))
                .unwrap_or_default();
            validate_setting(key, &value).map_err(|e| anyhow::anyhow!("{key}: {e}"))?;
            Ok(value)
        };

        Ok(Self {
            source: PathBuf::from(g(RASTER_SOURCE)?),
            output_dir: PathBuf::from(g(RASTER_OUTPUT_DIR)?),
            height: g(RASTER_HEIGHT)?.parse()?,
            width: g(RASTER_WIDTH)?.parse()?,
            red_shift: g(RED_SHIFT)?.parse()?,
            contact_sheet: g(CONTACT_SHEET)? == "true",
            contact_sheet_gap: g(CONTACT_SHEET_GAP)?.parse()?,
        })
    }

    /// Expected source raster dimensions.
    pub fn dimensions(&self) -> Result<Dimensions, RasterError> {
        Dimensions::new(self.height, self.width)
    }
}
