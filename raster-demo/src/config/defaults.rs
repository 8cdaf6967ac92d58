//! All setting definitions with their default values.

/// A single setting definition.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

pub const RASTER_SOURCE: &str = "RASTER_SOURCE";
pub const RASTER_OUTPUT_DIR: &str = "RASTER_OUTPUT_DIR";
pub const RASTER_HEIGHT: &str = "RASTER_HEIGHT";
pub const RASTER_WIDTH: &str = "RASTER_WIDTH";
pub const RED_SHIFT: &str = "RED_SHIFT";
pub const CONTACT_SHEET: &str = "CONTACT_SHEET";
pub const CONTACT_SHEET_GAP: &str = "CONTACT_SHEET_GAP";

pub const SETTINGS: &[SettingDef] = &[
    SettingDef {
        key: RASTER_SOURCE,
        default: "crab.bmp",
        description: "Image file loaded as the source raster",
    },
    SettingDef {
        key: RASTER_OUTPUT_DIR,
        default: "output",
        description: "Directory receiving one PNG per filter result",
    },
    SettingDef {
        key: RASTER_HEIGHT,
        default: "128",
        description: "Expected source height in pixels",
    },
    SettingDef {
        key: RASTER_WIDTH,
        default: "128",
        description: "Expected source width in pixels",
    },
    SettingDef {
        key: RED_SHIFT,
        default: "100",
        description: "Amount added to the red channel by the red shift filter",
    },
    SettingDef {
        key: CONTACT_SHEET,
        default: "true",
        description: "Also write all results side by side into contact-sheet.png",
    },
    SettingDef {
        key: CONTACT_SHEET_GAP,
        default: "8",
        description: "Gap between contact sheet panels in pixels",
    },
];

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    SETTINGS.iter().find(|d| d.key == key).map(|d| d.default)
}
