//! Setting value validation.

use super::defaults::{
    CONTACT_SHEET, CONTACT_SHEET_GAP, RASTER_HEIGHT, RASTER_OUTPUT_DIR, RASTER_SOURCE,
    RASTER_WIDTH, RED_SHIFT,
};

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        RASTER_SOURCE | RASTER_OUTPUT_DIR => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        RASTER_HEIGHT | RASTER_WIDTH => validate_int_range(value, 1, 4096)?,
        RED_SHIFT => validate_int_range(value, -255, 255)?,
        CONTACT_SHEET_GAP => validate_int_range(value, 0, 256)?,
        CONTACT_SHEET => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i32, max: i32) -> Result<(), String> {
    let v: i32 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_boolean() {
        assert!(validate_setting(CONTACT_SHEET, "true").is_ok());
        assert!(validate_setting(CONTACT_SHEET, "false").is_ok());
        assert!(validate_setting(CONTACT_SHEET, "yes").is_err());
    }

    #[test]
    fn test_dimension_range() {
        assert!(validate_setting(RASTER_HEIGHT, "1").is_ok());
        assert!(validate_setting(RASTER_WIDTH, "4096").is_ok());
        assert!(validate_setting(RASTER_HEIGHT, "0").is_err());
        assert!(validate_setting(RASTER_WIDTH, "4097").is_err());
        assert!(validate_setting(RASTER_WIDTH, "wide").is_err());
    }

    #[test]
    fn test_red_shift_range() {
        assert!(validate_setting(RED_SHIFT, "-255").is_ok());
        assert!(validate_setting(RED_SHIFT, "0").is_ok());
        assert_eq!(
            validate_setting(RED_SHIFT, "300"),
            Err("must be between -255 and 255".into())
        );
    }

    #[test]
    fn test_paths_must_not_be_empty() {
        assert!(validate_setting(RASTER_SOURCE, "crab.bmp").is_ok());
        assert!(validate_setting(RASTER_OUTPUT_DIR, "  ").is_err());
    }

    #[test]
    fn test_unknown_key_passes() {
        assert!(validate_setting("SOMETHING_ELSE", "anything").is_ok());
    }
}
