//! Saturating conversion from real values to 8-bit samples.

/// Force a value into the sample range 0-255.
///
/// Values above 255 become 255, values below 0 become 0, and anything in
/// between is truncated toward zero. NaN maps to 0.
pub fn clamp(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_identity_in_range() {
        for v in 0..=255u8 {
            assert_eq!(clamp(f64::from(v)), v);
        }
    }

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(clamp(255.5), 255);
        assert_eq!(clamp(1e12), 255);
        assert_eq!(clamp(f64::INFINITY), 255);
        assert_eq!(clamp(-0.5), 0);
        assert_eq!(clamp(-1e12), 0);
        assert_eq!(clamp(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_clamp_truncates_fraction() {
        assert_eq!(clamp(12.9), 12);
        assert_eq!(clamp(254.999), 254);
    }

    #[test]
    fn test_clamp_nan_is_zero() {
        assert_eq!(clamp(f64::NAN), 0);
    }
}
