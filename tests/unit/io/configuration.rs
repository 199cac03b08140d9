//! Tests for engine constants and defaults

#[cfg(test)]
mod tests {
    use op_art::io::configuration::{
        DEFAULT_BASE_SIZE, ERROR_DISPLAY_TIME, GOLDEN_ANGLE_DEGREES, JPEG_QUALITY,
        MUTATION_AMPLITUDE_RANGE, MUTATION_COMPLEXITY_RANGE, PIXELS_PER_UNIT,
        RANDOM_AMPLITUDE_RANGE, RANDOM_COMPLEXITY_RANGE, RASTER_OVERSAMPLE, RASTER_SCALE_FACTOR, SUCCESS_DISPLAY_TIME,
    };

    // Tests display and export scaling constants
    // Verified by changing the oversample factor
    #[test]
    fn test_scaling_constants() {
        assert!((PIXELS_PER_UNIT - 3.78).abs() < f64::EPSILON);
        assert_eq!(RASTER_SCALE_FACTOR * RASTER_OVERSAMPLE, 8);
        assert_eq!(JPEG_QUALITY, 95);
        assert!((DEFAULT_BASE_SIZE - 350.0).abs() < f64::EPSILON);
    }

    // Tests the golden angle matches 180 * (3 - sqrt(5))
    // Verified by truncating the constant
    #[test]
    fn test_golden_angle() {
        let expected = 180.0 * (3.0 - 5.0_f64.sqrt());
        assert!((GOLDEN_ANGLE_DEGREES - expected).abs() < 1e-9);
    }

    // Tests ranges are ordered
    // Verified by swapping range bounds
    #[test]
    fn test_ranges_ordered() {
        assert!(RANDOM_COMPLEXITY_RANGE.0 < RANDOM_COMPLEXITY_RANGE.1);
        assert!(MUTATION_COMPLEXITY_RANGE.0 < MUTATION_COMPLEXITY_RANGE.1);
        assert!(MUTATION_AMPLITUDE_RANGE.0 < MUTATION_AMPLITUDE_RANGE.1);
        assert!(SUCCESS_DISPLAY_TIME < ERROR_DISPLAY_TIME);
    }

    // Tests amplitude ranges admit mirrored displacement
    // Verified by starting the ranges at zero
    #[test]
    fn test_amplitude_ranges_symmetric() {
        assert!((RANDOM_AMPLITUDE_RANGE.0 + RANDOM_AMPLITUDE_RANGE.1).abs() < f64::EPSILON);
        assert!((MUTATION_AMPLITUDE_RANGE.0 + 1000.0).abs() < f64::EPSILON);
        assert!((MUTATION_AMPLITUDE_RANGE.0 + MUTATION_AMPLITUDE_RANGE.1).abs() < f64::EPSILON);
    }
}
