//! Centralized distance threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions.
//! Zone classification, the LED bar and the buzzer cadence all read from
//! here so the gauge and the receiver behaviour never drift apart.
//!
//! # Compile-Time Validation
//!
//! The zone boundaries carry `const` assertions that verify ascending order
//! at compile time. If a boundary is edited out of order, compilation fails.
//!
//! # Usage
//!
//! ```ignore
//! use radar_common::thresholds::{RED_FULL_MAX, GREEN_MAX};
//! ```

// =============================================================================
// Zone Boundaries (inclusive upper bounds, meters)
// =============================================================================

/// Upper bound of the critical zone (<=0.3 m = all red, continuous tone).
pub const RED_FULL_MAX: f64 = 0.3;

/// Upper bound of the red zone (0.3-0.5 m).
pub const RED_MAX: f64 = 0.5;

/// Upper bound of the full yellow zone (0.5-0.7 m).
pub const YELLOW_FULL_MAX: f64 = 0.7;

/// Upper bound of the yellow zone (0.7-0.9 m).
pub const YELLOW_MAX: f64 = 0.9;

/// Upper bound of the full green zone (0.9-1.1 m).
pub const GREEN_FULL_MAX: f64 = 1.1;

/// Upper bound of the green zone (1.1-1.3 m).
/// Anything farther is out of range and shows no warning.
pub const GREEN_MAX: f64 = 1.3;

const _: () = assert!(RED_FULL_MAX < RED_MAX);
const _: () = assert!(RED_MAX < YELLOW_FULL_MAX);
const _: () = assert!(YELLOW_FULL_MAX < YELLOW_MAX);
const _: () = assert!(YELLOW_MAX < GREEN_FULL_MAX);
const _: () = assert!(GREEN_FULL_MAX < GREEN_MAX);

// =============================================================================
// Buzzer Cadence (toggle period per zone, milliseconds)
// =============================================================================

/// Beep toggle period in the red zone.
pub const BEEP_RED_MS: u16 = 50;

/// Beep toggle period in the full yellow zone.
pub const BEEP_YELLOW_FULL_MS: u16 = 100;

/// Beep toggle period in the yellow zone.
pub const BEEP_YELLOW_MS: u16 = 300;

/// Beep toggle period in the full green zone.
pub const BEEP_GREEN_FULL_MS: u16 = 400;

/// Beep toggle period in the green zone.
pub const BEEP_GREEN_MS: u16 = 600;

// Closer means faster beeping
const _: () = assert!(BEEP_RED_MS < BEEP_YELLOW_FULL_MS);
const _: () = assert!(BEEP_YELLOW_FULL_MS < BEEP_YELLOW_MS);
const _: () = assert!(BEEP_YELLOW_MS < BEEP_GREEN_FULL_MS);
const _: () = assert!(BEEP_GREEN_FULL_MS < BEEP_GREEN_MS);

// =============================================================================
// Ultrasonic Sensor Constants
// =============================================================================

/// Speed of sound in centimeters per microsecond (343 m/s).
pub const SOUND_CM_PER_US: f64 = 0.034;

/// Centimeters per meter. Sensor frames carry whole centimeters.
pub const CM_PER_M: f64 = 100.0;

/// Largest distance a single sensor frame byte can carry, in centimeters.
pub const MAX_FRAME_CM: u8 = u8::MAX;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::assertions_on_constants)] // Intentional check of threshold ordering
mod tests {
    use super::*;

    #[test]
    fn test_zone_boundary_ordering() {
        assert!(RED_FULL_MAX < RED_MAX);
        assert!(RED_MAX < YELLOW_FULL_MAX);
        assert!(YELLOW_FULL_MAX < YELLOW_MAX);
        assert!(YELLOW_MAX < GREEN_FULL_MAX);
        assert!(GREEN_FULL_MAX < GREEN_MAX);
    }

    #[test]
    fn test_zone_boundaries_evenly_spaced() {
        // Every band past the critical one is 20 cm wide
        let bands = [
            RED_MAX - RED_FULL_MAX,
            YELLOW_FULL_MAX - RED_MAX,
            YELLOW_MAX - YELLOW_FULL_MAX,
            GREEN_FULL_MAX - YELLOW_MAX,
            GREEN_MAX - GREEN_FULL_MAX,
        ];
        for band in bands {
            assert!((band - 0.2).abs() < 1e-5, "band width {band} should be 0.2 m");
        }
    }

    #[test]
    fn test_beep_cadence_ordering() {
        assert!(BEEP_RED_MS < BEEP_YELLOW_FULL_MS);
        assert!(BEEP_YELLOW_FULL_MS < BEEP_YELLOW_MS);
        assert!(BEEP_YELLOW_MS < BEEP_GREEN_FULL_MS);
        assert!(BEEP_GREEN_FULL_MS < BEEP_GREEN_MS);
    }

    #[test]
    fn test_max_frame_covers_range() {
        // A single byte must be able to carry every warning distance
        assert!(f64::from(MAX_FRAME_CM) / CM_PER_M > GREEN_MAX);
    }
}
