//! Two-digit seven-segment readout.
//!
//! The receiver shows the nearest distance as `d.d` meters on a multiplexed
//! two-digit display. Out of range it shows two underscores instead.
//!
//! Segment bitmasks use `GFEDCBA` order: bit 0 is segment A (top), bit 6 is
//! segment G (middle).
//!
//! ```text
//!    AAA
//!   F   B
//!    GGG
//!   E   C
//!    DDD
//! ```

use crate::thresholds::CM_PER_M;
use crate::zones::{Zone, classify};

/// Segment encodings for digits 0-9.
pub const SEGMENT_DIGITS: [u8; 10] = [0x3f, 0x06, 0x5b, 0x4f, 0x66, 0x6d, 0x7d, 0x07, 0x7f, 0x67];

/// Bottom bar only, shown when nothing is in range.
pub const OUT_OF_RANGE: u8 = 0x08;

/// Segment masks in drawing order A..G.
pub const SEGMENT_A: u8 = 1 << 0;
pub const SEGMENT_B: u8 = 1 << 1;
pub const SEGMENT_C: u8 = 1 << 2;
pub const SEGMENT_D: u8 = 1 << 3;
pub const SEGMENT_E: u8 = 1 << 4;
pub const SEGMENT_F: u8 = 1 << 5;
pub const SEGMENT_G: u8 = 1 << 6;

/// Encoded state of the two-digit display.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SevenSegment {
    /// Segment bitmasks for the left and right digit.
    pub digits: [u8; 2],
    /// Decimal point after the left digit.
    pub decimal_point: bool,
}

impl SevenSegment {
    /// Display state for the out-of-range pattern.
    pub const BLANK: Self = Self {
        digits: [OUT_OF_RANGE, OUT_OF_RANGE],
        decimal_point: false,
    };

    /// Encode a distance in meters.
    ///
    /// The distance is rounded to whole centimeters (clamped to one frame
    /// byte); the left digit shows meters, the right digit tenths.
    pub fn for_distance(distance: f64) -> Self {
        if classify(distance) == Zone::None {
            return Self::BLANK;
        }

        // Negative distances saturate to 0 in the cast
        let cm = (distance * CM_PER_M + 0.5) as u8;
        Self {
            digits: [
                SEGMENT_DIGITS[usize::from((cm / 100) % 10)],
                SEGMENT_DIGITS[usize::from((cm / 10) % 10)],
            ],
            decimal_point: true,
        }
    }

    /// Whether this is the out-of-range pattern.
    #[inline]
    pub fn is_blank(&self) -> bool { *self == Self::BLANK }
}

/// Decode a segment mask back to its digit, if it is one.
pub fn digit_of(segments: u8) -> Option<u8> {
    SEGMENT_DIGITS
        .iter()
        .position(|&mask| mask == segments)
        .map(|d| d as u8)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_table_is_unique() {
        for (i, a) in SEGMENT_DIGITS.iter().enumerate() {
            for b in &SEGMENT_DIGITS[i + 1..] {
                assert_ne!(a, b, "two digits share a segment pattern");
            }
        }
    }

    #[test]
    fn test_eight_lights_everything() {
        assert_eq!(
            SEGMENT_DIGITS[8],
            SEGMENT_A | SEGMENT_B | SEGMENT_C | SEGMENT_D | SEGMENT_E | SEGMENT_F | SEGMENT_G
        );
    }

    #[test]
    fn test_for_distance_digits() {
        let seg = SevenSegment::for_distance(0.45);
        assert_eq!(digit_of(seg.digits[0]), Some(0));
        assert_eq!(digit_of(seg.digits[1]), Some(4));
        assert!(seg.decimal_point);

        let seg = SevenSegment::for_distance(1.25);
        assert_eq!(digit_of(seg.digits[0]), Some(1));
        assert_eq!(digit_of(seg.digits[1]), Some(2));
    }

    #[test]
    fn test_for_distance_rounds_to_centimeters() {
        // 0.7 is not exact in binary; it must still read 0.7
        let seg = SevenSegment::for_distance(0.7);
        assert_eq!(digit_of(seg.digits[1]), Some(7));
    }

    #[test]
    fn test_for_distance_out_of_range() {
        assert!(SevenSegment::for_distance(1.31).is_blank());
        assert!(SevenSegment::for_distance(5.0).is_blank());
        assert!(SevenSegment::for_distance(f64::NAN).is_blank());
        assert!(!SevenSegment::BLANK.decimal_point);
    }

    #[test]
    fn test_for_distance_at_limit() {
        let seg = SevenSegment::for_distance(1.3);
        assert!(!seg.is_blank());
        assert_eq!(digit_of(seg.digits[0]), Some(1));
        assert_eq!(digit_of(seg.digits[1]), Some(3));
    }

    #[test]
    fn test_for_distance_negative_reads_zero() {
        let seg = SevenSegment::for_distance(-0.2);
        assert_eq!(digit_of(seg.digits[0]), Some(0));
        assert_eq!(digit_of(seg.digits[1]), Some(0));
    }

    #[test]
    fn test_digit_of_rejects_non_digit() {
        assert_eq!(digit_of(OUT_OF_RANGE), None);
    }
}
