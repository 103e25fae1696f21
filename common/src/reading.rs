//! Sensor line decoding and raw measurement conversions.
//!
//! The transmitter reports one reading per line as a decimal number of
//! meters with one fractional digit (`"0.4\r\n"`), every 60 ms. Lines that do
//! not decode to a finite number are dropped here, before classification.
//!
//! The conversions below mirror what the sensor side does with raw echo
//! captures, so recorded captures can be replayed through the same path.

use core::fmt::Write;

use heapless::String;

use crate::thresholds::{CM_PER_M, SOUND_CM_PER_US};

/// Maximum length of an encoded reading line.
pub const LINE_CAPACITY: usize = 16;

/// Decode one line of the serial feed into a distance in meters.
///
/// Surrounding whitespace (including `\r`) is ignored. Returns `None` for
/// empty lines, garbage, and non-finite values such as `NaN` or `inf`.
pub fn parse_line(line: &str) -> Option<f64> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|d| d.is_finite())
}

/// Encode a distance the way the transmitter writes it to the wire.
pub fn format_reading(distance: f64) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    let _ = write!(line, "{distance:.1}\r\n");
    line
}

/// Nearest obstacle of the two rear sensors, in meters.
///
/// Sensor frames carry whole centimeters, one byte per sensor.
#[inline]
pub fn nearest(
    sensor1_cm: u8,
    sensor2_cm: u8,
) -> f64 {
    f64::from(sensor1_cm.min(sensor2_cm)) / CM_PER_M
}

/// Echo pulse width between two 16-bit timer captures, in microseconds.
///
/// Handles a single counter wrap between the rising and falling edge.
#[inline]
pub const fn capture_interval(
    rising: u16,
    falling: u16,
) -> u32 {
    if falling > rising {
        (falling - rising) as u32
    } else {
        (u16::MAX - rising) as u32 + falling as u32
    }
}

/// Convert an echo pulse width to a distance in whole centimeters.
///
/// Sound travels to the obstacle and back, hence the halving. Distances past
/// the frame range saturate at 255 cm.
#[inline]
pub fn echo_to_cm(pulse_us: u32) -> u8 {
    // Float to int `as` saturates
    (pulse_us as f64 * SOUND_CM_PER_US / 2.0) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================
