//! Gauge layout and tracking configuration constants.
//!
//! Layout positions are computed at compile time so drawing code never does
//! per-frame arithmetic for fixed geometry.

// =============================================================================
// Display Configuration
// =============================================================================

/// Gauge surface width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Gauge surface height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

// =============================================================================
// Indicator Bars
// =============================================================================

/// Width of one indicator bar.
pub const BAR_WIDTH: u32 = 56;

/// Height of one indicator bar.
pub const BAR_HEIGHT: u32 = 16;

/// Vertical distance between the tops of two consecutive bars.
pub const BAR_PITCH: u32 = 22;

/// Top of the first (farthest, green) bar.
pub const BARS_TOP: u32 = HEADER_HEIGHT + 14;

/// Left edge of the left bar column.
pub const BARS_LEFT_X: u32 = 10;

/// Left edge of the right bar column.
pub const BARS_RIGHT_X: u32 = SCREEN_WIDTH - BARS_LEFT_X - BAR_WIDTH;

/// Bars per color group on each side.
pub const BARS_PER_GROUP: u32 = 2;

// =============================================================================
// Readout
// =============================================================================

/// Width of one seven-segment digit.
pub const DIGIT_WIDTH: u32 = 40;

/// Height of one seven-segment digit.
pub const DIGIT_HEIGHT: u32 = 72;

/// Segment stroke thickness.
pub const SEGMENT_THICKNESS: u32 = 7;

/// Gap between the two digits (holds the decimal point).
pub const DIGIT_GAP: u32 = 18;

/// Top of the digit block.
pub const DIGITS_TOP: i32 = HEADER_HEIGHT as i32 + 20;

/// Left edge of the left digit (block centered horizontally).
pub const DIGITS_LEFT: i32 = CENTER_X - (DIGIT_WIDTH + DIGIT_GAP / 2) as i32;

/// Baseline of the text readout under the digits.
pub const READOUT_TEXT_Y: i32 = DIGITS_TOP + DIGIT_HEIGHT as i32 + 26;

/// Buzzer lamp center.
pub const LAMP_CENTER_Y: i32 = READOUT_TEXT_Y + 14;

/// Buzzer lamp diameter.
pub const LAMP_DIAMETER: u32 = 10;

// =============================================================================
// Status Strip
// =============================================================================

/// Top of the status strip at the bottom of the screen.
pub const STATUS_TOP: u32 = 186;

/// Baseline of the status text line.
pub const STATUS_TEXT_Y: i32 = STATUS_TOP as i32 + 8;

/// Top of the sparkline graph under the status text.
pub const GRAPH_TOP: u32 = STATUS_TOP + 12;

/// Height of the sparkline graph.
pub const GRAPH_HEIGHT: u32 = 28;

// =============================================================================
// Tracker Configuration
// =============================================================================

/// Number of samples kept for trend detection (~3 s at 60 ms per reading).
pub const HISTORY_SIZE: usize = 50;

/// Minimum change between recent and older averages (meters) to report a trend.
pub const TREND_THRESHOLD: f64 = 0.02;

// Layout sanity
const _: () = assert!(BARS_TOP + BAR_PITCH * (BARS_PER_GROUP * 3 - 1) + BAR_HEIGHT < STATUS_TOP);
const _: () = assert!(BARS_LEFT_X + BAR_WIDTH < DIGITS_LEFT as u32);
const _: () = assert!(GRAPH_TOP + GRAPH_HEIGHT < SCREEN_HEIGHT);
