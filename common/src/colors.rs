//! Color constants for the radar gauge.
//!
//! Standard colors come from the `RgbColor` trait constants; the dim variants
//! are used for unlit bars and segments so the gauge layout stays visible.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::zones::Zone;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Closest zones and header bar.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green. Safe-distance zones.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow. Caution zones and the buzzer lamp.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Dark gray for unlit segments and dividers.
/// RGB565: (6, 12, 6).
pub const GRAY: Rgb565 = Rgb565::new(6, 12, 6);

/// Light gray for secondary text.
/// RGB565: (20, 40, 20).
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(20, 40, 20);

/// Unlit red bar outline. RGB565: (10, 0, 0).
pub const DIM_RED: Rgb565 = Rgb565::new(10, 0, 0);

/// Unlit yellow bar outline. RGB565: (10, 20, 0).
pub const DIM_YELLOW: Rgb565 = Rgb565::new(10, 20, 0);

/// Unlit green bar outline. RGB565: (0, 20, 0).
pub const DIM_GREEN: Rgb565 = Rgb565::new(0, 20, 0);

/// Primary color of a zone's group, used for the readout digits.
pub const fn zone_color(zone: Zone) -> Rgb565 {
    match zone {
        Zone::RedFull | Zone::Red => RED,
        Zone::YellowFull | Zone::Yellow => YELLOW,
        Zone::GreenFull | Zone::Green => GREEN,
        Zone::None => GRAY,
    }
}
