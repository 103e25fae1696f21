//! Shared logic for the reversing-radar monitor.
//!
//! This crate contains platform-agnostic code: everything that decides what
//! the gauge shows, and the widgets that draw it.
//!
//! - [`zones`]: Distance to zone classification and derived indicators
//! - [`thresholds`]: Zone boundaries and buzzer cadence
//! - [`reading`]: Serial line decoding and sensor conversions
//! - [`sevenseg`]: Two-digit seven-segment encoding
//! - [`tracker`]: Closest approach, average, trend and zone changes
//! - [`events`]: Ring buffer of recent zone transitions
//! - [`colors`], [`styles`], [`config`]: Rendering constants
//! - [`widgets`]: Gauge drawing
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible (tests run with `std`). It avoids any
//! dependency on `std::time` or platform-specific types.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod events;
pub mod reading;
pub mod sevenseg;
pub mod styles;
pub mod thresholds;
pub mod tracker;
pub mod widgets;
pub mod zones;

// Re-export commonly used items
pub use events::EventLog;
pub use tracker::{DistanceTracker, ZoneChange};
pub use zones::{BuzzerPattern, Indicators, Zone, classify};
