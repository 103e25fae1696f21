//! Timing constants for the monitor.
//!
//! These use `std::time::Duration`, which the `no_std` common crate cannot,
//! so they live here rather than next to the thresholds.

use std::time::Duration;

/// Target frame time (~50 FPS). The window loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Transmitter cadence; default period of the synthetic sweep.
pub const SWEEP_PERIOD: Duration = Duration::from_millis(60);

/// Feed is considered stale after this long without a reading.
pub const STALE_AFTER: Duration = Duration::from_secs(1);

/// Serial read timeout. Bounds how long a stop request can go unnoticed.
pub const SERIAL_READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Slice the reader waits on a full channel before re-checking for stop.
pub const SEND_RETRY: Duration = Duration::from_millis(50);

/// How long `ReaderHandle::stop` waits for the thread to wind down.
pub const JOIN_TIMEOUT: Duration = Duration::from_secs(1);
