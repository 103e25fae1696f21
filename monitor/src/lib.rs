//! Desktop monitor for the reversing-radar sensor.
//!
//! A background [`reader`] turns a serial port, stdin or a synthetic sweep
//! into distances on a bounded channel. The consumer side ([`app`], or
//! [`window`] with the `window` feature) feeds them through a
//! [`state::MonitorState`] and draws the gauge from `radar-common`.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod app;
pub mod config;
pub mod error;
pub mod reader;
pub mod snapshot;
pub mod state;
pub mod timing;
#[cfg(feature = "window")]
pub mod window;

pub use error::{MonitorError, Result};
