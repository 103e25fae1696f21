//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::app::{RunOptions, TITLE};
use crate::error::{MonitorError, Result};
use crate::reader::Source;

/// Largest accepted window/snapshot scale.
pub const MAX_SCALE: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Serial port (`--port`, `--baud`)
    Serial,
    /// Lines on standard input
    Stdin,
    /// Synthetic back-and-forth sweep, no hardware needed
    Sweep,
}

#[derive(Parser, Debug)]
#[command(name = "radar-monitor", version, about = "Reversing-radar distance monitor")]
pub struct Cli {
    /// Where readings come from
    #[arg(long, value_enum, default_value_t = SourceKind::Serial)]
    pub source: SourceKind,

    /// Serial device
    #[arg(long, env = "RADAR_PORT", default_value = "/dev/ttyUSB0")]
    pub port: String,

    /// Serial baud rate
    #[arg(long, env = "RADAR_BAUD", default_value_t = 115_200)]
    pub baud: u32,

    /// Sweep sample period in milliseconds
    #[arg(long, default_value_t = 60)]
    pub sweep_period_ms: u64,

    /// Unread readings buffered between reader and display
    #[arg(long, default_value_t = 64)]
    pub channel_capacity: usize,

    /// Stop after this many readings
    #[arg(long)]
    pub max_samples: Option<u64>,

    /// Write the final gauge frame to this PNG file
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Run without a window
    #[arg(long)]
    pub headless: bool,

    /// Window and snapshot pixel scale
    #[arg(long, default_value_t = 2)]
    pub scale: u32,

    /// Milliseconds without a reading before the feed counts as stale
    #[arg(long, default_value_t = 1000)]
    pub stale_after_ms: u64,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub source: Source,
    pub channel_capacity: usize,
    pub headless: bool,
    pub run: RunOptions,
}

impl Cli {
    pub fn into_config(self) -> Result<MonitorConfig> {
        let source = match self.source {
            SourceKind::Serial => {
                if self.baud == 0 {
                    return Err(MonitorError::InvalidConfig("baud rate must be positive".to_owned()));
                }
                Source::Serial {
                    port: self.port,
                    baud: self.baud,
                }
            }
            SourceKind::Stdin => Source::Stdin,
            SourceKind::Sweep => {
                if self.sweep_period_ms == 0 {
                    return Err(MonitorError::InvalidConfig("sweep period must be positive".to_owned()));
                }
                Source::Sweep {
                    period: Duration::from_millis(self.sweep_period_ms),
                }
            }
        };

        if self.channel_capacity == 0 {
            return Err(MonitorError::InvalidConfig("channel capacity must be at least 1".to_owned()));
        }
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(MonitorError::InvalidConfig(format!("scale must be between 1 and {MAX_SCALE}")));
        }
        if self.stale_after_ms == 0 {
            return Err(MonitorError::InvalidConfig("stale timeout must be positive".to_owned()));
        }

        let status = source.describe();
        Ok(MonitorConfig {
            source,
            channel_capacity: self.channel_capacity,
            headless: self.headless,
            run: RunOptions {
                title: TITLE.to_owned(),
                status,
                max_samples: self.max_samples,
                stale_after: Duration::from_millis(self.stale_after_ms),
                snapshot: self.snapshot,
                scale: self.scale,
            },
        })
    }
}
