//! Error type for the monitor library.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("failed to open serial port {port}: {source}")]
    OpenPort {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write snapshot {}: {message}", .path.display())]
    Snapshot { path: PathBuf, message: String },

    #[error("reader thread panicked")]
    ReaderPanicked,

    #[error("reader thread did not stop within {0:?}")]
    ReaderStuck(Duration),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MonitorError>;
