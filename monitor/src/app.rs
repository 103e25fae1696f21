//! Consumer loop without a window.
//!
//! Drains the reader's channel into a [`MonitorState`] until the reader
//! finishes or the sample limit is hit, then optionally writes a snapshot
//! of the final gauge.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use radar_common::Zone;

use crate::error::Result;
use crate::snapshot::{new_display, render, save_png};
use crate::state::MonitorState;

/// Title shown in the header.
pub const TITLE: &str = "REVERSING RADAR";

/// Settings shared by the headless and window loops.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub title: String,
    /// Header status while the feed is live, normally the source name.
    pub status: String,
    /// Stop after this many readings.
    pub max_samples: Option<u64>,
    pub stale_after: Duration,
    /// Write the final frame here.
    pub snapshot: Option<PathBuf>,
    /// Pixel scale for the window and snapshot.
    pub scale: u32,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub samples: u64,
    pub zone_changes: u32,
    pub closest: Option<f64>,
    pub final_zone: Zone,
    /// Most recent zone transitions, oldest first.
    pub events: Vec<String>,
}

impl RunSummary {
    pub fn from_state(state: &MonitorState) -> Self {
        let tracker = state.tracker();
        Self {
            samples: tracker.total_samples(),
            zone_changes: tracker.zone_changes(),
            closest: tracker.closest(),
            final_zone: tracker.zone(),
            events: state.events().iter().map(str::to_owned).collect(),
        }
    }

    /// Log the summary at `info`, recent events at `debug`.
    pub fn log(&self) {
        match self.closest {
            Some(closest) => log::info!(
                "{} readings, {} zone changes, closest {closest:.2} m, final zone {}",
                self.samples,
                self.zone_changes,
                self.final_zone
            ),
            None => log::info!("No readings received"),
        }
        for event in &self.events {
            log::debug!("  {event}");
        }
    }
}

fn limit_reached(
    state: &MonitorState,
    max_samples: Option<u64>,
) -> bool {
    max_samples.is_some_and(|max| state.tracker().total_samples() >= max)
}

/// Why [`drain_pending`] stopped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Drain {
    /// Nothing left queued.
    Empty,
    LimitReached,
    Disconnected,
}

/// Apply queued readings without blocking.
///
/// The limit is checked before every reading, so anything past it stays
/// in the channel.
pub fn drain_pending(
    readings: &Receiver<f64>,
    state: &mut MonitorState,
    max_samples: Option<u64>,
) -> Drain {
    loop {
        if limit_reached(state, max_samples) {
            return Drain::LimitReached;
        }
        match readings.try_recv() {
            Ok(distance) => {
                state.apply(distance, Instant::now());
            }
            Err(TryRecvError::Empty) => return Drain::Empty,
            Err(TryRecvError::Disconnected) => return Drain::Disconnected,
        }
    }
}

/// Write the snapshot if one was requested.
pub fn finish(
    state: &MonitorState,
    options: &RunOptions,
) -> Result<RunSummary> {
    if let Some(path) = &options.snapshot {
        let mut display = new_display();
        render(&mut display, &state.view(&options.title, &options.status, Instant::now()));
        save_png(&display, path, options.scale)?;
    }
    Ok(RunSummary::from_state(state))
}

/// Consume readings until the channel disconnects or the limit is reached.
pub fn run_headless(
    readings: &Receiver<f64>,
    options: &RunOptions,
) -> Result<RunSummary> {
    let mut state = MonitorState::new(options.stale_after, Instant::now());
    let mut stale_reported = false;

    while !limit_reached(&state, options.max_samples) {
        match readings.recv_timeout(options.stale_after) {
            Ok(distance) => {
                state.apply(distance, Instant::now());
                if stale_reported {
                    log::info!("Feed resumed");
                    stale_reported = false;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if !stale_reported {
                    log::warn!("No reading for {:?}", options.stale_after);
                    stale_reported = true;
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("Reader finished");
                break;
            }
        }
    }

    if limit_reached(&state, options.max_samples) {
        log::info!("Sample limit reached");
    }

    finish(&state, options)
}
