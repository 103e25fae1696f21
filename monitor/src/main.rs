//! Reversing-radar monitor binary.
//!
//! ```text
//! radar-monitor --port /dev/ttyUSB0
//! radar-monitor --source sweep --headless --max-samples 200 --snapshot gauge.png
//! RUST_LOG=debug radar-monitor --source stdin < capture.txt
//! ```

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::Receiver;
use radar_monitor::app::{self, RunSummary};
use radar_monitor::config::{Cli, MonitorConfig};
use radar_monitor::reader;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = Cli::parse().into_config()?;

    let (reader, readings) = reader::spawn(&config.source, config.channel_capacity)
        .with_context(|| format!("starting reader for {}", config.source.describe()))?;
    log::info!("Reading from {} on thread {}", config.source.describe(), reader.name());

    let result = run(&config, &readings);

    // Unblocks a reader waiting on a full channel
    drop(readings);
    match reader.stop() {
        Ok(stats) => {
            log::info!(
                "Reader: {} lines, {} accepted, {} discarded",
                stats.lines,
                stats.accepted,
                stats.discarded
            );
            if let Some(error) = stats.error {
                log::warn!("Reader ended with error: {error}");
            }
        }
        Err(e) => log::warn!("{e}"),
    }

    let summary = result.context("monitor loop failed")?;
    summary.log();
    Ok(())
}

#[cfg(feature = "window")]
fn run(
    config: &MonitorConfig,
    readings: &Receiver<f64>,
) -> radar_monitor::Result<RunSummary> {
    if config.headless {
        app::run_headless(readings, &config.run)
    } else {
        radar_monitor::window::run_window(readings, &config.run)
    }
}

#[cfg(not(feature = "window"))]
fn run(
    config: &MonitorConfig,
    readings: &Receiver<f64>,
) -> radar_monitor::Result<RunSummary> {
    if !config.headless {
        log::info!("Built without the `window` feature, running headless");
    }
    app::run_headless(readings, &config.run)
}
