//! Off-screen gauge rendering and PNG output.

use std::path::Path;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use radar_common::colors::BLACK;
use radar_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use radar_common::widgets::{GaugeView, draw_gauge};

use crate::error::{MonitorError, Result};

/// Framebuffer the size of the gauge.
pub fn new_display() -> SimulatorDisplay<Rgb565> { SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

/// Render one full frame from scratch.
pub fn render(
    display: &mut SimulatorDisplay<Rgb565>,
    view: &GaugeView<'_>,
) {
    display.clear(BLACK).ok();
    draw_gauge(display, view);
}

/// Write the framebuffer to `path` as a PNG, upscaled by `scale`.
pub fn save_png(
    display: &SimulatorDisplay<Rgb565>,
    path: &Path,
    scale: u32,
) -> Result<()> {
    let settings = OutputSettingsBuilder::new().scale(scale).build();
    display
        .to_rgb_output_image(&settings)
        .save_png(path)
        .map_err(|e| MonitorError::Snapshot {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    log::info!("Snapshot written to {}", path.display());
    Ok(())
}
