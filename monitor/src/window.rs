//! SDL window loop.
//!
//! Keys: `R` resets statistics, `Q` or `Esc` quits.

use std::thread;
use std::time::Instant;

use crossbeam_channel::Receiver;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorEvent, Window};
use radar_common::colors::BLACK;
use radar_common::widgets::draw_gauge;

use crate::app::{Drain, RunOptions, RunSummary, drain_pending, finish};
use crate::error::Result;
use crate::snapshot::new_display;
use crate::state::{FeedStatus, MonitorState};
use crate::timing::FRAME_TIME;

/// Run the gauge in a window until the user quits or the sample limit is hit.
pub fn run_window(
    readings: &Receiver<f64>,
    options: &RunOptions,
) -> Result<RunSummary> {
    let mut display = new_display();
    let output_settings = OutputSettingsBuilder::new().scale(options.scale).build();
    let mut window = Window::new(&options.title, &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut state = MonitorState::new(options.stale_after, Instant::now());
    let mut disconnected = false;

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::R => state.reset(frame_start),
                        Keycode::Q | Keycode::Escape => break 'running,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Take what arrived since the last frame, up to the limit
        if !disconnected {
            match drain_pending(readings, &mut state, options.max_samples) {
                Drain::Empty => {}
                Drain::LimitReached => {
                    log::info!("Sample limit reached");
                    break;
                }
                Drain::Disconnected => {
                    log::info!("Reader finished");
                    disconnected = true;
                }
            }
        }

        let now = Instant::now();
        let status = match state.feed_status(now) {
            _ if disconnected => "NO SOURCE",
            FeedStatus::Live => options.status.as_str(),
            feed => feed.label(),
        };
        draw_gauge(&mut display, &state.view(&options.title, status, now));

        window.update(&display);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    finish(&state, options)
}
