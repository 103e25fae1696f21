//! Status strip: zone label, closest approach, rolling average, trend arrow
//! and a sparkline of recent distances.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::{BLACK, GRAY, WHITE, zone_color};
use crate::config::{GRAPH_HEIGHT, GRAPH_TOP, SCREEN_HEIGHT, SCREEN_WIDTH, STATUS_TEXT_Y, STATUS_TOP};
use crate::styles::{LABEL_FONT, LABEL_STYLE_GRAY, LEFT_ALIGNED, RIGHT_ALIGNED};
use crate::tracker::DistanceTracker;
use crate::widgets::primitives::{clear_region, draw_mini_graph, draw_trend_arrow};
use crate::zones::{Zone, classify};

/// Area owned by the status strip.
pub const STATUS_AREA: Rectangle = Rectangle::new(
    Point::new(0, STATUS_TOP as i32),
    Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - STATUS_TOP),
);

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);
const ZONE_LABEL_POS: Point = Point::new(6, STATUS_TEXT_Y);
const STATS_POS: Point = Point::new((SCREEN_WIDTH - 20) as i32, STATUS_TEXT_Y);
const TREND_POS: Point = Point::new((SCREEN_WIDTH - 10) as i32, STATUS_TEXT_Y - 4);

/// Format the closest/average statistics line.
pub fn stats_text(tracker: &DistanceTracker) -> String<32> {
    let mut s = String::new();
    match tracker.closest() {
        Some(c) => {
            let _ = write!(s, "MIN {c:.2}");
        }
        None => {
            let _ = write!(s, "MIN --");
        }
    }
    match tracker.average() {
        Some(a) => {
            let _ = write!(s, "  AVG {a:.2}");
        }
        None => {
            let _ = write!(s, "  AVG --");
        }
    }
    s
}

/// Draw the status strip for the tracker's current state.
pub fn draw_status_line<D>(
    display: &mut D,
    zone: Zone,
    tracker: &DistanceTracker,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_region(display, STATUS_AREA, BLACK);

    Line::new(
        Point::new(0, STATUS_TOP as i32),
        Point::new((SCREEN_WIDTH - 1) as i32, STATUS_TOP as i32),
    )
    .into_styled(DIVIDER_STYLE)
    .draw(display)
    .ok();

    let label_color = if zone == Zone::None { WHITE } else { zone_color(zone) };
    Text::with_text_style(
        zone.label(),
        ZONE_LABEL_POS,
        MonoTextStyle::new(LABEL_FONT, label_color),
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    let stats = stats_text(tracker);
    Text::with_text_style(&stats, STATS_POS, LABEL_STYLE_GRAY, RIGHT_ALIGNED)
        .draw(display)
        .ok();

    // Arrow follows the distance: down while approaching
    if let Some(approaching) = tracker.trend() {
        draw_trend_arrow(display, TREND_POS.x, TREND_POS.y, !approaching, WHITE);
    }

    let graph = tracker.graph();
    draw_mini_graph(
        display,
        4,
        GRAPH_TOP as i32,
        SCREEN_WIDTH - 8,
        GRAPH_HEIGHT,
        graph.buffer,
        graph.start_idx,
        graph.count,
        graph.min,
        graph.max,
        |d| zone_color(classify(f64::from(d))),
    );
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    #[test]
    fn test_stats_text_empty() {
        let tracker = DistanceTracker::new();
        assert_eq!(stats_text(&tracker).as_str(), "MIN --  AVG --");
    }

    #[test]
    fn test_stats_text_values() {
        let mut tracker = DistanceTracker::new();
        for d in [0.9, 0.5, 0.7, 0.7, 0.7] {
            tracker.update(d);
        }
        let text = stats_text(&tracker);
        assert!(text.starts_with("MIN 0.50"), "got {}", text.as_str());
        assert!(text.contains("AVG 0.70"), "got {}", text.as_str());
    }

    #[test]
    fn test_status_strip_draws_sparkline() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut tracker = DistanceTracker::new();
        for i in 0..40 {
            tracker.update(1.2 - i as f64 * 0.02);
        }
        draw_status_line(&mut display, tracker.zone(), &tracker);

        let graph_area = Rectangle::new(Point::new(0, GRAPH_TOP as i32), Size::new(SCREEN_WIDTH, GRAPH_HEIGHT));
        let lit = graph_area.points().filter(|p| display.get_pixel(*p) != BLACK).count();
        assert!(lit > 0, "sparkline should be visible");
    }
}
