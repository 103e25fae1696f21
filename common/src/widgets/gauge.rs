//! Full gauge composition.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::zone_color;
use crate::sevenseg::SevenSegment;
use crate::tracker::DistanceTracker;
use crate::widgets::{draw_buzzer_lamp, draw_header, draw_indicator_bars, draw_readout, draw_status_line};
use crate::zones::Zone;

/// Everything one gauge frame needs.
pub struct GaugeView<'a> {
    pub title: &'a str,
    pub status: &'a str,
    /// Zone to display. Callers pass `Zone::None` for a stale feed.
    pub zone: Zone,
    pub distance: Option<f64>,
    pub buzzer_on: bool,
    pub tracker: &'a DistanceTracker,
}

impl<'a> GaugeView<'a> {
    /// View of the tracker's latest reading.
    pub fn from_tracker(
        title: &'a str,
        status: &'a str,
        tracker: &'a DistanceTracker,
        buzzer_on: bool,
    ) -> Self {
        Self {
            title,
            status,
            zone: tracker.zone(),
            distance: tracker.last(),
            buzzer_on,
            tracker,
        }
    }
}

/// Draw a complete gauge frame. Every region repaints its own background.
pub fn draw_gauge<D>(
    display: &mut D,
    view: &GaugeView<'_>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let indicators = view.zone.indicators();

    draw_header(display, view.title, view.status);
    draw_indicator_bars(display, &indicators);

    match view.distance {
        Some(distance) => draw_readout(
            display,
            distance,
            &SevenSegment::for_distance(distance),
            zone_color(view.zone),
            indicators.readout,
        ),
        None => draw_readout(display, 0.0, &SevenSegment::BLANK, zone_color(view.zone), false),
    }

    draw_buzzer_lamp(display, view.buzzer_on);
    draw_status_line(display, view.zone, view.tracker);
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::colors::{BLACK, RED, YELLOW};
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::widgets::{BarGroup, READOUT_AREA, Side, bar_rect};

    fn render(view: &GaugeView<'_>) -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_gauge(&mut display, view);
        display
    }

    #[test]
    fn test_gauge_close_obstacle() {
        let mut tracker = DistanceTracker::new();
        tracker.update(0.4);
        let view = GaugeView::from_tracker("RADAR", "TEST", &tracker, true);
        let display = render(&view);

        assert_eq!(display.get_pixel(bar_rect(Side::Left, BarGroup::Red, 0).center()), RED);
        assert_eq!(display.get_pixel(bar_rect(Side::Right, BarGroup::Yellow, 1).center()), YELLOW);
        let lit = READOUT_AREA.points().filter(|p| display.get_pixel(*p) != BLACK).count();
        assert!(lit > 100, "readout should be drawn");
    }

    #[test]
    fn test_gauge_out_of_range_hides_readout() {
        let mut tracker = DistanceTracker::new();
        tracker.update(2.5);
        let view = GaugeView::from_tracker("RADAR", "TEST", &tracker, false);
        let display = render(&view);

        assert_eq!(display.get_pixel(bar_rect(Side::Left, BarGroup::Green, 0).center()), BLACK);
        // Only the unlit buzzer lamp outline remains in the readout area
        let digits_lit = READOUT_AREA
            .points()
            .filter(|p| p.y < READOUT_AREA.top_left.y + 100)
            .filter(|p| display.get_pixel(*p) != BLACK)
            .count();
        assert_eq!(digits_lit, 0);
    }

    #[test]
    fn test_gauge_without_reading() {
        let tracker = DistanceTracker::new();
        let view = GaugeView::from_tracker("RADAR", "WAITING", &tracker, false);
        let display = render(&view);
        assert_eq!(display.get_pixel(bar_rect(Side::Right, BarGroup::Red, 1).center()), BLACK);
    }
}
