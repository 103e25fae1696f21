//! Red/yellow/green indicator bars on both sides of the gauge.
//!
//! Each side has six bars stacked far-to-near: two green, two yellow, two
//! red. A lit group is filled with its color; an unlit group is drawn as a
//! dim outline so the layout stays readable.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};

use crate::colors::{BLACK, DIM_GREEN, DIM_RED, DIM_YELLOW, GREEN, RED, YELLOW};
use crate::config::{BAR_HEIGHT, BAR_PITCH, BAR_WIDTH, BARS_LEFT_X, BARS_PER_GROUP, BARS_RIGHT_X, BARS_TOP};
use crate::zones::Indicators;

/// Bar color group, top (farthest) first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BarGroup {
    Green,
    Yellow,
    Red,
}

/// Gauge side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

const GROUPS: [BarGroup; 3] = [BarGroup::Green, BarGroup::Yellow, BarGroup::Red];

impl BarGroup {
    const fn colors(self) -> (Rgb565, Rgb565) {
        match self {
            Self::Green => (GREEN, DIM_GREEN),
            Self::Yellow => (YELLOW, DIM_YELLOW),
            Self::Red => (RED, DIM_RED),
        }
    }

    const fn is_lit(
        self,
        indicators: &Indicators,
    ) -> bool {
        match self {
            Self::Green => indicators.green,
            Self::Yellow => indicators.yellow,
            Self::Red => indicators.red,
        }
    }

    const fn index(self) -> u32 {
        match self {
            Self::Green => 0,
            Self::Yellow => 1,
            Self::Red => 2,
        }
    }
}

/// Screen rectangle of bar `n` (0 or 1) of a group on one side.
pub const fn bar_rect(
    side: Side,
    group: BarGroup,
    n: u32,
) -> Rectangle {
    let x = match side {
        Side::Left => BARS_LEFT_X,
        Side::Right => BARS_RIGHT_X,
    };
    let slot = group.index() * BARS_PER_GROUP + n;
    Rectangle::new(
        Point::new(x as i32, (BARS_TOP + slot * BAR_PITCH) as i32),
        Size::new(BAR_WIDTH, BAR_HEIGHT),
    )
}

/// Draw both bar columns for the given indicator state.
pub fn draw_indicator_bars<D>(
    display: &mut D,
    indicators: &Indicators,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for group in GROUPS {
        let (lit, dim) = group.colors();
        let style = if group.is_lit(indicators) {
            PrimitiveStyle::with_fill(lit)
        } else {
            PrimitiveStyleBuilder::new()
                .fill_color(BLACK)
                .stroke_color(dim)
                .stroke_width(1)
                .build()
        };

        for side in [Side::Left, Side::Right] {
            for n in 0..BARS_PER_GROUP {
                bar_rect(side, group, n).into_styled(style).draw(display).ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::zones::Zone;

    fn render(zone: Zone) -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_indicator_bars(&mut display, &zone.indicators());
        display
    }

    fn center_color(
        display: &SimulatorDisplay<Rgb565>,
        side: Side,
        group: BarGroup,
    ) -> Rgb565 {
        display.get_pixel(bar_rect(side, group, 1).center())
    }

    #[test]
    fn test_bars_do_not_overlap() {
        let a = bar_rect(Side::Left, BarGroup::Green, 1);
        let b = bar_rect(Side::Left, BarGroup::Yellow, 0);
        assert!(a.intersection(&b).is_zero_sized());
    }

    #[test]
    fn test_red_full_lights_all_groups() {
        let display = render(Zone::RedFull);
        for side in [Side::Left, Side::Right] {
            assert_eq!(center_color(&display, side, BarGroup::Red), RED);
            assert_eq!(center_color(&display, side, BarGroup::Yellow), YELLOW);
            assert_eq!(center_color(&display, side, BarGroup::Green), GREEN);
        }
    }

    #[test]
    fn test_yellow_lights_yellow_and_green() {
        let display = render(Zone::Yellow);
        assert_eq!(center_color(&display, Side::Left, BarGroup::Red), BLACK);
        assert_eq!(center_color(&display, Side::Left, BarGroup::Yellow), YELLOW);
        assert_eq!(center_color(&display, Side::Right, BarGroup::Green), GREEN);
    }

    #[test]
    fn test_green_lights_green_only() {
        let display = render(Zone::Green);
        assert_eq!(center_color(&display, Side::Right, BarGroup::Red), BLACK);
        assert_eq!(center_color(&display, Side::Right, BarGroup::Yellow), BLACK);
        assert_eq!(center_color(&display, Side::Right, BarGroup::Green), GREEN);
    }

    #[test]
    fn test_none_draws_dim_outlines() {
        let display = render(Zone::None);
        let rect = bar_rect(Side::Left, BarGroup::Red, 0);
        assert_eq!(display.get_pixel(rect.top_left), DIM_RED);
        assert_eq!(display.get_pixel(rect.center()), BLACK);
    }
}
