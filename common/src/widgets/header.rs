//! Header bar rendering.
//!
//! Red bar across the top with the title on the left and a short status on
//! the right (source name, `STALE`, ...).

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::RED,
    config::{HEADER_HEIGHT, SCREEN_WIDTH},
    styles::{LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
};

/// Longest status text shown in the header.
pub const STATUS_MAX_CHARS: usize = 24;

const HEADER_RECT: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));
const HEADER_TITLE_POS: Point = Point::new(6, 19);
const HEADER_STATUS_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 17);
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

/// Draw the header bar.
///
/// Status text longer than [`STATUS_MAX_CHARS`] is cut from the front so the
/// distinctive tail of a device path stays visible.
pub fn draw_header<D>(
    display: &mut D,
    title: &str,
    status: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(HEADER_FILL_STYLE).draw(display).ok();

    Text::with_text_style(title, HEADER_TITLE_POS, TITLE_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let status = truncate_front(status);
    Text::with_text_style(&status, HEADER_STATUS_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

fn truncate_front(status: &str) -> String<STATUS_MAX_CHARS> {
    let total = status.chars().count();
    let skip = total.saturating_sub(STATUS_MAX_CHARS);
    let mut out = String::new();
    for c in status.chars().skip(skip) {
        out.push(c).ok();
    }
    out
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    #[test]
    fn test_truncate_front_short() {
        assert_eq!(truncate_front("SWEEP").as_str(), "SWEEP");
    }

    #[test]
    fn test_truncate_front_long() {
        let long = "/dev/serial/by-id/usb-STMicro_Virtual_COM_Port-if00";
        let cut = truncate_front(long);
        assert_eq!(cut.chars().count(), STATUS_MAX_CHARS);
        assert!(long.ends_with(cut.as_str()));
    }

    #[test]
    fn test_header_paints_bar() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, 40));
        draw_header(&mut display, "RADAR", "SWEEP");
        // Far corner of the bar is background, not text
        assert_eq!(display.get_pixel(Point::new(150, 1)), RED);
        assert_ne!(display.get_pixel(Point::new(150, HEADER_HEIGHT as i32 + 2)), RED);
    }
}
