//! Numeric readout: two seven-segment digits, a text line and the buzzer lamp.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use heapless::String;

use crate::colors::{BLACK, GRAY, WHITE, YELLOW};
use crate::config::{
    CENTER_X,
    DIGIT_GAP,
    DIGIT_HEIGHT,
    DIGIT_WIDTH,
    DIGITS_LEFT,
    DIGITS_TOP,
    LAMP_CENTER_Y,
    LAMP_DIAMETER,
    READOUT_TEXT_Y,
    SEGMENT_THICKNESS,
};
use crate::sevenseg::{SEGMENT_A, SEGMENT_B, SEGMENT_C, SEGMENT_D, SEGMENT_E, SEGMENT_F, SEGMENT_G, SevenSegment};
use crate::styles::{CENTERED, READOUT_FONT};
use crate::widgets::primitives::{clear_region, draw_value_with_outline};

/// Area wiped before the readout is redrawn.
pub const READOUT_AREA: Rectangle = Rectangle::new(
    Point::new(DIGITS_LEFT - 20, DIGITS_TOP - 4),
    Size::new(
        2 * DIGIT_WIDTH + DIGIT_GAP + 40,
        (LAMP_CENTER_Y - DIGITS_TOP) as u32 + LAMP_DIAMETER + 8,
    ),
);

const LAMP_CENTER: Point = Point::new(CENTER_X, LAMP_CENTER_Y);

/// Top-left corner of digit `index` (0 = left).
pub const fn digit_origin(index: u32) -> Point {
    Point::new(DIGITS_LEFT + (index * (DIGIT_WIDTH + DIGIT_GAP)) as i32, DIGITS_TOP)
}

/// Rectangle covered by one segment of the digit at `origin`.
pub fn segment_rect(
    origin: Point,
    segment: u8,
) -> Rectangle {
    let w = DIGIT_WIDTH as i32;
    let h = DIGIT_HEIGHT as i32;
    let t = SEGMENT_THICKNESS as i32;

    let g_top = h / 2 - t / 2;
    let upper_h = g_top - t;
    let lower_top = g_top + t;
    let lower_h = h - t - lower_top;
    let bar_w = w - 2 * t;

    let (x, y, sw, sh) = match segment {
        SEGMENT_A => (t, 0, bar_w, t),
        SEGMENT_B => (w - t, t, t, upper_h),
        SEGMENT_C => (w - t, lower_top, t, lower_h),
        SEGMENT_D => (t, h - t, bar_w, t),
        SEGMENT_E => (0, lower_top, t, lower_h),
        SEGMENT_F => (0, t, t, upper_h),
        _ => (t, g_top, bar_w, t),
    };
    Rectangle::new(origin + Point::new(x, y), Size::new(sw as u32, sh as u32))
}

/// Draw one digit: lit segments in `color`, the rest as dark ghosts.
pub fn draw_digit<D>(
    display: &mut D,
    origin: Point,
    segments: u8,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for segment in [SEGMENT_A, SEGMENT_B, SEGMENT_C, SEGMENT_D, SEGMENT_E, SEGMENT_F, SEGMENT_G] {
        let fill = if segments & segment != 0 { color } else { GRAY };
        segment_rect(origin, segment)
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(display)
            .ok();
    }
}

/// Draw the distance readout.
///
/// When `visible` is false the area is left blank, matching a readout that
/// is switched off out of range.
pub fn draw_readout<D>(
    display: &mut D,
    distance: f64,
    segments: &SevenSegment,
    color: Rgb565,
    visible: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_region(display, READOUT_AREA, BLACK);
    if !visible {
        return;
    }

    draw_digit(display, digit_origin(0), segments.digits[0], color);
    draw_digit(display, digit_origin(1), segments.digits[1], color);

    let t = SEGMENT_THICKNESS;
    let dp_origin = digit_origin(0)
        + Point::new(
            (DIGIT_WIDTH + (DIGIT_GAP - t) / 2) as i32,
            (DIGIT_HEIGHT - t) as i32,
        );
    let dp_color = if segments.decimal_point { color } else { GRAY };
    Rectangle::new(dp_origin, Size::new(t, t))
        .into_styled(PrimitiveStyle::with_fill(dp_color))
        .draw(display)
        .ok();

    let mut text: String<16> = String::new();
    let _ = write!(text, "{distance:.2} m");
    draw_value_with_outline(
        display,
        &text,
        Point::new(CENTER_X, READOUT_TEXT_Y),
        READOUT_FONT,
        WHITE,
        CENTERED,
    );
}

/// Draw the buzzer lamp: filled while the tone sounds, outlined otherwise.
pub fn draw_buzzer_lamp<D>(
    display: &mut D,
    on: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = if on {
        PrimitiveStyle::with_fill(YELLOW)
    } else {
        PrimitiveStyle::with_stroke(GRAY, 1)
    };
    let lamp = Circle::with_center(LAMP_CENTER, LAMP_DIAMETER);
    clear_region(display, lamp.bounding_box(), BLACK);
    lamp.into_styled(style).draw(display).ok();
}
