//! Low-level drawing primitives shared across widgets.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Text, TextStyle};

use crate::colors::{BLACK, WHITE};

/// Fill a region with a solid color, wiping whatever was drawn last frame.
pub fn clear_region<D>(
    display: &mut D,
    area: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
}

/// Draw a trend arrow indicator (up or down).
pub fn draw_trend_arrow<D>(
    display: &mut D,
    x: i32,
    y: i32,
    rising: bool,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let arrow_style = PrimitiveStyle::with_stroke(color, 1);
    let (tail, head, wing) = if rising { (4, -4, -1) } else { (-4, 4, 1) };

    Line::new(Point::new(x, y + tail), Point::new(x, y + head))
        .into_styled(arrow_style)
        .draw(display)
        .ok();
    Line::new(Point::new(x - 3, y + wing), Point::new(x, y + head))
        .into_styled(arrow_style)
        .draw(display)
        .ok();
    Line::new(Point::new(x + 3, y + wing), Point::new(x, y + head))
        .into_styled(arrow_style)
        .draw(display)
        .ok();
}

/// Draw a mini sparkline graph over a ring buffer.
#[allow(clippy::too_many_arguments)]
pub fn draw_mini_graph<D, F>(
    display: &mut D,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    buffer: &[f32],
    start_idx: usize,
    count: usize,
    data_min: f32,
    data_max: f32,
    color_fn: F,
) where
    D: DrawTarget<Color = Rgb565>,
    F: Fn(f32) -> Rgb565,
{
    if count < 2 || buffer.is_empty() {
        return;
    }

    if w < 5 || h < 5 {
        return;
    }

    let graph_width = w as i32 - 4;
    let graph_height = h as i32 - 4;
    let graph_x = x + 2;
    let graph_y = y + 2;

    let max_x = graph_x + graph_width - 1;
    let max_y = graph_y + graph_height - 1;

    let data_range = data_max - data_min;
    let y_scale = if data_range > 0.01 {
        (graph_height - 1) as f32 / data_range
    } else {
        0.0
    };

    let x_step = (graph_width - 1) as f32 / (count - 1).max(1) as f32;

    let mut prev: Option<Point> = None;

    for i in 0..count {
        let value = buffer[(start_idx + i) % buffer.len()];

        let screen_x = (graph_x + (i as f32 * x_step) as i32).min(max_x);
        let screen_y = if y_scale > 0.0 {
            (graph_y + graph_height - 1 - ((value - data_min) * y_scale) as i32).clamp(graph_y, max_y)
        } else {
            graph_y + (graph_height - 1) / 2
        };
        let point = Point::new(screen_x, screen_y);

        if let Some(prev) = prev {
            Line::new(prev, point)
                .into_styled(PrimitiveStyle::with_stroke(color_fn(value), 1))
                .draw(display)
                .ok();
        }
        prev = Some(point);
    }
}

/// Outline color that contrasts with the given text color.
#[inline]
pub fn outline_color_for_text(text_color: Rgb565) -> Rgb565 { if text_color == BLACK { WHITE } else { BLACK } }

/// Draw text with a contrasting outline for readability over any background.
pub fn draw_value_with_outline<D>(
    display: &mut D,
    text: &str,
    position: Point,
    font: &MonoFont<'_>,
    text_color: Rgb565,
    text_style: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let outline_char_style = MonoTextStyle::new(font, outline_color_for_text(text_color));
    let main_char_style = MonoTextStyle::new(font, text_color);

    // Simple shadow mode: bottom-right only
    #[cfg(feature = "simple-outline")]
    const OFFSETS: [(i32, i32); 2] = [(1, 1), (1, 0)];

    #[cfg(not(feature = "simple-outline"))]
    const OFFSETS: [(i32, i32); 8] = [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

    for (dx, dy) in OFFSETS {
        Text::with_text_style(text, position + Point::new(dx, dy), outline_char_style, text_style)
            .draw(display)
            .ok();
    }

    Text::with_text_style(text, position, main_char_style, text_style)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;

    #[test]
    fn test_clear_region_fills() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(20, 20));
        clear_region(&mut display, Rectangle::new(Point::new(5, 5), Size::new(4, 4)), WHITE);
        assert_eq!(display.get_pixel(Point::new(6, 6)), WHITE);
        assert_eq!(display.get_pixel(Point::new(0, 0)), BLACK);
    }

    #[test]
    fn test_outline_color_contrast() {
        assert_eq!(outline_color_for_text(BLACK), WHITE);
        assert_eq!(outline_color_for_text(WHITE), BLACK);
    }

    #[test]
    fn test_mini_graph_needs_two_points() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(40, 20));
        draw_mini_graph(&mut display, 0, 0, 40, 20, &[0.5], 0, 1, 0.5, 0.5, |_| WHITE);
        let lit = display.bounding_box().points().filter(|p| display.get_pixel(*p) == WHITE).count();
        assert_eq!(lit, 0);
    }

    #[test]
    fn test_mini_graph_draws_line() {
        let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(40, 20));
        draw_mini_graph(&mut display, 0, 0, 40, 20, &[0.2, 0.8, 0.4], 0, 3, 0.2, 0.8, |_| WHITE);
        let lit = display.bounding_box().points().filter(|p| display.get_pixel(*p) == WHITE).count();
        assert!(lit > 10, "sparkline should light a run of pixels, got {lit}");
    }
}
