//! Widget components for the radar gauge.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod bars;
mod gauge;
mod header;
mod primitives;
mod readout;
mod status;

pub use bars::{BarGroup, Side, bar_rect, draw_indicator_bars};
pub use gauge::{GaugeView, draw_gauge};
pub use header::{STATUS_MAX_CHARS, draw_header};
pub use primitives::{clear_region, draw_mini_graph, draw_trend_arrow, draw_value_with_outline};
pub use readout::{READOUT_AREA, digit_origin, draw_buzzer_lamp, draw_digit, draw_readout, segment_rect};
pub use status::{STATUS_AREA, draw_status_line, stats_text};
