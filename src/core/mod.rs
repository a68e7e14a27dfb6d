pub mod curve;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod types;

pub use curve::{LinePath, PathCommand};
pub use scale::LinearScale;
pub use series::{DataRow, DataSet, LABEL_LINE_DELIMITER, SeriesDefinition, split_label_lines};
pub use ticks::{DEFAULT_TICK_COUNT, format_integer_tick, format_value_tick, tick_step, ticks};
pub use types::{BoxSize, Domain, Margin, Point};
