//! Single bar chart: data model, parameters, geometry, and SVG rendering.

mod data;
mod engine;
mod layout;
mod params;
mod render;
mod text;
mod ticks;

pub use data::{DataPoint, max_value, total};
pub use engine::{BarChart, LineCounts, Sizing};
pub use layout::{BarGeometry, HorizontalLayout, Layout, TickGeometry, VerticalLayout};
pub use params::{Border, ChartOverrides, ChartParameters, DEFAULT_MARGIN};
pub use render::SvgOptions;
pub use text::{line_count, normalize_newlines, text_lines};
pub use ticks::Ticks;
