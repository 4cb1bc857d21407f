//! SVG emission primitives for bar charts.
//!
//! Charts are emitted as plain `<svg>` elements whose presentation comes from
//! one shared `<style>` block:
//! - viewBox spans the chart's natural size (renders at any display size)
//! - stroke/fill/font attributes bound through stylesheet classes
//! - all text content escaped

mod builder;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use element::{Line, Rect, SvgElement, Text};
pub use format::{
    TICK_SUFFIXES, TOTAL_SUFFIXES, format_abbreviated, format_plain, format_tick, format_total,
    html_escape, round_significant,
};
pub use style::{ChartColor, StyleSheet, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
