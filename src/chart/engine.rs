//! Bar chart engine: lazily resolved sizing and line counts.
//!
//! A [`BarChart`] starts unsized. The first query that needs the bar width or
//! plotting width resolves both once; every later query reuses the cached
//! [`Sizing`]. Line counts of titles and labels are memoized the same way.

use std::cell::OnceCell;

use serde::Serialize;

use super::data::{DataPoint, max_value};
use super::params::ChartParameters;
use super::text::line_count;
use crate::error::{ChartError, Result};

/// Resolved horizontal sizing of the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sizing {
    /// Width of the plotting area
    pub chart_width: f64,
    pub bar_width: f64,
    /// Gap before, between, and after bars
    pub spacing_width: f64,
    /// Height of one X axis label line, scaled with the bar width
    pub x_label_height: f64,
}

/// Line counts of every multi-line text block of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    pub title: usize,
    pub y_axis_title: usize,
    pub x_axis_title: usize,
    /// Maximum line count over all category labels
    pub x_labels: usize,
}

/// Geometry engine for one vertical bar chart.
#[derive(Debug)]
pub struct BarChart<'a> {
    pub(super) params: &'a ChartParameters,
    pub(super) data: &'a [DataPoint],
    data_max: Option<f64>,
    sizing: OnceCell<Sizing>,
    lines: OnceCell<LineCounts>,
}

impl<'a> BarChart<'a> {
    #[must_use]
    pub const fn new(params: &'a ChartParameters, data: &'a [DataPoint]) -> Self {
        Self {
            params,
            data,
            data_max: None,
            sizing: OnceCell::new(),
            lines: OnceCell::new(),
        }
    }

    /// Scale bars against an externally supplied maximum, e.g. one shared by
    /// several charts, instead of this chart's own largest value.
    #[must_use]
    pub const fn with_data_max(mut self, data_max: f64) -> Self {
        self.data_max = Some(data_max);
        self
    }

    #[must_use]
    pub const fn params(&self) -> &ChartParameters {
        self.params
    }

    #[must_use]
    pub const fn data(&self) -> &[DataPoint] {
        self.data
    }

    /// Value drawn at full chart height.
    #[must_use]
    pub fn data_max(&self) -> Option<f64> {
        self.data_max.or_else(|| max_value(self.data))
    }

    /// Whether sizing has been resolved.
    #[must_use]
    pub fn is_sized(&self) -> bool {
        self.sizing.get().is_some()
    }

    /// Resolve plotting width and bar width, once.
    ///
    /// Without an explicit chart width, the width follows from the preferred
    /// bar width and the number of bars, capped at `chart_height × max_aspect`.
    /// The bar width then makes `n` bars and `n + 1` gaps fill the width exactly.
    ///
    /// # Errors
    /// Returns a configuration error if neither chart width nor preferred bar
    /// width is set.
    pub fn resolve_size(&self) -> Result<&Sizing> {
        if let Some(sizing) = self.sizing.get() {
            return Ok(sizing);
        }
        let sizing = self.compute_sizing()?;
        tracing::debug!(
            bars = self.data.len(),
            chart_width = sizing.chart_width,
            bar_width = sizing.bar_width,
            "resolved chart size"
        );
        Ok(self.sizing.get_or_init(|| sizing))
    }

    #[allow(clippy::cast_precision_loss)]
    fn compute_sizing(&self) -> Result<Sizing> {
        let p = self.params;
        let n = self.data.len() as f64;

        let chart_width = match (p.chart_width, p.preferred_bar_width) {
            (Some(width), _) => width,
            (None, Some(preferred)) => {
                let width_preferred = preferred.mul_add(n, p.bar_spacing * preferred * (n + 1.0));
                let width_max = p.chart_height * p.max_aspect;
                width_preferred.min(width_max)
            }
            (None, None) => {
                return Err(ChartError::Config(
                    "one of chart_width or preferred_bar_width must be set".to_string(),
                ));
            }
        };

        let slots = p.bar_spacing.mul_add(n + 1.0, n);
        let bar_width = if slots > 0.0 { chart_width / slots } else { 0.0 };

        let x_label_height = match p.preferred_bar_width {
            Some(preferred) if preferred > 0.0 => p.axis_label_height * bar_width / preferred,
            _ => p.axis_label_height,
        };

        Ok(Sizing {
            chart_width,
            bar_width,
            spacing_width: p.bar_spacing * bar_width,
            x_label_height,
        })
    }

    /// Line counts of titles and labels, memoized.
    ///
    /// Counts preset in the parameters win over counts derived from the text.
    pub fn line_counts(&self) -> &LineCounts {
        self.lines.get_or_init(|| {
            let p = self.params;
            LineCounts {
                title: p
                    .title_lines
                    .unwrap_or_else(|| line_count(p.title.as_deref())),
                y_axis_title: p
                    .y_axis_title_lines
                    .unwrap_or_else(|| line_count(p.y_axis_title.as_deref())),
                x_axis_title: p
                    .x_axis_title_lines
                    .unwrap_or_else(|| line_count(p.x_axis_title.as_deref())),
                x_labels: p.x_label_lines.unwrap_or_else(|| {
                    self.data
                        .iter()
                        .map(|d| line_count(Some(&d.label)))
                        .max()
                        .unwrap_or(0)
                }),
            }
        })
    }
}

/// Whether an optional text block is present and non-empty.
pub(super) fn has_text(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.is_empty())
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
