//! Absolute coordinates of every chart region.
//!
//! Vertical positions accumulate strictly top to bottom: chart title, Y axis
//! title, plotting area, X axis, X axis labels, X axis title, bottom margin.
//! Horizontal positions mirror them from the left: Y axis labels, ticks,
//! Y axis, plotting area, right margin.

use serde::Serialize;

use super::engine::{BarChart, LineCounts, Sizing, has_text};
use super::ticks::{Ticks, within};
use crate::error::Result;

/// Y coordinates, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VerticalLayout {
    pub chart_title: f64,
    pub y_axis_title: f64,
    /// Top of the plotting area
    pub chart_top: f64,
    /// Center line of the X axis
    pub x_axis: f64,
    /// Baseline of the first X axis label line
    pub x_axis_label: f64,
    pub x_axis_title: f64,
    /// Bottom of the drawn area, excluding the bottom margin
    pub chart_bottom: f64,
    pub height: f64,
}

/// X coordinates, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalLayout {
    pub y_axis_label: f64,
    /// Start of Y axis tick lines
    pub y_axis_tick: f64,
    /// Center line of the Y axis, left edge of the bars region
    pub y_axis: f64,
    pub chart_right: f64,
    pub chart_center: f64,
    pub width: f64,
}

/// Placement of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGeometry {
    pub label: String,
    /// Left edge of the bar slot
    pub x: f64,
    /// Horizontal center, where the label is anchored
    pub center: f64,
    /// Top of the bar; `None` when no bar is drawn
    pub top: Option<f64>,
    pub height: Option<f64>,
    /// CSS fill of the bar
    pub fill: String,
}

/// Placement of one Y axis tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickGeometry {
    pub value: f64,
    pub label: String,
    /// Y of the tick line
    pub y: f64,
    /// Baseline of the tick label
    pub label_y: f64,
}

/// Fully resolved geometry of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub sizing: Sizing,
    pub lines: LineCounts,
    pub data_max: Option<f64>,
    pub vertical: VerticalLayout,
    pub horizontal: HorizontalLayout,
    pub bars: Vec<BarGeometry>,
    pub ticks: Vec<TickGeometry>,
}

impl BarChart<'_> {
    /// Vertical positions.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be sized.
    #[allow(clippy::cast_precision_loss)]
    pub fn vertical(&self) -> Result<VerticalLayout> {
        let p = self.params;
        let sizing = self.resolve_size()?;
        let lines = self.line_counts();

        let chart_title = p.top_margin;

        let mut y_axis_title = chart_title;
        if has_text(p.title.as_deref()) {
            y_axis_title += p.title_height * lines.title as f64;
        }

        let mut chart_top = y_axis_title;
        if has_text(p.y_axis_title.as_deref()) {
            chart_top += p.axis_label_height * lines.y_axis_title as f64;
        }

        let x_axis = chart_top + p.chart_height;

        let mut x_axis_label = x_axis + p.x_tick_height;
        if lines.x_labels > 0 {
            x_axis_label += p.x_label_margin + sizing.x_label_height;
        }

        let mut x_axis_title = x_axis_label + sizing.x_label_height * lines.x_labels as f64;
        let has_x_title = has_text(p.x_axis_title.as_deref());
        if has_x_title {
            x_axis_title += p.x_title_margin;
        }

        let mut chart_bottom = x_axis_title;
        if has_x_title {
            chart_bottom += p.axis_label_height * lines.x_axis_title as f64;
        }

        Ok(VerticalLayout {
            chart_title,
            y_axis_title,
            chart_top,
            x_axis,
            x_axis_label,
            x_axis_title,
            chart_bottom,
            height: chart_bottom + p.bottom_margin,
        })
    }

    /// Horizontal positions.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be sized.
    pub fn horizontal(&self) -> Result<HorizontalLayout> {
        let p = self.params;
        let sizing = self.resolve_size()?;

        let y_axis_label = p.left_margin;
        let y_axis_tick = y_axis_label + p.y_label_width + p.y_label_margin;
        let y_axis = y_axis_tick + p.y_tick_width;
        let chart_right = y_axis + sizing.chart_width;

        Ok(HorizontalLayout {
            y_axis_label,
            y_axis_tick,
            y_axis,
            chart_right,
            chart_center: y_axis + sizing.chart_width / 2.0,
            width: chart_right + p.right_margin,
        })
    }

    /// Total width including margins.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be sized.
    pub fn width(&self) -> Result<f64> {
        Ok(self.horizontal()?.width)
    }

    /// Total height including margins.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be sized.
    pub fn height(&self) -> Result<f64> {
        Ok(self.vertical()?.height)
    }

    /// One slot per data point, left to right, bars growing up from the X axis.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be sized.
    #[allow(clippy::cast_precision_loss)]
    pub fn bars(&self) -> Result<Vec<BarGeometry>> {
        let p = self.params;
        let sizing = *self.resolve_size()?;
        let x_axis = self.vertical()?.x_axis;
        let y_axis = self.horizontal()?.y_axis;
        let data_max = self.data_max().filter(|m| *m > 0.0);

        let slot = sizing.spacing_width + sizing.bar_width;
        let bars = self
            .data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x = slot.mul_add(i as f64, y_axis + sizing.spacing_width);
                let height = point
                    .value
                    .zip(data_max)
                    .map(|(v, max)| (v / max).max(0.0) * p.chart_height);
                BarGeometry {
                    label: point.label.clone(),
                    x,
                    center: x + sizing.bar_width / 2.0,
                    top: height.map(|h| x_axis - h),
                    height,
                    fill: point.color.as_ref().unwrap_or(&p.data_color).to_css(),
                }
            })
            .collect();
        Ok(bars)
    }

    /// Y axis ticks against the chart's data maximum.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be sized.
    pub fn ticks(&self) -> Result<Vec<TickGeometry>> {
        let p = self.params;
        let Some(data_max) = self.data_max().filter(|m| *m > 0.0) else {
            return Ok(Vec::new());
        };
        let x_axis = self.vertical()?.x_axis;

        let ticks = Ticks::for_max(data_max);
        let geometry = ticks
            .values()
            .take_while(|(value, _)| within(*value, data_max))
            .map(|(value, label)| {
                let y = x_axis - value * p.chart_height / data_max;
                TickGeometry {
                    value,
                    label: label.to_string(),
                    y,
                    label_y: y + p.axis_label_height / 2.0,
                }
            })
            .collect();
        Ok(geometry)
    }

    /// Every resolved coordinate of the chart.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be sized.
    pub fn layout(&self) -> Result<Layout> {
        Ok(Layout {
            sizing: *self.resolve_size()?,
            lines: *self.line_counts(),
            data_max: self.data_max(),
            vertical: self.vertical()?,
            horizontal: self.horizontal()?,
            bars: self.bars()?,
            ticks: self.ticks()?,
        })
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
