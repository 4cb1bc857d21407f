//! Markup for a resolved chart.

use serde::{Deserialize, Serialize};

use super::engine::BarChart;
use super::layout::{HorizontalLayout, Layout, VerticalLayout};
use super::text::text_lines;
use crate::error::Result;
use crate::output::svg::{Line, Rect, StyleSheet, SvgBuilder, Text};

/// Display sizing of the emitted `<svg>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvgOptions {
    /// Explicit display width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit display height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Uniform scale applied to the natural size when no explicit size is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_aspect_ratio: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            scale: None,
            preserve_aspect_ratio: Some("xMinYMin".to_string()),
        }
    }
}

impl SvgOptions {
    /// Displayed (width, height) for a chart of the given natural size.
    #[must_use]
    pub fn display_size(&self, natural_width: f64, natural_height: f64) -> (f64, f64) {
        let scale = self.scale.unwrap_or(1.0);
        (
            self.width.unwrap_or(natural_width * scale),
            self.height.unwrap_or(natural_height * scale),
        )
    }
}

impl BarChart<'_> {
    /// The shared `<style>` block for this chart's parameters.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be sized.
    pub fn render_style(&self) -> Result<String> {
        let p = self.params;
        let sizing = self.resolve_size()?;
        let sheet = StyleSheet {
            chart_color: p.chart_color.clone(),
            axis_stroke_width: p.stroke_width,
            tick_stroke_width: p.axis_tick_thickness,
            title_font_family: p.title_font_family.clone(),
            title_font_size: p.title_height,
            label_font_family: p.axis_label_font_family.clone(),
            label_font_size: p.axis_label_height,
            x_label_font_size: sizing.x_label_height,
        };
        Ok(sheet.render())
    }

    /// The chart as one `<svg>` element.
    ///
    /// # Errors
    /// Returns an error if the chart cannot be sized.
    pub fn render_svg(&self, options: &SvgOptions) -> Result<String> {
        let layout = self.layout()?;
        let v = &layout.vertical;
        let h = &layout.horizontal;

        let (display_width, display_height) = options.display_size(h.width, v.height);
        let mut svg =
            SvgBuilder::new(h.width, v.height).with_size(display_width, display_height);
        if let Some(par) = &options.preserve_aspect_ratio {
            svg = svg.with_preserve_aspect_ratio(par.clone());
        }

        self.push_border(&mut svg, h, v);
        self.push_titles(&mut svg, h, v);
        self.push_axes(&mut svg, h, v);
        self.push_bars(&mut svg, &layout);
        Self::push_ticks(&mut svg, &layout);

        Ok(svg.build())
    }

    /// Border inset by half its stroke so it stays inside the nominal size.
    fn push_border(&self, svg: &mut SvgBuilder, h: &HorizontalLayout, v: &VerticalLayout) {
        let p = self.params;
        let Some(sw) = p.border.stroke_width(p.stroke_width) else {
            return;
        };
        svg.push_element(&Rect {
            x: sw / 2.0,
            y: sw / 2.0,
            width: h.width - sw,
            height: v.height - sw,
            fill: None,
            stroke: p.chart_color.to_css(),
            stroke_width: sw,
        });
    }

    fn push_titles(&self, svg: &mut SvgBuilder, h: &HorizontalLayout, v: &VerticalLayout) {
        let p = self.params;
        let title_fill = p.data_color.to_css();

        if let Some(title) = p.title.as_deref().filter(|t| !t.is_empty()) {
            let lines = TextBlock::new("ctitle", h.chart_center, v.chart_title, p.title_height);
            lines.push(svg, title, Some(&title_fill));
        }
        if let Some(title) = p.y_axis_title.as_deref().filter(|t| !t.is_empty()) {
            let lines =
                TextBlock::new("yaxlabel", h.y_axis_label, v.y_axis_title, p.axis_label_height);
            lines.push(svg, title, None);
        }
        if let Some(title) = p.x_axis_title.as_deref().filter(|t| !t.is_empty()) {
            let lines =
                TextBlock::new("axlabel", h.chart_center, v.x_axis_title, p.axis_label_height);
            lines.push(svg, title, None);
        }
    }

    /// Axis lines overlap by half a stroke so the corner is closed.
    fn push_axes(&self, svg: &mut SvgBuilder, h: &HorizontalLayout, v: &VerticalLayout) {
        let half_stroke = self.params.stroke_width / 2.0;
        svg.push_element(&Line {
            class: "axis",
            x1: h.y_axis - half_stroke,
            y1: v.x_axis,
            x2: h.chart_right,
            y2: v.x_axis,
        });
        svg.push_element(&Line {
            class: "axis",
            x1: h.y_axis,
            y1: v.chart_top,
            x2: h.y_axis,
            y2: v.x_axis + half_stroke,
        });
    }

    fn push_bars(&self, svg: &mut SvgBuilder, layout: &Layout) {
        let p = self.params;
        let stroke = p.chart_color.to_css();

        for bar in &layout.bars {
            if let (Some(top), Some(height)) = (bar.top, bar.height) {
                svg.push_element(&Rect {
                    x: bar.x,
                    y: top,
                    width: layout.sizing.bar_width,
                    height,
                    fill: Some(bar.fill.clone()),
                    stroke: stroke.clone(),
                    stroke_width: p.stroke_width,
                });
            }

            TextBlock::new(
                "xaxlabel",
                bar.center,
                layout.vertical.x_axis_label,
                layout.sizing.x_label_height,
            )
            .push(svg, &bar.label, None);
        }
    }

    fn push_ticks(svg: &mut SvgBuilder, layout: &Layout) {
        let h = &layout.horizontal;
        for tick in &layout.ticks {
            svg.push_element(&Text::new(
                "yaxlabel",
                h.y_axis_label,
                tick.label_y,
                tick.label.clone(),
            ));
            svg.push_element(&Line {
                class: "tick",
                x1: h.y_axis_tick,
                y1: tick.y,
                x2: h.y_axis,
                y2: tick.y,
            });
        }
    }
}

/// Multi-line text: one `<text>` per line, stepping down by a line height.
struct TextBlock {
    class: &'static str,
    x: f64,
    top: f64,
    line_height: f64,
}

impl TextBlock {
    const fn new(class: &'static str, x: f64, top: f64, line_height: f64) -> Self {
        Self {
            class,
            x,
            top,
            line_height,
        }
    }

    fn push(&self, svg: &mut SvgBuilder, text: &str, fill: Option<&str>) {
        let mut y = self.top;
        for line in text_lines(text) {
            let mut element = Text::new(self.class, self.x, y, line);
            if let Some(fill) = fill {
                element = element.with_fill(fill);
            }
            svg.push_element(&element);
            y += self.line_height;
        }
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
