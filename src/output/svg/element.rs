//! Primitive SVG elements: rectangles, lines, and text.

use std::fmt::Write;

use super::format::html_escape;

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A rectangle: chart bars and the optional chart border.
#[derive(Debug, Clone)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// CSS fill; `None` renders `fill="none"`
    pub fill: Option<String>,
    pub stroke: String,
    pub stroke_width: f64,
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let fill = self.fill.as_deref().unwrap_or("none");
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}" />"#,
            self.x,
            self.y,
            self.width,
            self.height,
            html_escape(fill),
            html_escape(&self.stroke),
            self.stroke_width
        )
    }
}

/// A straight line styled by a stylesheet class (`axis` or `tick`).
#[derive(Debug, Clone)]
pub struct Line {
    pub class: &'static str,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl SvgElement for Line {
    fn render(&self) -> String {
        format!(
            r#"<line class="{}" x1="{}" y1="{}" x2="{}" y2="{}" />"#,
            self.class, self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// One line of text styled by a stylesheet class.
#[derive(Debug, Clone)]
pub struct Text {
    pub class: &'static str,
    pub x: f64,
    pub y: f64,
    pub content: String,
    /// Optional fill overriding the class color
    pub fill: Option<String>,
}

impl Text {
    #[must_use]
    pub fn new(class: &'static str, x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            class,
            x,
            y,
            content: content.into(),
            fill: None,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        let mut output = String::new();
        let _ = write!(
            output,
            r#"<text class="{}" x="{}" y="{}""#,
            self.class, self.x, self.y
        );
        if let Some(fill) = &self.fill {
            let _ = write!(output, r#" fill="{}""#, html_escape(fill));
        }
        let _ = write!(output, ">{}</text>", html_escape(&self.content));
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
