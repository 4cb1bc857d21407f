//! `<svg>` document builder: viewBox, display size, and child elements.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;

/// Builder for one chart's `<svg>` element.
///
/// The viewBox always spans the chart's natural size; the displayed
/// `width`/`height` default to the natural size and may be set explicitly.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    view_width: f64,
    view_height: f64,
    width: Option<f64>,
    height: Option<f64>,
    preserve_aspect_ratio: Option<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            view_width,
            view_height,
            width: None,
            height: None,
            preserve_aspect_ratio: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_preserve_aspect_ratio(mut self, value: impl Into<String>) -> Self {
        self.preserve_aspect_ratio = Some(value.into());
        self
    }

    pub fn push_element<E: SvgElement>(&mut self, element: &E) {
        self.elements.push(element.render());
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = write!(
            output,
            r#"<svg viewBox="0 0 {} {}""#,
            self.view_width, self.view_height
        );
        if let Some(par) = &self.preserve_aspect_ratio {
            let _ = write!(output, r#" preserveAspectRatio="{}""#, html_escape(par));
        }
        let _ = writeln!(
            output,
            r#" width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width.unwrap_or(self.view_width),
            self.height.unwrap_or(self.view_height)
        );

        for element in self.elements {
            let _ = writeln!(output, "    {element}");
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
