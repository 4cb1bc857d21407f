//! SVG styling primitives: colors, text anchoring, and the shared class stylesheet.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

/// Color specification: any CSS color value, or a CSS variable reference.
///
/// Strings starting with `--` deserialize to [`ChartColor::CssVar`]
/// (`"--accent"` renders as `var(--accent)`); everything else is used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartColor {
    /// Literal CSS color (e.g., "black", "#0099ff")
    Value(String),
    /// CSS custom property name without the leading dashes
    CssVar(String),
}

impl ChartColor {
    #[must_use]
    pub fn value(color: &str) -> Self {
        Self::Value(color.to_string())
    }

    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Value(v) => v.clone(),
            Self::CssVar(name) => format!("var(--{name})"),
        }
    }
}

impl From<String> for ChartColor {
    fn from(s: String) -> Self {
        s.strip_prefix("--")
            .map_or_else(|| Self::Value(s.clone()), |name| Self::CssVar(name.to_string()))
    }
}

impl From<ChartColor> for String {
    fn from(color: ChartColor) -> Self {
        match color {
            ChartColor::Value(v) => v,
            ChartColor::CssVar(name) => format!("--{name}"),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// The `<style>` block shared by every chart of one rendering.
///
/// Class names are part of the output contract: `.axis`, `.tick`, `.ctitle`,
/// `.axlabel`, `.xaxlabel`, `.yaxlabel`.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub chart_color: ChartColor,
    pub axis_stroke_width: f64,
    pub tick_stroke_width: f64,
    pub title_font_family: String,
    pub title_font_size: f64,
    pub label_font_family: String,
    pub label_font_size: f64,
    pub x_label_font_size: f64,
}

impl StyleSheet {
    #[must_use]
    pub fn render(&self) -> String {
        let color = self.chart_color.to_css();
        let title_family = &self.title_font_family;
        let label_family = &self.label_font_family;

        let mut output = String::from("<style>\n");
        let _ = writeln!(
            output,
            ".axis {{ stroke: {color}; stroke-width: {}; }}",
            self.axis_stroke_width
        );
        let _ = writeln!(
            output,
            ".tick {{ stroke: {color}; stroke-width: {}; }}",
            self.tick_stroke_width
        );
        let _ = writeln!(
            output,
            ".ctitle {{ font-family: \"{title_family}\"; font-size: {}; text-anchor: {}; }}",
            self.title_font_size,
            TextAnchor::Middle
        );
        let _ = writeln!(
            output,
            ".axlabel {{ font-family: \"{label_family}\"; font-size: {}; text-anchor: {}; fill: {color}; }}",
            self.label_font_size,
            TextAnchor::Middle
        );
        let _ = writeln!(
            output,
            ".xaxlabel {{ font-family: \"{label_family}\"; font-size: {}; text-anchor: {}; fill: {color}; }}",
            self.x_label_font_size,
            TextAnchor::Middle
        );
        let _ = writeln!(
            output,
            ".yaxlabel {{ font-family: \"{label_family}\"; font-size: {}; text-anchor: {}; fill: {color}; }}",
            self.label_font_size,
            TextAnchor::Start
        );
        output.push_str("</style>\n");
        output
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
