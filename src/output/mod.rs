mod html;
mod json;
pub mod svg;

pub use html::{HtmlFormatter, SvgFormatter};
pub use json::JsonFormatter;

use crate::chart::{ChartOverrides, SvgOptions};
use crate::error::Result;
use crate::multiples::SmallMultiples;

/// Everything a formatter needs to emit one batch of charts.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub multiples: &'a SmallMultiples,
    /// Chart parameters shared by every chart of the batch
    pub chart: &'a ChartOverrides,
    pub svg: &'a SvgOptions,
    /// Heading of the whole collection
    pub title: Option<&'a str>,
    /// Grand total shown next to the heading, when totals are requested
    pub grand_total: Option<f64>,
}

/// Trait for formatting a chart batch into an output format.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if a chart cannot be sized or serialized.
    fn format(&self, report: &Report<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Svg,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Html => Box::new(HtmlFormatter),
            Self::Svg => Box::new(SvgFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
