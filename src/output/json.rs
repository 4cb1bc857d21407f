use super::{OutputFormatter, Report};
use crate::error::Result;

/// Pretty JSON array of every chart's title and resolved geometry.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let layouts = report.multiples.layouts(report.chart)?;
        Ok(serde_json::to_string_pretty(&layouts)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
