use std::fmt::Write;

use super::svg::{format_total, html_escape};
use super::{OutputFormatter, Report};
use crate::error::Result;

/// Collection heading followed by the style block and every chart.
pub struct HtmlFormatter;

/// Style block and charts only, for embedding in an existing page.
pub struct SvgFormatter;

impl OutputFormatter for HtmlFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let mut output = String::new();
        if let Some(heading) = heading(report) {
            let _ = writeln!(
                output,
                r#"<h2 style="font-family: Arial">{}</h2>"#,
                html_escape(&heading)
            );
        }
        output.push_str(&report.multiples.render(report.chart, report.svg)?);
        Ok(output)
    }
}

impl OutputFormatter for SvgFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        report.multiples.render(report.chart, report.svg)
    }
}

/// Collection title with the grand total appended; `None` when both are absent.
fn heading(report: &Report<'_>) -> Option<String> {
    let title = report.title.unwrap_or_default();
    let heading = match report.grand_total {
        Some(total) if title.is_empty() => format!("({})", format_total(total)),
        Some(total) => format!("{title} ({})", format_total(total)),
        None => title.to_string(),
    };
    (!heading.is_empty()).then_some(heading)
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
