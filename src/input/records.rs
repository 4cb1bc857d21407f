//! Tab-separated `(subject, dimension, value)` records.

use indexmap::IndexMap;

use super::lookup::LookupMap;
use crate::chart::{ChartOverrides, DataPoint};
use crate::error::{ChartError, Result};
use crate::multiples::SmallMultipleEntry;

/// How raw records become chart entries.
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    /// Extra escape sequence that, like `\n`, stands for a line break in labels
    pub newline: Option<String>,
    /// Subject -> chart color and title
    pub subjects: LookupMap,
    /// Dimension -> bar color and display label
    pub labels: LookupMap,
}

/// Entries grouped by subject in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    pub entries: Vec<SmallMultipleEntry>,
    /// Sum of every value in the input
    pub grand_total: f64,
}

/// Parse records, one per line, into one entry per subject.
///
/// # Errors
/// Returns a data shape error, with its line number, for a line that does not
/// hold exactly three tab-separated fields or whose value is not a finite
/// number.
pub fn parse_records(text: &str, options: &InputOptions) -> Result<ParsedInput> {
    let mut subjects: IndexMap<String, SmallMultipleEntry> = IndexMap::new();
    let mut grand_total = 0.0;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let [subject, dimension, value] = fields.as_slice() else {
            return Err(ChartError::data_shape_at(
                line_number,
                format!(
                    "expected (subject, dimension, value), found {} field(s)",
                    fields.len()
                ),
            ));
        };
        let value = parse_value(value, line_number)?;

        let entry = subjects
            .entry(subject.to_string())
            .or_insert_with(|| new_entry(subject, &options.subjects));
        entry.data.push(data_point(dimension, value, options));
        entry.total += value;
        grand_total += value;
    }

    tracing::debug!(subjects = subjects.len(), grand_total, "parsed input records");
    Ok(ParsedInput {
        entries: subjects.into_values().collect(),
        grand_total,
    })
}

fn parse_value(text: &str, line_number: usize) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ChartError::data_shape_at(
            line_number,
            format!("'{text}' is not a finite number"),
        )),
    }
}

fn new_entry(subject: &str, lookup: &LookupMap) -> SmallMultipleEntry {
    let mapped = lookup.get(subject);
    let title = mapped
        .and_then(|m| m.label.clone())
        .unwrap_or_else(|| subject.to_string());
    let overrides = ChartOverrides {
        data_color: mapped.map(|m| m.color.clone()),
        ..Default::default()
    };
    SmallMultipleEntry::new(title, Vec::new()).with_overrides(overrides)
}

fn data_point(dimension: &str, value: f64, options: &InputOptions) -> DataPoint {
    let mapped = options.labels.get(dimension);
    let label = mapped
        .and_then(|m| m.label.as_deref())
        .unwrap_or(dimension);
    let point = DataPoint::new(unescape_newlines(label, options.newline.as_deref()), value);
    match mapped {
        Some(m) => point.with_color(m.color.clone()),
        None => point,
    }
}

/// Replace the literal escape `\n`, and `extra` when given, with line breaks.
#[must_use]
pub fn unescape_newlines(text: &str, extra: Option<&str>) -> String {
    let unescaped = text.replace("\\n", "\n");
    match extra {
        Some(escape) if !escape.is_empty() => unescaped.replace(escape, "\n"),
        _ => unescaped,
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
