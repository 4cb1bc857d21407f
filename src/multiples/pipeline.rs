//! Small-multiples pipeline: scan, merge, sort, aggregate, render.
//!
//! Every chart of a batch shares the merged label axis, the global data
//! maximum, and the title line count, so bars and plotting areas line up
//! across charts.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

use super::entry::SmallMultipleEntry;
use super::merge::merge_labels;
use crate::chart::{
    BarChart, ChartOverrides, ChartParameters, DataPoint, Layout, SvgOptions, line_count, max_value,
};
use crate::error::{ChartError, Result};
use crate::output::svg::format_total;

/// Batch-wide behavior of the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct MultiplesOptions {
    /// Order charts by total, descending
    pub sort: bool,
    /// Keep the N largest charts and aggregate the rest; implies `sort`
    pub top: Option<usize>,
    /// Merge labels by their input order instead of sorting them
    pub preserve_order: bool,
    /// Append each chart's total to its title
    pub totals: bool,
}

/// Resolved geometry of one chart, as emitted by the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: String,
    pub layout: Layout,
}

/// A batch of charts ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SmallMultiples {
    /// Unified category axis shared by every chart
    pub labels: Vec<String>,
    pub entries: Vec<SmallMultipleEntry>,
    /// Largest present value across the batch
    pub data_max: Option<f64>,
    /// Largest title line count across the batch
    pub title_lines: usize,
    totals: bool,
}

/// Statistics gathered before any entry is modified.
struct Scan {
    data_max: Option<f64>,
    title_lines: usize,
}

impl SmallMultiples {
    /// Validate and prepare `entries` for rendering.
    ///
    /// # Errors
    /// Returns a data shape error if a value is not finite or a label occurs
    /// twice within one entry. No entry is rendered in that case.
    pub fn prepare(
        mut entries: Vec<SmallMultipleEntry>,
        options: &MultiplesOptions,
    ) -> Result<Self> {
        let scan = scan(&mut entries)?;
        let mut data_max = scan.data_max;

        let sequences: Vec<Vec<String>> = entries.iter().map(SmallMultipleEntry::labels).collect();
        let labels = merge_labels(&sequences, options.preserve_order);
        tracing::debug!(
            charts = entries.len(),
            labels = labels.len(),
            preserve_order = options.preserve_order,
            "merged labels"
        );
        for entry in &mut entries {
            reindex(entry, &labels);
        }

        if options.sort || options.top.is_some() {
            sort_by_total(&mut entries);
        }
        if let Some(top) = options.top
            && top + 1 < entries.len()
        {
            let rest = entries.split_off(top);
            tracing::debug!(kept = top, aggregated = rest.len(), "aggregating smaller charts");
            let others = aggregate(&rest, &labels);
            // raises the scan-time maximum: summed values may outgrow every single chart
            if let Some(max) = max_value(&others.data) {
                data_max = Some(data_max.map_or(max, |m| m.max(max)));
            }
            entries.push(others);
        }

        Ok(Self {
            labels,
            entries,
            data_max,
            title_lines: scan.title_lines,
            totals: options.totals,
        })
    }

    /// Number of charts that will be emitted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Displayed title of an entry, with its total when requested.
    #[must_use]
    pub fn display_title(&self, entry: &SmallMultipleEntry) -> String {
        if self.totals && entry.total.abs() > 0.0 {
            format!("{} ({})", entry.title, format_total(entry.total))
        } else {
            entry.title.clone()
        }
    }

    /// Parameters of one chart: `base` overridden by the entry's own overrides.
    #[must_use]
    pub fn chart_parameters(
        &self,
        entry: &SmallMultipleEntry,
        base: &ChartOverrides,
    ) -> ChartParameters {
        let mut params = ChartParameters::with_overrides(&base.layered(&entry.overrides));
        params.title = Some(self.display_title(entry));
        params.title_lines = Some(self.title_lines);
        params
    }

    fn chart<'a>(&self, params: &'a ChartParameters, data: &'a [DataPoint]) -> BarChart<'a> {
        let chart = BarChart::new(params, data);
        match self.data_max {
            Some(max) => chart.with_data_max(max),
            None => chart,
        }
    }

    /// One shared style block followed by one `<svg>` per chart.
    ///
    /// # Errors
    /// Returns an error if a chart cannot be sized.
    pub fn render(&self, base: &ChartOverrides, svg: &SvgOptions) -> Result<String> {
        let mut output = String::new();
        for (index, entry) in self.entries.iter().enumerate() {
            let params = self.chart_parameters(entry, base);
            let chart = self.chart(&params, &entry.data);
            if index == 0 {
                output.push_str(&chart.render_style()?);
            }
            output.push_str(&chart.render_svg(svg)?);
            tracing::trace!(title = %entry.title, "rendered chart");
        }
        Ok(output)
    }

    /// Resolved geometry of every chart.
    ///
    /// # Errors
    /// Returns an error if a chart cannot be sized.
    pub fn layouts(&self, base: &ChartOverrides) -> Result<Vec<ChartLayout>> {
        self.entries
            .iter()
            .map(|entry| {
                let params = self.chart_parameters(entry, base);
                let layout = self.chart(&params, &entry.data).layout()?;
                Ok(ChartLayout {
                    title: params.title.unwrap_or_default(),
                    layout,
                })
            })
            .collect()
    }
}

/// Validate every entry, refresh totals, and collect batch-wide statistics.
fn scan(entries: &mut [SmallMultipleEntry]) -> Result<Scan> {
    let mut data_max: Option<f64> = None;
    let mut title_lines = 0;

    for entry in entries.iter_mut() {
        let mut seen = HashSet::new();
        let mut total = 0.0;
        for point in &entry.data {
            if !seen.insert(point.label.as_str()) {
                return Err(ChartError::data_shape(format!(
                    "label '{}' occurs more than once in '{}'",
                    point.label, entry.title
                )));
            }
            let Some(value) = point.value else {
                continue;
            };
            if !value.is_finite() {
                return Err(ChartError::data_shape(format!(
                    "value of '{}' in '{}' is not a finite number",
                    point.label, entry.title
                )));
            }
            data_max = Some(data_max.map_or(value, |m| m.max(value)));
            total += value;
        }
        entry.total = total;
        title_lines = title_lines.max(line_count(Some(&entry.title)));
    }

    Ok(Scan {
        data_max,
        title_lines,
    })
}

/// Lay an entry's data out on the unified labels, filling gaps with absent points.
fn reindex(entry: &mut SmallMultipleEntry, labels: &[String]) {
    let mut by_label: IndexMap<String, DataPoint> = entry
        .data
        .drain(..)
        .map(|point| (point.label.clone(), point))
        .collect();
    entry.data = labels
        .iter()
        .map(|label| {
            by_label
                .swap_remove(label)
                .unwrap_or_else(|| DataPoint::absent(label.clone()))
        })
        .collect();
}

fn sort_by_total(entries: &mut [SmallMultipleEntry]) {
    entries.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.title.cmp(&b.title))
    });
}

/// Sum reindexed entries into one "+ K others" entry.
///
/// A label stays absent only if it is absent in every aggregated entry.
fn aggregate(rest: &[SmallMultipleEntry], labels: &[String]) -> SmallMultipleEntry {
    let data = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let points: Vec<&DataPoint> = rest.iter().filter_map(|e| e.data.get(i)).collect();
            let value = points
                .iter()
                .filter_map(|p| p.value)
                .fold(None, |acc: Option<f64>, v| Some(acc.unwrap_or(0.0) + v));
            DataPoint {
                label: label.clone(),
                value,
                color: points.iter().find_map(|p| p.color.clone()),
            }
        })
        .collect();

    let mut others = SmallMultipleEntry::new(format!("+ {} others", rest.len()), data);
    others.total = rest.iter().map(|e| e.total).sum();
    others
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
