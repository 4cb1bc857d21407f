//! Chart data model.

use serde::Serialize;

use crate::output::svg::ChartColor;

/// A single category of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    /// Category label, may span several lines
    pub label: String,
    /// Bar value; `None` draws no bar but keeps the label
    pub value: Option<f64>,
    /// Optional color override
    pub color: Option<ChartColor>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
            color: None,
        }
    }

    /// A placeholder for a category this chart has no value for.
    #[must_use]
    pub fn absent(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Largest present value of a dataset, `None` when every value is absent.
#[must_use]
pub fn max_value(data: &[DataPoint]) -> Option<f64> {
    data.iter()
        .filter_map(|d| d.value)
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

/// Sum of present values.
#[must_use]
pub fn total(data: &[DataPoint]) -> f64 {
    data.iter().filter_map(|d| d.value).sum()
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
