//! One chart of a small-multiples batch.

use serde::Serialize;

use crate::chart::{ChartOverrides, DataPoint, total};

/// Title, dataset, and per-chart parameter overrides of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmallMultipleEntry {
    pub title: String,
    pub data: Vec<DataPoint>,
    /// Sum of present values
    pub total: f64,
    /// Overrides applied on top of the batch-wide parameters
    pub overrides: ChartOverrides,
}

impl SmallMultipleEntry {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        let total = total(&data);
        Self {
            title: title.into(),
            data,
            total,
            overrides: ChartOverrides::default(),
        }
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: ChartOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Labels in dataset order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.data.iter().map(|d| d.label.clone()).collect()
    }
}
