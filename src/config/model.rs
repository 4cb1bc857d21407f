use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::chart::{ChartOverrides, SvgOptions};
use crate::multiples::MultiplesOptions;

/// Contents of an `sm-chart` configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Parameters shared by every chart
    pub chart: ChartOverrides,
    pub multiples: MultiplesConfig,
    pub svg: SvgOptions,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct MultiplesConfig {
    pub sort: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,
    pub preserve_order: bool,
    pub totals: bool,
    /// Heading of the whole chart collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MultiplesConfig {
    #[must_use]
    pub const fn options(&self) -> MultiplesOptions {
        MultiplesOptions {
            sort: self.sort,
            top: self.top,
            preserve_order: self.preserve_order,
            totals: self.totals,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Escape sequence treated as a line break in labels, besides `\n`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newline: Option<String>,
    /// Subject lookup table: `subject<TAB>color[<TAB>title]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_file: Option<PathBuf>,
    /// Dimension lookup table: `dimension<TAB>color[<TAB>label]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_file: Option<PathBuf>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
