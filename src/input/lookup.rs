//! Color and display-label lookup tables keyed by subject or dimension.
//!
//! File format, one mapping per line: `key<TAB>color[<TAB>label]`. Lines with
//! fewer than two fields are ignored.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::output::svg::ChartColor;

/// One row of a lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEntry {
    pub color: ChartColor,
    /// Replacement display text
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupMap {
    entries: HashMap<String, LookupEntry>,
}

impl LookupMap {
    /// Parse lookup table text. Later rows win over earlier rows with the same key.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|line| {
                let mut fields = line.trim().split('\t');
                let key = fields.next()?;
                let color = fields.next()?;
                let entry = LookupEntry {
                    color: ChartColor::from(color.to_string()),
                    label: fields.next().map(str::to_string),
                };
                Some((key.to_string(), entry))
            })
            .collect();
        Self { entries }
    }

    /// Read and parse a lookup table file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ChartError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&text);
        tracing::debug!(path = %path.display(), entries = map.len(), "loaded lookup table");
        Ok(map)
    }

    /// Load `path` when given, otherwise an empty table.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&LookupEntry> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "lookup_tests.rs"]
mod tests;
