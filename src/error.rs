use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed input{}: {message}", line_suffix(.line))]
    DataShape {
        line: Option<usize>,
        message: String,
    },

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ChartError {
    /// Data shape error tied to a 1-based input line.
    pub fn data_shape_at(line: usize, message: impl Into<String>) -> Self {
        Self::DataShape {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Data shape error not tied to any input line.
    pub fn data_shape(message: impl Into<String>) -> Self {
        Self::DataShape {
            line: None,
            message: message.into(),
        }
    }

    /// Short category name used by the CLI error printer.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::DataShape { .. } => "DataShape",
            Self::FileAccess { .. } | Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }
}

#[allow(clippy::ref_option)] // thiserror passes fields by reference
fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, ChartError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
