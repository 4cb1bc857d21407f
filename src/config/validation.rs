//! Configuration semantic validation.
//!
//! Checks value ranges that TOML parsing alone cannot express.

use crate::chart::Border;
use crate::config::Config;
use crate::{ChartError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error naming the first field whose value is out of range.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_chart_section(config)?;
    validate_svg_section(config)?;
    Ok(())
}

fn validate_chart_section(config: &Config) -> Result<()> {
    let chart = &config.chart;

    require_positive("chart.chart_height", chart.chart_height)?;
    require_positive("chart.max_aspect", chart.max_aspect)?;
    require_positive("chart.preferred_bar_width", chart.preferred_bar_width)?;
    require_positive("chart.chart_width", chart.chart_width)?;
    require_non_negative("chart.bar_spacing", chart.bar_spacing)?;
    require_non_negative("chart.stroke_width", chart.stroke_width)?;
    require_non_negative("chart.axis_tick_thickness", chart.axis_tick_thickness)?;
    if let Some(Border::Width(width)) = chart.border {
        require_non_negative("chart.border.width", Some(width))?;
    }
    Ok(())
}

fn validate_svg_section(config: &Config) -> Result<()> {
    require_positive("svg.width", config.svg.width)?;
    require_positive("svg.height", config.svg.height)?;
    require_positive("svg.scale", config.svg.scale)?;
    Ok(())
}

fn require_positive(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if v.is_nan() || v <= 0.0 => Err(ChartError::Config(format!(
            "{field} must be greater than 0, got {v}"
        ))),
        _ => Ok(()),
    }
}

fn require_non_negative(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if v.is_nan() || v < 0.0 => Err(ChartError::Config(format!(
            "{field} must be 0 or greater, got {v}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
