//! Parsing and validation of loaded configuration content.

use std::path::Path;

use crate::chart::Border;
use crate::config::{ConfigLoader, FileConfigLoader, parse_config};
use crate::error::ChartError;
use crate::output::svg::ChartColor;

use super::mock_fs::MockFileSystem;

#[test]
fn parses_every_section() {
    let content = r##"
[chart]
preferred_bar_width = 30
bar_spacing = 0.3
x_axis_title = "Outcome"
data_color = "--brand"
chart_color = "#333"
border = "none"

[multiples]
sort = true
top = 10
preserve_order = true
totals = true
title = "Comparison"

[svg]
width = 400.0
scale = 1.5
preserve_aspect_ratio = "xMidYMid"

[input]
newline = "|"
subject_file = "subjects.tsv"
"##;

    let config = parse_config(content).unwrap();

    assert_eq!(config.chart.preferred_bar_width, Some(30.0));
    assert_eq!(config.chart.x_axis_title.as_deref(), Some("Outcome"));
    assert_eq!(config.chart.data_color, Some(ChartColor::css_var("brand")));
    assert_eq!(config.chart.chart_color, Some(ChartColor::value("#333")));
    assert_eq!(config.chart.border, Some(Border::None));
    assert!(config.multiples.sort);
    assert_eq!(config.multiples.top, Some(10));
    assert_eq!(config.multiples.title.as_deref(), Some("Comparison"));
    assert_eq!(config.svg.width, Some(400.0));
    assert_eq!(config.svg.preserve_aspect_ratio.as_deref(), Some("xMidYMid"));
    assert_eq!(config.input.newline.as_deref(), Some("|"));
    assert_eq!(
        config.input.subject_file.as_deref(),
        Some(Path::new("subjects.tsv"))
    );
}

#[test]
fn empty_content_is_default() {
    let config = parse_config("").unwrap();
    assert_eq!(config.svg.preserve_aspect_ratio.as_deref(), Some("xMinYMin"));
    assert!(config.chart.bar_spacing.is_none());
}

#[test]
fn unknown_section_rejected() {
    let err = parse_config("[charts]\nbar_spacing = 1.0\n").unwrap_err();
    assert!(matches!(err, ChartError::TomlParse(_)));
}

#[test]
fn unknown_chart_field_rejected() {
    let err = parse_config("[chart]\nbar_gap = 1.0\n").unwrap_err();
    assert!(matches!(err, ChartError::TomlParse(_)));
}

#[test]
fn invalid_values_rejected_on_load() {
    let fs = MockFileSystem::new().with_file("/project/.sm-chart.toml", "[chart]\nmax_aspect = 0\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
    assert!(err.to_string().contains("chart.max_aspect"));
}
