use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use super::*;

const RECORDS: &str = "north\tq1\t10\nnorth\tq2\t20\nsouth\tq1\t5\n";

#[test]
fn cli_overrides_win_over_config() {
    let mut config = Config::default();
    config.chart.bar_spacing = Some(0.75);
    config.multiples.top = Some(10);
    config.svg.scale = Some(3.0);

    let args = RenderArgs {
        bar_spacing: Some(0.2),
        preferred_bar_width: Some(25.0),
        x_axis_title: Some("Quarter".to_string()),
        top: Some(2),
        totals: true,
        width: Some(300.0),
        newline: Some("|".to_string()),
        subject_file: Some(PathBuf::from("subjects.tsv")),
        ..Default::default()
    };
    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.chart.bar_spacing, Some(0.2));
    assert_eq!(config.chart.preferred_bar_width, Some(25.0));
    assert_eq!(config.chart.x_axis_title.as_deref(), Some("Quarter"));
    assert_eq!(config.multiples.top, Some(2));
    assert!(config.multiples.totals);
    assert_eq!(config.svg.width, Some(300.0));
    assert_eq!(config.svg.scale, Some(3.0));
    assert_eq!(config.input.newline.as_deref(), Some("|"));
    assert_eq!(
        config.input.subject_file,
        Some(PathBuf::from("subjects.tsv"))
    );
}

#[test]
fn unset_flags_keep_config_values() {
    let mut config = Config::default();
    config.multiples.sort = true;
    config.multiples.title = Some("From file".to_string());

    apply_cli_overrides(&mut config, &RenderArgs::default());

    assert!(config.multiples.sort);
    assert_eq!(config.multiples.title.as_deref(), Some("From file"));
}

#[test]
fn no_config_flag_returns_defaults() {
    let config = load_config(Some(Path::new("/does/not/exist.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn render_html_document() {
    let mut config = Config::default();
    config.multiples.title = Some("Regions".to_string());
    config.multiples.totals = true;

    let document = render_document(RECORDS, &config, OutputFormat::Html)
        .unwrap()
        .unwrap();
    assert!(document.starts_with("<h2 style=\"font-family: Arial\">Regions (35)</h2>\n<style>"));
    assert!(document.contains(">north (30)</text>"));
    assert_eq!(document.matches("<svg ").count(), 2);
}

#[test]
fn render_json_document() {
    let document = render_document(RECORDS, &Config::default(), OutputFormat::Json)
        .unwrap()
        .unwrap();
    let charts: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(charts.as_array().unwrap().len(), 2);
    assert_eq!(charts[1]["title"], "south");
}

#[test]
fn empty_input_renders_nothing() {
    let document = render_document("\n\n", &Config::default(), OutputFormat::Svg).unwrap();
    assert!(document.is_none());
}

#[test]
fn malformed_input_fails() {
    let err = render_document("north\tq1\n", &Config::default(), OutputFormat::Svg).unwrap_err();
    assert!(matches!(err, ChartError::DataShape { line: Some(1), .. }));
}

#[test]
fn subject_file_colors_charts() {
    let mut subjects = NamedTempFile::new().unwrap();
    writeln!(subjects, "south\tpurple\tSouthern").unwrap();

    let mut config = Config::default();
    config.input.subject_file = Some(subjects.path().to_path_buf());

    let document = render_document(RECORDS, &config, OutputFormat::Svg)
        .unwrap()
        .unwrap();
    assert!(document.contains(r#"fill="purple">Southern</text>"#));
}

#[test]
fn missing_label_file_fails() {
    let mut config = Config::default();
    config.input.label_file = Some(PathBuf::from("/does/not/exist.tsv"));

    let err = render_document(RECORDS, &config, OutputFormat::Svg).unwrap_err();
    assert!(matches!(err, ChartError::FileAccess { .. }));
}
