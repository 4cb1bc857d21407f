use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config};
use crate::input::{InputOptions, LookupMap, parse_records};
use crate::multiples::SmallMultiples;
use crate::output::{OutputFormat, Report};
use crate::{ChartError, EXIT_ERROR, EXIT_NO_DATA, EXIT_SUCCESS, Result};

use super::print_error;

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_ERROR
        }
    }
}

fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    // 3. Read records and render
    let input = read_input(args.input.as_deref())?;
    let Some(document) = render_document(&input, &config, args.format)? else {
        tracing::warn!("input contains no records, nothing to render");
        return Ok(EXIT_NO_DATA);
    };

    // 4. Write output
    write_output(args.output.as_deref(), &document)?;
    Ok(EXIT_SUCCESS)
}

/// Load the explicit config file, or discover one, unless loading is disabled.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed, or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Command-line flags win over the configuration file.
pub fn apply_cli_overrides(config: &mut Config, args: &RenderArgs) {
    let chart = &mut config.chart;
    if let Some(width) = args.preferred_bar_width {
        chart.preferred_bar_width = Some(width);
    }
    if let Some(aspect) = args.max_chart_aspect {
        chart.max_aspect = Some(aspect);
    }
    if let Some(spacing) = args.bar_spacing {
        chart.bar_spacing = Some(spacing);
    }
    if let Some(title) = &args.x_axis_title {
        chart.x_axis_title = Some(title.clone());
    }
    if let Some(title) = &args.y_axis_title {
        chart.y_axis_title = Some(title.clone());
    }

    let multiples = &mut config.multiples;
    multiples.totals |= args.totals;
    multiples.sort |= args.sort;
    multiples.preserve_order |= args.preserve_order;
    if args.top.is_some() {
        multiples.top = args.top;
    }
    if let Some(title) = &args.sm_title {
        multiples.title = Some(title.clone());
    }

    let svg = &mut config.svg;
    if args.width.is_some() {
        svg.width = args.width;
    }
    if args.height.is_some() {
        svg.height = args.height;
    }
    if args.scale.is_some() {
        svg.scale = args.scale;
    }

    let input = &mut config.input;
    if let Some(newline) = &args.newline {
        input.newline = Some(newline.clone());
    }
    if let Some(path) = &args.subject_file {
        input.subject_file = Some(path.clone());
    }
    if let Some(path) = &args.label_file {
        input.label_file = Some(path.clone());
    }
}

/// Render input records into a complete document.
///
/// Returns `None` when the input holds no records.
///
/// # Errors
/// Returns an error if a lookup table cannot be read, the input is malformed,
/// or a chart cannot be sized.
pub fn render_document(
    input: &str,
    config: &Config,
    format: OutputFormat,
) -> Result<Option<String>> {
    let options = InputOptions {
        newline: config.input.newline.clone(),
        subjects: LookupMap::load_optional(config.input.subject_file.as_deref())?,
        labels: LookupMap::load_optional(config.input.label_file.as_deref())?,
    };
    let parsed = parse_records(input, &options)?;
    if parsed.entries.is_empty() {
        return Ok(None);
    }

    let multiples = SmallMultiples::prepare(parsed.entries, &config.multiples.options())?;
    let report = Report {
        multiples: &multiples,
        chart: &config.chart,
        svg: &config.svg,
        title: config.multiples.title.as_deref(),
        grand_total: config.multiples.totals.then_some(parsed.grand_total),
    };
    tracing::info!(charts = multiples.len(), format = ?format, "rendering charts");
    format.formatter().format(&report).map(Some)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| ChartError::FileAccess {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "wrote output");
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
