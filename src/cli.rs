use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Output format of `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// TOML, as written in a config file
    #[default]
    Toml,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sm-chart")]
#[command(
    author,
    version,
    about = "Render small-multiple bar charts from (subject, dimension, value) records"
)]
#[command(long_about = "Render small-multiple bar charts from tab-separated \
    (subject, dimension, value) records read from a file or stdin.\n\n\
    Exit codes:\n  \
    0 - Charts were written\n  \
    1 - Input contained no data\n  \
    2 - Configuration, input, or runtime error")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub render: RenderArgs,
}

impl Cli {
    /// Maximum level of emitted log events.
    #[must_use]
    pub const fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderArgs {
    /// Input records file; reads stdin when absent or "-"
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Preferred bar width, in the same units as the chart height
    #[arg(long, value_name = "WIDTH")]
    pub preferred_bar_width: Option<f64>,

    /// Maximum chart width as a multiple of chart height
    #[arg(long, value_name = "ASPECT")]
    pub max_chart_aspect: Option<f64>,

    /// Gap between bars as a fraction of bar width
    #[arg(long, value_name = "FRAC")]
    pub bar_spacing: Option<f64>,

    /// Title for the X axis
    #[arg(long, value_name = "TEXT")]
    pub x_axis_title: Option<String>,

    /// Title for the Y axis
    #[arg(long, value_name = "TEXT")]
    pub y_axis_title: Option<String>,

    /// Show per-chart and grand totals
    #[arg(short, long)]
    pub totals: bool,

    /// Sort charts by total, largest first
    #[arg(short, long)]
    pub sort: bool,

    /// Keep the N largest charts and combine the rest into one
    #[arg(short = 'n', long, value_name = "N")]
    pub top: Option<usize>,

    /// Merge category labels by input order instead of sorting them
    #[arg(long)]
    pub preserve_order: bool,

    /// Display width of each chart
    #[arg(long, value_name = "W")]
    pub width: Option<f64>,

    /// Display height of each chart
    #[arg(long, value_name = "H")]
    pub height: Option<f64>,

    /// Scale each chart's natural size by a factor
    #[arg(long, value_name = "FACTOR")]
    pub scale: Option<f64>,

    /// Heading of the chart collection
    #[arg(long, value_name = "TEXT")]
    pub sm_title: Option<String>,

    /// File mapping subject to color [, title]
    #[arg(long, value_name = "FILE")]
    pub subject_file: Option<PathBuf>,

    /// File mapping dimension value to color [, label]
    #[arg(long, value_name = "FILE")]
    pub label_file: Option<PathBuf>,

    /// Escape sequence treated as a line break in labels, besides \n
    #[arg(long, value_name = "STR")]
    pub newline: Option<String>,

    /// Output format [possible values: html, svg, json]
    #[arg(short, long, default_value = "html")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(default_value = ".sm-chart.toml")]
        file: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
