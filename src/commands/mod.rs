pub mod config;
pub mod render;

pub use config::{run_config, run_config_show_impl, run_config_validate_impl};
pub use render::{apply_cli_overrides, load_config, render_document, run_render};

use crate::ChartError;

/// Report a failed command on stderr.
pub fn print_error(error: &ChartError) {
    eprintln!("Error ({}): {error}", error.error_type());
}
