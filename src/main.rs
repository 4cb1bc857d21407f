use clap::Parser;

use sm_chart::cli::{Cli, Commands};
use sm_chart::commands::{run_config, run_render};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let exit_code = match &cli.command {
        Some(Commands::Config(args)) => run_config(args, &cli),
        None => run_render(&cli.render, &cli),
    };

    std::process::exit(exit_code);
}
