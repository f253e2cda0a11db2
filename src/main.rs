//! docsite command-line entry point.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use docsite::{
    cli::{self, Cli, Commands},
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_config(&cli, name.as_deref(), *dry),
        Commands::Check => cli::check::check_config(&cli),
        Commands::Show { args } => cli::show::show_config(&cli, args),
    }
}
