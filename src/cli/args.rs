//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Typed, validated site configuration for documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml)
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the deployed site origin.
    ///
    /// Useful for CI/CD deployments where the production URL differs from the
    /// one in docsite.toml.
    ///
    /// Example: GitHub Pages project site:
    ///   docsite show --site-url "https://manojnakp.github.io" --base /scount
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Override the base path the site is served under
    #[arg(short = 'B', long, global = true)]
    pub base: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a docsite.toml from template
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate the config and report every problem
    #[command(visible_alias = "c")]
    Check,

    /// Print the validated config as the site builder's JSON
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_overrides() {
        let cli = Cli::try_parse_from([
            "docsite",
            "show",
            "--pretty",
            "-U",
            "https://manojnakp.github.io",
            "--base",
            "/scount",
        ])
        .unwrap();

        assert_eq!(cli.site_url.as_deref(), Some("https://manojnakp.github.io"));
        assert_eq!(cli.base.as_deref(), Some("/scount"));
        assert_eq!(cli.config, PathBuf::from("docsite.toml"));
        assert!(matches!(cli.command, Commands::Show { ref args } if args.pretty));
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["docsite", "init", "docs", "--dry"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Init { name: Some(ref name), dry: true } if name == &PathBuf::from("docs")
        ));
    }
}
