//! Config initialization.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use std::path::Path;

pub use validate::InitMode;

/// Write a commented config template.
///
/// With `name`, a new directory is created for it; otherwise the config is
/// written into the current directory. If `dry_run` is true, only prints the
/// template to stdout.
pub fn new_config(cli: &Cli, name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };

    init_at(&root, &cli.config, mode)
}

/// Validate the target, then write the config file.
fn init_at(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    validate::validate_target(root, config_name, mode)?;
    config::write_config(root, config_name)?;

    log!("init"; "wrote {}", root.join(config_name).display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let config = Path::new("docsite.toml");
        fs::write(temp.path().join(config), "title = \"Mine\"").unwrap();

        assert!(init_at(temp.path(), config, InitMode::CurrentDir).is_err());
        let content = fs::read_to_string(temp.path().join(config)).unwrap();
        assert_eq!(content, "title = \"Mine\"");
    }

    #[test]
    fn test_init_new_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docs");
        init_at(&root, Path::new("docsite.toml"), InitMode::NewDir).unwrap();
        assert!(root.join("docsite.toml").exists());

        // second run must fail, the directory now exists
        assert!(init_at(&root, Path::new("docsite.toml"), InitMode::NewDir).is_err());
    }
}
