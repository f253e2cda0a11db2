//! Pre-initialization validation.
//!
//! Validates target directory state before writing the config.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `docsite init` - write into current directory (no config there yet)
    CurrentDir,
    /// `docsite init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: `config_name` must not already exist in `root`
/// - `NewDir`: `root` must not exist
pub fn validate_target(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let config_path = root.join(config_name);
            if config_path.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Use `docsite init <name>` to create in a new subdirectory.",
                    config_path.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}
