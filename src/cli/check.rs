//! `docsite check`: validate the config and summarize it.

use crate::{cli::Cli, config::SiteConfig, log};
use anyhow::Result;

pub fn check_config(cli: &Cli) -> Result<()> {
    let (path, config) = SiteConfig::load(cli)?;

    log!("check"; "{} is valid", path.display());
    for line in summary(&config) {
        log!("check"; "{}", line);
    }
    Ok(())
}

/// Human-readable lines describing a validated config.
fn summary(config: &SiteConfig) -> Vec<String> {
    let groups = config.sidebar().len();
    let mut lines = vec![
        format!("title: {}", config.title()),
        format!(
            "sidebar: {} group{}",
            groups,
            if groups == 1 { "" } else { "s" }
        ),
    ];

    match config.effective_root() {
        Some(root) => lines.push(format!("root: {root}")),
        None => lines.push(format!("base: {}", config.base())),
    }

    let warnings = config.warnings().len();
    if warnings > 0 {
        lines.push(format!(
            "{} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        ));
    }

    lines
}
