//! Configuration file generation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Body of a new config file. Must build without errors.
const TEMPLATE_BODY: &str = r#"# Site title shown in the header and browser tab.
title = "My Docs"

# Short summary used for the meta description.
description = ""

# Show a "last updated" timestamp on every page.
last_updated = false

# Deployed origin, e.g. "https://example.github.io".
# site = "https://example.com"

# Path prefix the site is served under. Must start with "/".
base = "/"

[social]
# github = "https://github.com/owner/repo"

# [edit_link]
# base_url = "https://github.com/owner/repo/edit/main"

# Navigation groups, displayed in order. Each group sets exactly one of
# `autogenerate` (entries from a content directory) or `link`.
[[sidebar]]
label = "Getting Started"
autogenerate = { directory = "intro" }

[[sidebar]]
label = "Reference"
link = "/reference/"
"#;

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str(TEMPLATE_BODY);
    out
}

/// Write the default config into `root`, creating the directory if needed.
pub fn write_config(root: &Path, config_name: &Path) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    let path = root.join(config_name);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}
