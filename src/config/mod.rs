//! Site configuration for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Section definitions
//! │   ├── edit_link  # [edit_link]
//! │   ├── sidebar    # [[sidebar]]
//! │   └── social     # [social]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ValidationError
//! │   └── field      # FieldPath
//! ├── util.rs        # URL checks, config discovery
//! └── mod.rs         # SiteConfigBuilder, SiteConfig (this file)
//! ```
//!
//! A config goes through two stages. [`SiteConfigBuilder`] is the raw,
//! deserializable form with public fields. [`SiteConfigBuilder::build`] checks
//! every invariant and produces an immutable [`SiteConfig`], or a
//! [`ValidationError`] listing everything that is wrong.

pub mod section;
pub mod types;
mod util;

pub use section::{
    AutogenerateConfig, EditLinkConfig, SidebarEntry, SidebarGroup, SidebarGroupConfig,
    SocialConfig,
};
pub use types::{ConfigDiagnostic, ConfigError, FieldPath, ValidationError, print_warnings};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{check_absolute_url, find_config_file, join_url};

/// Default config filename
pub const CONFIG_FILE: &str = "docsite.toml";

// ============================================================================
// raw configuration
// ============================================================================

/// Raw configuration as written in `docsite.toml`.
///
/// Key names follow TOML conventions (`last_updated`, `edit_link.base_url`);
/// the camelCase spellings used by the site builder are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfigBuilder {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Social links.
    pub social: SocialConfig,

    /// Navigation groups, in display order.
    pub sidebar: Vec<SidebarGroupConfig>,

    /// Show a "last updated" timestamp on each page.
    #[serde(alias = "lastUpdated")]
    pub last_updated: bool,

    /// "Edit this page" link settings.
    #[serde(alias = "editLink")]
    pub edit_link: Option<EditLinkConfig>,

    /// Deployed origin (e.g., "https://example.github.io").
    pub site: Option<String>,

    /// Path prefix the site is served under.
    pub base: String,
}

impl Default for SiteConfigBuilder {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            social: SocialConfig::default(),
            sidebar: Vec::new(),
            last_updated: false,
            edit_link: None,
            site: None,
            base: "/".into(),
        }
    }
}

pub struct SiteConfigBuilderFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub sidebar: FieldPath,
    pub last_updated: FieldPath,
    pub site: FieldPath,
    pub base: FieldPath,
}

impl SiteConfigBuilder {
    pub const FIELDS: SiteConfigBuilderFields = SiteConfigBuilderFields {
        title: FieldPath::new("title"),
        description: FieldPath::new("description"),
        sidebar: FieldPath::new("sidebar"),
        last_updated: FieldPath::new("last_updated"),
        site: FieldPath::new("site"),
        base: FieldPath::new("base"),
    };

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Read and parse a config file, collecting any unknown fields.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse_with_ignored(&content)
    }

    /// Apply CLI overrides (`--site-url`, `--base`).
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref url) = cli.site_url {
            self.site = Some(url.clone());
        }
        Self::update_option(&mut self.base, cli.base.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Validate every field and produce the immutable descriptor.
    ///
    /// All violations are collected before returning, so one run reports
    /// everything wrong with the config.
    pub fn build(self) -> Result<SiteConfig, ValidationError> {
        let mut diag = ValidationError::new();
        let fields = Self::FIELDS;

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                fields.title,
                "title must not be empty",
                "set title = \"My Docs\"",
            );
        }

        Self::validate_base(&self.base, fields.base, &mut diag);

        if let Some(site) = &self.site {
            Self::validate_site(site, fields.site, &mut diag);
        }

        self.social.validate(&mut diag);
        if let Some(edit_link) = &self.edit_link {
            edit_link.validate(&mut diag);
        }

        let sidebar: Vec<_> = self
            .sidebar
            .into_iter()
            .enumerate()
            .filter_map(|(i, group)| group.validate(fields.sidebar.index(i), &mut diag))
            .collect();

        let warnings = diag.into_result()?;

        Ok(SiteConfig {
            title: self.title,
            description: self.description,
            social: self.social,
            sidebar,
            last_updated: self.last_updated,
            edit_link: self.edit_link,
            site: self.site,
            base: self.base,
            warnings,
        })
    }

    /// # Checks
    /// - absolute http(s) URL with a host
    /// - no query string or fragment, since `base` is appended to it
    /// - a path component is allowed but warned about
    fn validate_site(site: &str, field: FieldPath, diag: &mut ValidationError) {
        let Some(url) = check_absolute_url(site, field.clone(), diag) else {
            return;
        };

        if url.query().is_some() || url.fragment().is_some() {
            diag.error_with_hint(
                field,
                format!("site `{site}` must not carry a query string or fragment"),
                format!("use \"{}\"", url.origin().ascii_serialization()),
            );
        } else if url.path() != "/" {
            diag.warn(
                field,
                format!("site has path `{}`, prefer putting it in `base`", url.path()),
            );
        }
    }

    /// # Checks
    /// - non-empty
    /// - starts with `/`
    /// - no query string or fragment
    fn validate_base(base: &str, field: FieldPath, diag: &mut ValidationError) {
        if base.is_empty() {
            diag.error_with_hint(field, "base must not be empty", "use \"/\" for the site root");
        } else if !base.starts_with('/') {
            diag.error_with_hint(
                field,
                format!("base `{base}` must start with `/`"),
                format!("use \"/{base}\""),
            );
        } else if base.contains(['?', '#']) {
            diag.error(field, format!("base `{base}` must be a plain path"));
        }
    }
}

// ============================================================================
// validated configuration
// ============================================================================

/// Validated, immutable site descriptor.
///
/// Only obtainable through [`SiteConfigBuilder::build`], so every value of
/// this type satisfies the config invariants. Fields hold the authored values
/// verbatim.
#[derive(Debug, PartialEq, Eq)]
pub struct SiteConfig {
    title: String,
    description: String,
    social: SocialConfig,
    sidebar: Vec<SidebarGroup>,
    last_updated: bool,
    edit_link: Option<EditLinkConfig>,
    site: Option<String>,
    base: String,
    warnings: Vec<ConfigDiagnostic>,
}

impl SiteConfig {
    /// Locate, read and build the config selected by CLI arguments.
    ///
    /// Searches upward from cwd for the config file. Returns the resolved
    /// path alongside the descriptor.
    pub fn load(cli: &Cli) -> Result<(PathBuf, Self)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let path = find_config_file(&cli.config, &cwd).ok_or_else(|| {
            anyhow!(
                "Config file '{}' not found. Run 'docsite init' to create one.",
                cli.config.display()
            )
        })?;
        debug!("config"; "using {}", path.display());

        let (mut builder, ignored) = SiteConfigBuilder::from_path(&path)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, &path);
        }

        builder.apply_cli(cli);
        let config = builder.build().map_err(ConfigError::from)?;
        print_warnings(config.warnings());

        Ok((path, config))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn social(&self) -> &SocialConfig {
        &self.social
    }

    /// Navigation groups in authored order.
    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.sidebar
    }

    pub const fn last_updated(&self) -> bool {
        self.last_updated
    }

    pub fn edit_link(&self) -> Option<&EditLinkConfig> {
        self.edit_link.as_ref()
    }

    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Non-fatal diagnostics found during `build()`.
    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Public root URL: `site` followed by `base`.
    ///
    /// # Example
    /// ```ignore
    /// // site = "https://manojnakp.github.io", base = "/scount"
    /// config.effective_root() -> Some("https://manojnakp.github.io/scount")
    /// ```
    pub fn effective_root(&self) -> Option<String> {
        self.site.as_deref().map(|site| join_url(site, &self.base))
    }

    /// Site-relative URL of a route, with the base path prepended.
    pub fn page_url(&self, route: &str) -> String {
        join_url(&self.base, route)
    }

    /// "Edit this page" URL for a source file, if edit links are configured.
    pub fn edit_url(&self, file: &str) -> Option<String> {
        self.edit_link.as_ref().map(|link| link.url_for(file))
    }

    /// Back to the authored form.
    pub fn to_builder(&self) -> SiteConfigBuilder {
        SiteConfigBuilder {
            title: self.title.clone(),
            description: self.description.clone(),
            social: self.social.clone(),
            sidebar: self.sidebar.iter().map(SidebarGroup::to_config).collect(),
            last_updated: self.last_updated,
            edit_link: self.edit_link.clone(),
            site: self.site.clone(),
            base: self.base.clone(),
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// The configuration of the SCount documentation site.
#[cfg(test)]
pub const TEST_CONFIG: &str = r#"
title = "SCount"
description = "Design and documentation for SCount"
last_updated = true
site = "https://manojnakp.github.io"
base = "/scount"

[social]
github = "https://github.com/manojnakp/scount"

[edit_link]
base_url = "https://github.com/manojnakp/scount/edit/main"

[[sidebar]]
label = "Getting Started"
autogenerate = { directory = "intro" }

[[sidebar]]
label = "Design"
autogenerate = { directory = "design" }

[[sidebar]]
label = "API Reference"
link = "/ref/"
"#;

/// Parse a config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfigBuilder {
    let (parsed, ignored) = SiteConfigBuilder::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
