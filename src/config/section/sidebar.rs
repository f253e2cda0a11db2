//! `[[sidebar]]` navigation groups.
//!
//! Each group is either generated from a content directory or a single link:
//!
//! ```toml
//! [[sidebar]]
//! label = "Getting Started"
//! autogenerate = { directory = "intro" }
//!
//! [[sidebar]]
//! label = "API Reference"
//! link = "/ref/"
//! ```
//!
//! The file format carries two optional keys per group ([`SidebarGroupConfig`]);
//! a validated group holds exactly one [`SidebarEntry`].

use crate::config::{FieldPath, ValidationError, util::join_url};
use serde::{Deserialize, Serialize};

// ============================================================================
// Raw form (as written in docsite.toml)
// ============================================================================

/// Sidebar group as authored, before the one-of check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarGroupConfig {
    /// Display text.
    pub label: String,

    /// Derive entries from a content directory.
    pub autogenerate: Option<AutogenerateConfig>,

    /// Single static navigation link.
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutogenerateConfig {
    /// Content directory, relative to the docs collection root.
    pub directory: String,
}

impl SidebarGroupConfig {
    /// Group deriving its entries from `directory`.
    pub fn autogenerate(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            autogenerate: Some(AutogenerateConfig {
                directory: directory.into(),
            }),
            link: None,
        }
    }

    /// Group consisting of a single link.
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            autogenerate: None,
            link: Some(path.into()),
        }
    }

    /// Check the group and convert it into its validated form.
    ///
    /// Returns `None` (with errors pushed onto `diag`) if the group is invalid.
    pub fn validate(self, field: FieldPath, diag: &mut ValidationError) -> Option<SidebarGroup> {
        let errors_before = diag.len();

        if self.label.trim().is_empty() {
            diag.error(field.child("label"), "label must not be empty");
        }

        let entry = match (self.autogenerate, self.link) {
            (Some(_), Some(_)) => {
                diag.error_with_hint(
                    field.clone(),
                    "group sets both `autogenerate` and `link`",
                    "keep exactly one of them",
                );
                None
            }
            (None, None) => {
                diag.error_with_hint(
                    field.clone(),
                    "group sets neither `autogenerate` nor `link`",
                    "add `autogenerate = { directory = \"...\" }` or `link = \"/path/\"`",
                );
                None
            }
            (Some(auto), None) => {
                let dir_field = field.child("autogenerate").child("directory");
                if auto.directory.trim().is_empty() {
                    diag.error(dir_field, "directory must not be empty");
                } else if auto.directory.starts_with('/') {
                    diag.error_with_hint(
                        dir_field,
                        format!("directory `{}` must be relative", auto.directory),
                        format!("use \"{}\"", auto.directory.trim_start_matches('/')),
                    );
                }
                Some(SidebarEntry::Autogenerate {
                    directory: auto.directory,
                })
            }
            (None, Some(path)) => {
                if path.trim().is_empty() {
                    diag.error(field.child("link"), "link must not be empty");
                }
                Some(SidebarEntry::Link { path })
            }
        };

        if diag.len() > errors_before {
            return None;
        }

        entry.map(|entry| SidebarGroup {
            label: self.label,
            entry,
        })
    }
}

// ============================================================================
// Validated form
// ============================================================================

/// What a sidebar group points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarEntry {
    /// Entries derived from a content directory.
    Autogenerate { directory: String },
    /// A single navigation link (site-relative path or absolute URL).
    Link { path: String },
}

/// A validated navigation group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarGroup {
    label: String,
    entry: SidebarEntry,
}

impl SidebarGroup {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entry(&self) -> &SidebarEntry {
        &self.entry
    }

    /// Resolved link target under `base`.
    ///
    /// Site-relative links get the base path prepended, absolute URLs and
    /// relative links are returned unchanged. Autogenerated groups have none.
    pub fn href(&self, base: &str) -> Option<String> {
        match &self.entry {
            SidebarEntry::Autogenerate { .. } => None,
            SidebarEntry::Link { path } if path.starts_with('/') => Some(join_url(base, path)),
            SidebarEntry::Link { path } => Some(path.clone()),
        }
    }

    /// Back to the authored form.
    pub fn to_config(&self) -> SidebarGroupConfig {
        match &self.entry {
            SidebarEntry::Autogenerate { directory } => {
                SidebarGroupConfig::autogenerate(&self.label, directory)
            }
            SidebarEntry::Link { path } => SidebarGroupConfig::link(&self.label, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(group: SidebarGroupConfig) -> (Option<SidebarGroup>, ValidationError) {
        let mut diag = ValidationError::new();
        let result = group.validate(FieldPath::new("sidebar").index(0), &mut diag);
        (result, diag)
    }

    #[test]
    fn test_autogenerate_group() {
        let (group, diag) = validate(SidebarGroupConfig::autogenerate("Design", "design"));
        assert!(diag.is_empty());
        let group = group.unwrap();
        assert_eq!(group.label(), "Design");
        assert_eq!(
            group.entry(),
            &SidebarEntry::Autogenerate {
                directory: "design".into()
            }
        );
        assert_eq!(group.href("/scount"), None);
    }

    #[test]
    fn test_link_group() {
        let (group, diag) = validate(SidebarGroupConfig::link("API Reference", "/ref/"));
        assert!(diag.is_empty());
        let group = group.unwrap();
        assert_eq!(group.entry(), &SidebarEntry::Link { path: "/ref/".into() });
        assert_eq!(group.href("/scount").as_deref(), Some("/scount/ref/"));
        assert_eq!(group.href("/").as_deref(), Some("/ref/"));
    }

    #[test]
    fn test_external_link_unchanged() {
        let (group, _) = validate(SidebarGroupConfig::link("Repo", "https://github.com/x/y"));
        assert_eq!(
            group.unwrap().href("/scount").as_deref(),
            Some("https://github.com/x/y")
        );
    }

    #[test]
    fn test_both_set() {
        let mut raw = SidebarGroupConfig::autogenerate("Mixed", "intro");
        raw.link = Some("/ref/".into());

        let (group, diag) = validate(raw);
        assert!(group.is_none());
        assert!(diag.has_error_at("sidebar[0]"));
    }

    #[test]
    fn test_neither_set() {
        let raw = SidebarGroupConfig {
            label: "Empty".into(),
            ..Default::default()
        };

        let (group, diag) = validate(raw);
        assert!(group.is_none());
        assert!(diag.has_error_at("sidebar[0]"));
    }

    #[test]
    fn test_empty_label() {
        let (group, diag) = validate(SidebarGroupConfig::link("  ", "/ref/"));
        assert!(group.is_none());
        assert!(diag.has_error_at("sidebar[0].label"));
    }

    #[test]
    fn test_absolute_directory() {
        let (group, diag) = validate(SidebarGroupConfig::autogenerate("Intro", "/intro"));
        assert!(group.is_none());
        assert!(diag.has_error_at("sidebar[0].autogenerate.directory"));
    }

    #[test]
    fn test_empty_link() {
        let (group, diag) = validate(SidebarGroupConfig::link("Ref", ""));
        assert!(group.is_none());
        assert!(diag.has_error_at("sidebar[0].link"));
    }

    #[test]
    fn test_to_config_roundtrip() {
        let raw = SidebarGroupConfig::link("API Reference", "/ref/");
        let (group, _) = validate(raw.clone());
        assert_eq!(group.unwrap().to_config(), raw);
    }
}
