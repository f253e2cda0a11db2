//! `[social]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [social]
//! github = "https://github.com/manojnakp/scount"
//! ```

use crate::config::{FieldPath, ValidationError, util::check_absolute_url};
use serde::{Deserialize, Serialize};

/// Hosts recognised as source-hosting services (matched as domain suffixes).
const SOURCE_HOSTS: &[&str] = &[
    "github.com",
    "gitlab.com",
    "codeberg.org",
    "bitbucket.org",
    "sr.ht",
];

/// Social links shown in the site header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Repository URL.
    pub github: Option<String>,
}

pub struct SocialConfigFields {
    pub github: FieldPath,
}

impl SocialConfig {
    pub const FIELDS: SocialConfigFields = SocialConfigFields {
        github: FieldPath::new("social.github"),
    };

    /// Returns true if no social link is configured.
    pub fn is_empty(&self) -> bool {
        self.github.is_none()
    }

    /// Validate social links.
    ///
    /// # Checks
    /// - `github` must be an absolute http(s) URL
    /// - `github` pointing outside known source hosts is a warning
    pub fn validate(&self, diag: &mut ValidationError) {
        let Some(github) = &self.github else {
            return;
        };

        let Some(url) = check_absolute_url(github, Self::FIELDS.github, diag) else {
            return;
        };

        let host = url.host_str().unwrap_or_default();
        if !is_source_host(host) {
            diag.warn(
                Self::FIELDS.github,
                format!("host '{host}' is not a known source-hosting service"),
            );
        }
    }
}

fn is_source_host(host: &str) -> bool {
    let host = host.trim_start_matches("www.");
    SOURCE_HOSTS
        .iter()
        .any(|known| host == *known || host.ends_with(&format!(".{known}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(github: &str) -> ValidationError {
        let social = SocialConfig {
            github: Some(github.into()),
        };
        let mut diag = ValidationError::new();
        social.validate(&mut diag);
        diag
    }

    #[test]
    fn test_github_url_valid() {
        let warnings = validate("https://github.com/manojnakp/scount")
            .into_result()
            .unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_github_not_a_url() {
        let diag = validate("not a url");
        assert!(diag.has_error_at("social.github"));
    }

    #[test]
    fn test_unknown_host_is_warning() {
        let warnings = validate("https://example.com/me").into_result().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("example.com"));
    }

    #[test]
    fn test_source_hosts() {
        assert!(is_source_host("github.com"));
        assert!(is_source_host("www.github.com"));
        assert!(is_source_host("git.sr.ht"));
        assert!(is_source_host("gitlab.com"));
        assert!(!is_source_host("notgithub.com"));
        assert!(!is_source_host("example.org"));
    }

    #[test]
    fn test_absent_is_valid() {
        let mut diag = ValidationError::new();
        SocialConfig::default().validate(&mut diag);
        assert!(diag.into_result().unwrap().is_empty());
    }
}
