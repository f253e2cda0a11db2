//! `[edit_link]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [edit_link]
//! base_url = "https://github.com/manojnakp/scount/edit/main"
//! ```

use crate::config::{FieldPath, ValidationError, util::check_absolute_url, util::join_url};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// "Edit this page" link settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditLinkConfig {
    /// URL prefix that page source paths are appended to.
    #[serde(alias = "baseUrl")]
    pub base_url: String,
}

pub struct EditLinkConfigFields {
    pub base_url: FieldPath,
}

impl EditLinkConfig {
    pub const FIELDS: EditLinkConfigFields = EditLinkConfigFields {
        base_url: FieldPath::new("edit_link.base_url"),
    };

    pub fn validate(&self, diag: &mut ValidationError) {
        check_absolute_url(&self.base_url, Self::FIELDS.base_url, diag);
    }

    /// Build the edit URL for a source file relative to the project root.
    ///
    /// Each path segment is percent-encoded; `\` separators are normalized.
    pub fn url_for(&self, file: &str) -> String {
        let encoded = file
            .replace('\\', "/")
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/");
        join_url(&self.base_url, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit_link() -> EditLinkConfig {
        EditLinkConfig {
            base_url: "https://github.com/manojnakp/scount/edit/main".into(),
        }
    }

    #[test]
    fn test_url_for() {
        assert_eq!(
            edit_link().url_for("src/content/docs/intro/setup.md"),
            "https://github.com/manojnakp/scount/edit/main/src/content/docs/intro/setup.md"
        );
    }

    #[test]
    fn test_url_for_encodes_segments() {
        assert_eq!(
            edit_link().url_for("/docs/my page#1.md"),
            "https://github.com/manojnakp/scount/edit/main/docs/my%20page%231.md"
        );
        assert_eq!(
            edit_link().url_for("docs\\windows.md"),
            "https://github.com/manojnakp/scount/edit/main/docs/windows.md"
        );
    }

    #[test]
    fn test_validate() {
        let mut diag = ValidationError::new();
        edit_link().validate(&mut diag);
        assert!(diag.is_empty());

        let mut diag = ValidationError::new();
        EditLinkConfig {
            base_url: "edit/main".into(),
        }
        .validate(&mut diag);
        assert!(diag.has_error_at("edit_link.base_url"));
    }
}
