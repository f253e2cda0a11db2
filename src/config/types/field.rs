//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A dotted path to a config field, used to anchor diagnostics.
///
/// Static paths are declared once per section in a `FIELDS` table:
///
/// ```ignore
/// diag.error(SiteConfigBuilder::FIELDS.base, "must start with `/`");
/// ```
///
/// Paths into the sidebar array are built at runtime with [`FieldPath::index`]
/// and [`FieldPath::child`] (e.g. `sidebar[1].label`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path to the `i`-th element of an array field.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    /// Path to a named child of this field.
    pub fn child(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_child() {
        let sidebar = FieldPath::new("sidebar");
        assert_eq!(sidebar.index(2).as_str(), "sidebar[2]");
        assert_eq!(sidebar.index(0).child("label").as_str(), "sidebar[0].label");
    }
}
