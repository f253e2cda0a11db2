//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // No #[from] source chain here, the diagnostics render themselves in full
    #[error("{0}")]
    Validation(ValidationError),
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "sidebar[1].label")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        write!(f, "{} {}", "→".red(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// Every invariant violation found while building a [`SiteConfig`].
///
/// Validation never stops at the first problem; all errors are collected and
/// reported together. Warnings ride along but never make the result fail.
///
/// [`SiteConfig`]: crate::config::SiteConfig
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a non-fatal warning.
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Whether any error is anchored at `field` (exact path match).
    pub fn has_error_at(&self, field: &str) -> bool {
        self.errors.iter().any(|d| d.field.as_str() == field)
    }

    /// Convert to Result, handing the warnings back on success.
    pub fn into_result(self) -> Result<Vec<ConfigDiagnostic>, Self> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Print warnings collected during a successful build.
pub fn print_warnings(warnings: &[ConfigDiagnostic]) {
    for warning in warnings {
        crate::log!("warning"; "[{}] {}", warning.field.as_str(), warning.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docsite.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("docsite.toml"));
    }

    #[test]
    fn test_validation_display_lists_every_error() {
        let mut diag = ValidationError::new();
        diag.error(FieldPath::new("base"), "must start with `/`");
        diag.error_with_hint(FieldPath::new("site"), "invalid URL", "use https://...");

        let display = format!("{}", ConfigError::from(diag));
        assert!(display.contains("base"));
        assert!(display.contains("must start with `/`"));
        assert!(display.contains("use https://..."));
        assert!(display.contains("errors"));
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ValidationError::new();
        diag.warn(FieldPath::new("social.github"), "unusual host");

        let warnings = diag.into_result().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field.as_str(), "social.github");
    }

    #[test]
    fn test_has_error_at() {
        let mut diag = ValidationError::new();
        diag.error(FieldPath::new("sidebar").index(1), "both set");
        assert!(diag.has_error_at("sidebar[1]"));
        assert!(!diag.has_error_at("sidebar"));
    }
}
