//! Configuration utility functions.

use super::{FieldPath, ValidationError};
use std::path::{Path, PathBuf};
use url::Url;

const URL_HINT: &str = "use format like https://example.com";

/// Check that `value` is an absolute `http`/`https` URL with a host.
///
/// Pushes an error onto `diag` and returns `None` when it is not.
pub fn check_absolute_url(
    value: &str,
    field: FieldPath,
    diag: &mut ValidationError,
) -> Option<Url> {
    let parsed = match Url::parse(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            diag.error_with_hint(field, format!("invalid URL `{value}`: {e}"), URL_HINT);
            return None;
        }
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        diag.error_with_hint(
            field,
            format!(
                "scheme '{}' not supported, must be http or https",
                parsed.scheme()
            ),
            URL_HINT,
        );
        return None;
    }

    // `http:foo` parses without a host
    if parsed.host_str().is_none_or(str::is_empty) {
        diag.error_with_hint(field, "URL must have a valid host", URL_HINT);
        return None;
    }

    Some(parsed)
}

/// Join a URL prefix and a path with exactly one `/` between them.
///
/// # Examples
/// ```ignore
/// join_url("https://a.io/", "/b")  -> "https://a.io/b"
/// join_url("/scount", "ref/")     -> "/scount/ref/"
/// join_url("/", "/ref/")          -> "/ref/"
/// ```
pub fn join_url(prefix: &str, path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Expand a leading `~` in a user-supplied path.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Absolute paths are returned as-is if they exist.
///
/// # Example
/// ```text
/// /home/user/docs/src/content/  ← start
/// /home/user/docs/docsite.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    let config_name = expand_tilde(config_name);

    if config_name.is_absolute() {
        return config_name.exists().then_some(config_name);
    }

    let mut current = start;
    loop {
        let candidate = current.join(&config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
