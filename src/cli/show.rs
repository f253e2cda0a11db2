//! `docsite show`: print the builder JSON for the validated config.

use crate::{
    cli::{Cli, ShowArgs},
    config::SiteConfig,
    log,
};
use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::{fs, io::Write};

pub fn show_config(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let (_, config) = SiteConfig::load(cli)?;
    let formatted = format_json(&config.into_builder_json(), args.pretty)?;

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("show"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn format_json(value: &JsonValue, pretty: bool) -> Result<String> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_json() {
        let value = json!({ "base": "/scount", "site": "https://manojnakp.github.io" });
        assert_eq!(
            format_json(&value, false).unwrap(),
            r#"{"base":"/scount","site":"https://manojnakp.github.io"}"#
        );
        assert!(format_json(&value, true).unwrap().contains("\n  \"base\""));
    }
}
