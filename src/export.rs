//! Render the descriptor into the object the site builder consumes.
//!
//! The builder takes `site` and `base` at the top level and the documentation
//! theme as an integration with its own options:
//!
//! ```json
//! {
//!   "site": "https://manojnakp.github.io",
//!   "base": "/scount",
//!   "integrations": [
//!     { "name": "starlight", "options": { "title": "SCount", "sidebar": [...] } }
//!   ]
//! }
//! ```
//!
//! Keys use the builder's camelCase spelling. Unset optional fields are
//! omitted rather than written as `null`; plain text fields are always
//! written, even when empty.

use crate::config::{SidebarEntry, SidebarGroup, SiteConfig};
use serde_json::{Map, Value as JsonValue, json};

/// Integration name of the documentation theme.
pub const THEME_INTEGRATION: &str = "starlight";

impl SiteConfig {
    /// Consume the descriptor, producing the builder's config object.
    pub fn into_builder_json(self) -> JsonValue {
        let mut root = Map::new();
        if let Some(site) = self.site() {
            root.insert("site".into(), json!(site));
        }
        root.insert("base".into(), json!(self.base()));
        root.insert(
            "integrations".into(),
            json!([{ "name": THEME_INTEGRATION, "options": theme_options(&self) }]),
        );
        JsonValue::Object(root)
    }
}

/// Options handed to the documentation theme.
fn theme_options(config: &SiteConfig) -> JsonValue {
    let mut obj = Map::new();
    obj.insert("title".into(), json!(config.title()));
    obj.insert("description".into(), json!(config.description()));

    if let Some(github) = &config.social().github {
        obj.insert("social".into(), json!({ "github": github }));
    }

    let sidebar: Vec<_> = config.sidebar().iter().map(sidebar_group).collect();
    obj.insert("sidebar".into(), JsonValue::Array(sidebar));

    obj.insert("lastUpdated".into(), json!(config.last_updated()));

    if let Some(edit_link) = config.edit_link() {
        obj.insert("editLink".into(), json!({ "baseUrl": edit_link.base_url }));
    }

    JsonValue::Object(obj)
}

fn sidebar_group(group: &SidebarGroup) -> JsonValue {
    match group.entry() {
        SidebarEntry::Autogenerate { directory } => json!({
            "label": group.label(),
            "autogenerate": { "directory": directory },
        }),
        SidebarEntry::Link { path } => json!({
            "label": group.label(),
            "link": path,
        }),
    }
}
