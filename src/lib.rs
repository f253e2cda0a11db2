//! docsite - typed, validated site configuration for documentation sites.
//!
//! A `docsite.toml` file is parsed into a [`config::SiteConfigBuilder`],
//! checked by [`config::SiteConfigBuilder::build`] and handed to the site
//! builder as JSON via [`config::SiteConfig::into_builder_json`].

pub mod cli;
pub mod config;
pub mod export;
pub mod logger;
