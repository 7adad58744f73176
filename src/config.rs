//! Site configuration loading.
//!
//! The canteen catalog and toast settings live in `config/site.toml`, which is
//! compiled into the bundle. It is parsed once at startup and the results are
//! handed to the pages through Leptos context, so nothing reads a global.

use serde::Deserialize;
use thiserror::Error;

use crate::menu::{Catalog, MenuItem};

/// Default configuration embedded in the bundle at compile time.
const DEFAULT_SITE: &str = include_str!("../config/site.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog has no items")]
    EmptyCatalog,

    #[error("Duplicate menu item: {0}")]
    DuplicateItem(String),

    #[error("Menu item has no price: {0}")]
    ZeroPrice(String),
}

/// How the toaster presents notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ToastSettings {
    /// Toasts shown at once
    #[serde(default = "default_visible_limit")]
    pub visible_limit: usize,
    /// Display time before auto-dismiss
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
}

fn default_visible_limit() -> usize {
    3
}

fn default_duration_ms() -> u32 {
    5000
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            visible_limit: default_visible_limit(),
            duration_ms: default_duration_ms(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SiteFile {
    #[serde(default)]
    toast: ToastSettings,
    #[serde(rename = "item", default)]
    items: Vec<MenuItem>,
}

/// Validated site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub catalog: Catalog,
    pub toast: ToastSettings,
}

impl SiteConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: SiteFile = toml::from_str(content)?;
        let catalog = Catalog::new(file.items)?;
        Ok(Self {
            catalog,
            toast: file.toast,
        })
    }
}

/// Parse the configuration compiled into the bundle.
pub fn load_site_config() -> Result<SiteConfig, ConfigError> {
    let config = SiteConfig::from_toml(DEFAULT_SITE)?;
    log::info!("Loaded site config with {} menu items", config.catalog.len());
    Ok(config)
}
