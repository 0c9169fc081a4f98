//! Storefront configuration
//!
//! Loaded from the environment. Desktop builds read a `.env` file first
//! (see `main.rs`); in the browser every value falls back to its default.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use jaboneria_domain::PackKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Replacement catalog document (`JABONERIA_CATALOG_PATH`)
    pub catalog_path: Option<PathBuf>,
    /// Pack shown at `/` when the storefront opens (`JABONERIA_START_PACK`)
    pub start_pack: PackKind,
}

impl StorefrontConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let catalog_path = lookup("JABONERIA_CATALOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let start_pack = match lookup("JABONERIA_START_PACK") {
            Some(value) if !value.trim().is_empty() => value
                .parse()
                .context("JABONERIA_START_PACK must be custom, basic, or premium")?,
            _ => PackKind::default(),
        };

        Ok(Self {
            catalog_path,
            start_pack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_custom_pack_and_embedded_catalog() {
        let config = load(&[]).expect("defaults");
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.start_pack, PackKind::Custom);
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("JABONERIA_CATALOG_PATH", "/srv/catalog.json"),
            ("JABONERIA_START_PACK", "Premium"),
        ])
        .expect("valid");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/catalog.json")));
        assert_eq!(config.start_pack, PackKind::Premium);
    }

    #[test]
    fn blank_values_fall_back() {
        let config = load(&[("JABONERIA_CATALOG_PATH", "  "), ("JABONERIA_START_PACK", "")])
            .expect("valid");
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn unknown_pack_is_rejected() {
        assert!(load(&[("JABONERIA_START_PACK", "deluxe")]).is_err());
    }
}
