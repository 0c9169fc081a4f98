//! Catalog loading
//!
//! The default catalog ships inside the binary. Desktop builds may point
//! `JABONERIA_CATALOG_PATH` at a replacement document.

use anyhow::Context;
use jaboneria_domain::Catalog;

use crate::config::StorefrontConfig;

const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// The catalog compiled into the binary
pub fn embedded_catalog() -> anyhow::Result<Catalog> {
    serde_json::from_str(EMBEDDED_CATALOG).context("embedded catalog is invalid")
}

/// Load the catalog named by the configuration, or the embedded one
pub fn load_catalog(config: &StorefrontConfig) -> anyhow::Result<Catalog> {
    match config.catalog_path.as_deref() {
        Some(path) => read_catalog(path),
        None => embedded_catalog(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_catalog(path: &std::path::Path) -> anyhow::Result<Catalog> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog at {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&data)
        .with_context(|| format!("invalid catalog at {}", path.display()))?;
    tracing::info!(path = %path.display(), soaps = catalog.soaps().len(), "Loaded catalog");
    Ok(catalog)
}

#[cfg(target_arch = "wasm32")]
fn read_catalog(path: &std::path::Path) -> anyhow::Result<Catalog> {
    tracing::warn!(path = %path.display(), "Catalog override ignored in the browser");
    embedded_catalog()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaboneria_domain::{PackKind, Price, Shape, SoapId};

    #[test]
    fn embedded_catalog_has_every_pack_default() {
        let catalog = embedded_catalog().expect("valid");
        for kind in PackKind::ALL {
            for id in &kind.config().default_soaps {
                assert!(catalog.soap(id).is_some(), "missing default soap {}", id);
            }
        }
    }

    #[test]
    fn embedded_catalog_prices_options() {
        let catalog = embedded_catalog().expect("valid");
        assert_eq!(catalog.options().shape(Shape::Heart), Price::new(2));
        assert_eq!(catalog.options().shape(Shape::Rectangular), Price::ZERO);
    }

    #[test]
    fn override_path_is_read_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{ "soaps": [{ "id": "miel", "name": "Miel", "price": 7, "category": "moisturizing" }] }"#,
        )
        .expect("write");

        let config = StorefrontConfig {
            catalog_path: Some(path),
            ..StorefrontConfig::default()
        };
        let catalog = load_catalog(&config).expect("valid override");
        assert_eq!(catalog.soaps().len(), 1);
        assert!(catalog.soap(&SoapId::new("miel").expect("valid id")).is_some());
    }

    #[test]
    fn missing_override_is_an_error() {
        let config = StorefrontConfig {
            catalog_path: Some("/nonexistent/catalog.json".into()),
            ..StorefrontConfig::default()
        };
        assert!(load_catalog(&config).is_err());
    }
}
