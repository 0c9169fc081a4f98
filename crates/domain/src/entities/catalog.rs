//! Catalog entity - everything the storefront offers
//!
//! The catalog replaces the markup data attributes the widget used to read:
//! soap ids, names, unit prices, categories, and the option price sheet.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entities::{Selection, Soap, SoapCategory};
use crate::error::DomainError;
use crate::value_objects::{OptionPrices, SoapId};

/// Raw catalog document, validated into [`Catalog`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogData {
    soaps: Vec<Soap>,
    #[serde(default)]
    options: OptionPrices,
}

/// The soaps and option prices on offer
///
/// # Invariants
///
/// - Soap ids are unique
/// - Soaps keep their document order (the order the picker shows them in)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData", into = "CatalogData")]
pub struct Catalog {
    soaps: Vec<Soap>,
    options: OptionPrices,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if two soaps share an id.
    pub fn new(soaps: Vec<Soap>, options: OptionPrices) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(soaps.len());
        for soap in &soaps {
            if !seen.insert(soap.id.as_str()) {
                return Err(DomainError::validation(format!(
                    "Duplicate soap id in catalog: {}",
                    soap.id
                )));
            }
        }
        Ok(Self { soaps, options })
    }

    pub fn soaps(&self) -> &[Soap] {
        &self.soaps
    }

    pub fn options(&self) -> &OptionPrices {
        &self.options
    }

    pub fn soap(&self, id: &SoapId) -> Option<&Soap> {
        self.soaps.iter().find(|s| &s.id == id)
    }

    pub fn selection_for(&self, id: &SoapId) -> Option<Selection> {
        self.soap(id).map(Soap::to_selection)
    }

    /// Soaps in a category tab; `None` is the "all" tab.
    pub fn filter(&self, category: Option<SoapCategory>) -> impl Iterator<Item = &Soap> + '_ {
        self.soaps
            .iter()
            .filter(move |s| category.map_or(true, |c| s.category == c))
    }

    /// Categories that actually have soaps, in `SoapCategory::ALL` order.
    pub fn categories(&self) -> Vec<SoapCategory> {
        SoapCategory::ALL
            .into_iter()
            .filter(|c| self.soaps.iter().any(|s| s.category == *c))
            .collect()
    }
}

impl TryFrom<CatalogData> for Catalog {
    type Error = DomainError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Self::new(data.soaps, data.options)
    }
}

impl From<Catalog> for CatalogData {
    fn from(catalog: Catalog) -> Self {
        Self {
            soaps: catalog.soaps,
            options: catalog.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Price, SoapName};

    fn soap(id: &str, price: u32, category: SoapCategory) -> Soap {
        Soap::new(
            SoapId::new(id).expect("valid id"),
            SoapName::new(id).expect("valid name"),
            Price::new(price),
            category,
        )
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(
            vec![
                soap("lavanda", 5, SoapCategory::Floral),
                soap("lavanda", 6, SoapCategory::Floral),
            ],
            OptionPrices::default(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn filter_by_category_keeps_order() {
        let catalog = Catalog::new(
            vec![
                soap("lavanda", 5, SoapCategory::Floral),
                soap("romero", 5, SoapCategory::Herbal),
                soap("rosa", 9, SoapCategory::Floral),
            ],
            OptionPrices::default(),
        )
        .expect("valid catalog");

        let floral: Vec<&str> = catalog
            .filter(Some(SoapCategory::Floral))
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(floral, vec!["lavanda", "rosa"]);
        assert_eq!(catalog.filter(None).count(), 3);
        assert_eq!(
            catalog.categories(),
            vec![SoapCategory::Floral, SoapCategory::Herbal]
        );
    }

    #[test]
    fn deserializes_and_validates() {
        let json = r#"{
            "soaps": [
                { "id": "menta", "name": "Menta", "price": 6, "category": "herbal" },
                { "id": "carbon", "name": "Carbón", "price": 10, "category": "charcoal" }
            ],
            "options": { "packages": { "gift": 10 } }
        }"#;
        let catalog: Catalog = serde_json::from_str(json).expect("valid catalog");
        let carbon = SoapId::new("carbon").expect("valid id");
        assert_eq!(
            catalog.soap(&carbon).map(|s| s.category),
            Some(SoapCategory::Unknown)
        );
        let selection = catalog.selection_for(&carbon).expect("in catalog");
        assert_eq!(selection.price, Price::new(10));

        let dup = r#"{ "soaps": [
            { "id": "menta", "name": "Menta", "price": 6, "category": "herbal" },
            { "id": "menta", "name": "Menta", "price": 6, "category": "herbal" }
        ] }"#;
        assert!(serde_json::from_str::<Catalog>(dup).is_err());
    }
}
