//! Soap entity - catalog entries and the selections built from them

use serde::{Deserialize, Serialize};

use crate::value_objects::{Price, SoapId, SoapName};

/// Catalog category, used by the storefront's category tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoapCategory {
    Floral,
    Herbal,
    Citrus,
    Exfoliating,
    Moisturizing,
    /// Unknown category for forward compatibility
    #[serde(other)]
    Unknown,
}

impl SoapCategory {
    pub const ALL: [SoapCategory; 5] = [
        SoapCategory::Floral,
        SoapCategory::Herbal,
        SoapCategory::Citrus,
        SoapCategory::Exfoliating,
        SoapCategory::Moisturizing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Floral => "Florales",
            Self::Herbal => "Herbales",
            Self::Citrus => "Cítricos",
            Self::Exfoliating => "Exfoliantes",
            Self::Moisturizing => "Hidratantes",
            Self::Unknown => "Otros",
        }
    }
}

impl std::fmt::Display for SoapCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Floral => write!(f, "floral"),
            Self::Herbal => write!(f, "herbal"),
            Self::Citrus => write!(f, "citrus"),
            Self::Exfoliating => write!(f, "exfoliating"),
            Self::Moisturizing => write!(f, "moisturizing"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for SoapCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floral" => Ok(Self::Floral),
            "herbal" => Ok(Self::Herbal),
            "citrus" => Ok(Self::Citrus),
            "exfoliating" => Ok(Self::Exfoliating),
            "moisturizing" => Ok(Self::Moisturizing),
            _ => Ok(Self::Unknown),
        }
    }
}

/// A soap offered in the catalog
///
/// Simple data struct; the newtypes carry all the validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Soap {
    pub id: SoapId,
    pub name: SoapName,
    /// Unit price; anything above the premium threshold adds a surcharge
    pub price: Price,
    pub category: SoapCategory,
}

impl Soap {
    pub fn new(id: SoapId, name: SoapName, price: Price, category: SoapCategory) -> Self {
        Self {
            id,
            name,
            price,
            category,
        }
    }

    pub fn to_selection(&self) -> Selection {
        Selection {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
        }
    }
}

/// A soap placed in the pack. Unique by `id` within a selection set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: SoapId,
    pub name: SoapName,
    pub price: Price,
}

impl From<&Soap> for Selection {
    fn from(soap: &Soap) -> Self {
        soap.to_selection()
    }
}
