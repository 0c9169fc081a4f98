//! Single-choice customization options and their price sheet
//!
//! Shape, engraving, and packaging are radio-style groups: exactly one
//! option of each is active at any time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Price;

/// Bar shape. Charged per unit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Rectangular,
    Round,
    Oval,
    Heart,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Shape::Rectangular, Shape::Round, Shape::Oval, Shape::Heart];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Round => "round",
            Self::Oval => "oval",
            Self::Heart => "heart",
        }
    }

    /// Storefront label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rectangular => "Rectangular",
            Self::Round => "Redondo",
            Self::Oval => "Ovalado",
            Self::Heart => "Corazón",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" => Ok(Self::Rectangular),
            "round" => Ok(Self::Round),
            "oval" => Ok(Self::Oval),
            "heart" => Ok(Self::Heart),
            other => Err(DomainError::parse(format!("Unknown shape: {}", other))),
        }
    }
}

/// Engraving style. Flat cost regardless of quantity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Engraving {
    #[default]
    None,
    Initials,
    Name,
    Message,
}

impl Engraving {
    pub const ALL: [Engraving; 4] = [
        Engraving::None,
        Engraving::Initials,
        Engraving::Name,
        Engraving::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Initials => "initials",
            Self::Name => "name",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Sin grabado",
            Self::Initials => "Iniciales",
            Self::Name => "Nombre",
            Self::Message => "Mensaje",
        }
    }

    /// Whether this option takes free-text input.
    pub fn accepts_text(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Engraving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engraving {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "initials" => Ok(Self::Initials),
            "name" => Ok(Self::Name),
            "message" => Ok(Self::Message),
            other => Err(DomainError::parse(format!("Unknown engraving: {}", other))),
        }
    }
}

/// Packaging. Flat cost.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    #[default]
    Standard,
    Gift,
    Premium,
}

impl PackageType {
    pub const ALL: [PackageType; 3] = [
        PackageType::Standard,
        PackageType::Gift,
        PackageType::Premium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Gift => "gift",
            Self::Premium => "premium",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Estándar",
            Self::Gift => "Caja de regalo",
            Self::Premium => "Caja premium",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "gift" => Ok(Self::Gift),
            "premium" => Ok(Self::Premium),
            other => Err(DomainError::parse(format!("Unknown package: {}", other))),
        }
    }
}

/// Cost of each option. Options missing from a sheet cost nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionPrices {
    /// Per-unit surcharge by shape
    #[serde(default)]
    pub shapes: BTreeMap<Shape, Price>,
    /// Flat engraving cost
    #[serde(default)]
    pub engravings: BTreeMap<Engraving, Price>,
    /// Flat packaging cost
    #[serde(default)]
    pub packages: BTreeMap<PackageType, Price>,
}

impl OptionPrices {
    pub fn shape(&self, shape: Shape) -> Price {
        self.shapes.get(&shape).copied().unwrap_or_default()
    }

    pub fn engraving(&self, engraving: Engraving) -> Price {
        self.engravings.get(&engraving).copied().unwrap_or_default()
    }

    pub fn package(&self, package: PackageType) -> Price {
        self.packages.get(&package).copied().unwrap_or_default()
    }

    pub fn with_shape(mut self, shape: Shape, price: Price) -> Self {
        self.shapes.insert(shape, price);
        self
    }

    pub fn with_engraving(mut self, engraving: Engraving, price: Price) -> Self {
        self.engravings.insert(engraving, price);
        self
    }

    pub fn with_package(mut self, package: PackageType, price: Price) -> Self {
        self.packages.insert(package, price);
        self
    }
}
