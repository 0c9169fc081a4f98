//! Pack configuration
//!
//! The custom pack and the two fixed packs differ only in data: quantity
//! range, how the selection set behaves, which options are offered, and
//! the pricing policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::packs::PricingPolicy;
use crate::value_objects::{QuantityRange, SoapId};

/// Which preset a customizer was built from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackKind {
    #[default]
    Custom,
    Basic,
    Premium,
}

impl PackKind {
    pub const ALL: [PackKind; 3] = [PackKind::Custom, PackKind::Basic, PackKind::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Basic => "basic",
            Self::Premium => "premium",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Custom => "Pack Personalizado",
            Self::Basic => "Pack Básico",
            Self::Premium => "Pack Premium",
        }
    }

    pub fn config(&self) -> PackConfig {
        match self {
            Self::Custom => PackConfig::custom(),
            Self::Basic => PackConfig::basic(),
            Self::Premium => PackConfig::premium(),
        }
    }
}

impl fmt::Display for PackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "custom" | "personalizado" => Ok(Self::Custom),
            "basic" | "basico" | "básico" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            other => Err(DomainError::parse(format!("Unknown pack: {}", other))),
        }
    }
}

/// How the selection set responds to toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Free add/remove between `min` and the current quantity
    Variable { min: usize },
    /// Always exactly `size` soaps; picking a new one replaces the oldest
    Fixed { size: usize },
}

/// A named configuration of the customizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    pub kind: PackKind,
    pub quantity_range: QuantityRange,
    pub default_quantity: u32,
    pub selection_mode: SelectionMode,
    /// Soaps preselected when the page loads
    pub default_soaps: Vec<SoapId>,
    pub offers_shape: bool,
    pub offers_engraving: bool,
    pub pricing: PricingPolicy,
}

impl PackConfig {
    /// Build a validated pack configuration.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the default quantity is outside
    /// the range, a fixed pack's defaults don't fill it exactly, a fixed
    /// pack is larger than its smallest quantity, or a variable pack's
    /// minimum is zero or above its largest quantity.
    pub fn new(
        kind: PackKind,
        quantity_range: QuantityRange,
        default_quantity: u32,
        selection_mode: SelectionMode,
        default_soaps: Vec<SoapId>,
        pricing: PricingPolicy,
    ) -> Result<Self, DomainError> {
        if !quantity_range.contains(default_quantity) {
            return Err(DomainError::validation(format!(
                "Default quantity {} is outside {}..={}",
                default_quantity,
                quantity_range.floor(),
                quantity_range.ceiling()
            )));
        }
        if let SelectionMode::Fixed { size } = selection_mode {
            if default_soaps.len() != size {
                return Err(DomainError::validation(format!(
                    "Fixed pack needs exactly {} default soaps, got {}",
                    size,
                    default_soaps.len()
                )));
            }
            if size > quantity_range.floor() as usize {
                return Err(DomainError::validation(format!(
                    "Fixed pack of {} does not fit a quantity of {}",
                    size,
                    quantity_range.floor()
                )));
            }
        }
        if let SelectionMode::Variable { min } = selection_mode {
            if min == 0 || min > quantity_range.ceiling() as usize {
                return Err(DomainError::validation(format!(
                    "Minimum of {} soaps must be within 1..={}",
                    min,
                    quantity_range.ceiling()
                )));
            }
        }
        let fixed = matches!(selection_mode, SelectionMode::Fixed { .. });
        Ok(Self {
            kind,
            quantity_range,
            default_quantity,
            selection_mode,
            default_soaps,
            offers_shape: !fixed,
            offers_engraving: !fixed,
            pricing,
        })
    }

    /// Custom pack: 3 to 12 bars, choose as many soaps as bars.
    pub fn custom() -> Self {
        Self {
            kind: PackKind::Custom,
            quantity_range: range(3, 12),
            default_quantity: 3,
            selection_mode: SelectionMode::Variable { min: 3 },
            default_soaps: Vec::new(),
            offers_shape: true,
            offers_engraving: true,
            pricing: PricingPolicy::custom(),
        }
    }

    /// Basic pack: three soaps, 3 to 6 bars.
    pub fn basic() -> Self {
        Self {
            kind: PackKind::Basic,
            quantity_range: range(3, 6),
            default_quantity: 3,
            selection_mode: SelectionMode::Fixed { size: 3 },
            default_soaps: soap_ids(&["lavanda", "romero", "calendula"]),
            offers_shape: false,
            offers_engraving: false,
            pricing: PricingPolicy::basic(),
        }
    }

    /// Premium pack: six soaps, 6 to 8 bars.
    pub fn premium() -> Self {
        Self {
            kind: PackKind::Premium,
            quantity_range: range(6, 8),
            default_quantity: 6,
            selection_mode: SelectionMode::Fixed { size: 6 },
            default_soaps: soap_ids(&[
                "lavanda",
                "romero",
                "calendula",
                "rosa-mosqueta",
                "menta",
                "aloe-vera",
            ]),
            offers_shape: false,
            offers_engraving: false,
            pricing: PricingPolicy::premium(),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.selection_mode, SelectionMode::Fixed { .. })
    }

    /// Minimum selections needed to check out
    pub fn min_selections(&self) -> usize {
        match self.selection_mode {
            SelectionMode::Variable { min } => min,
            SelectionMode::Fixed { size } => size,
        }
    }

    /// Selection ceiling at a given quantity
    pub fn max_selections(&self, quantity: u32) -> usize {
        match self.selection_mode {
            SelectionMode::Variable { .. } => quantity as usize,
            SelectionMode::Fixed { size } => size,
        }
    }
}

fn range(floor: u32, ceiling: u32) -> QuantityRange {
    QuantityRange::preset(floor, ceiling)
}

fn soap_ids(ids: &[&str]) -> Vec<SoapId> {
    ids.iter().filter_map(|id| SoapId::new(*id).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_self_consistent() {
        for kind in PackKind::ALL {
            let preset = kind.config();
            let rebuilt = PackConfig::new(
                preset.kind,
                preset.quantity_range,
                preset.default_quantity,
                preset.selection_mode,
                preset.default_soaps.clone(),
                preset.pricing,
            )
            .expect("preset validates");
            assert_eq!(rebuilt, preset);
        }
    }

    #[test]
    fn custom_ceiling_follows_quantity() {
        let custom = PackConfig::custom();
        assert_eq!(custom.min_selections(), 3);
        assert_eq!(custom.max_selections(3), 3);
        assert_eq!(custom.max_selections(9), 9);
    }

    #[test]
    fn fixed_ceiling_ignores_quantity() {
        let premium = PackConfig::premium();
        assert_eq!(premium.min_selections(), 6);
        assert_eq!(premium.max_selections(8), 6);
        assert!(premium.is_fixed());
        assert!(!premium.offers_engraving);
    }

    #[test]
    fn rejects_fixed_pack_without_enough_defaults() {
        let result = PackConfig::new(
            PackKind::Basic,
            range(3, 6),
            3,
            SelectionMode::Fixed { size: 3 },
            soap_ids(&["lavanda"]),
            PricingPolicy::basic(),
        );
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_variable_minimum_outside_the_range() {
        for min in [0, 13] {
            let result = PackConfig::new(
                PackKind::Custom,
                range(3, 12),
                3,
                SelectionMode::Variable { min },
                Vec::new(),
                PricingPolicy::custom(),
            );
            assert!(
                matches!(result, Err(DomainError::Validation(_))),
                "min {} accepted",
                min
            );
        }
    }

    #[test]
    fn accepts_variable_minimum_at_the_ceiling() {
        let result = PackConfig::new(
            PackKind::Custom,
            range(3, 12),
            3,
            SelectionMode::Variable { min: 12 },
            Vec::new(),
            PricingPolicy::custom(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn rejects_default_quantity_out_of_range() {
        let result = PackConfig::new(
            PackKind::Custom,
            range(3, 12),
            13,
            SelectionMode::Variable { min: 3 },
            Vec::new(),
            PricingPolicy::custom(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn pack_kind_parses_spanish_and_english() {
        assert_eq!("basico".parse::<PackKind>(), Ok(PackKind::Basic));
        assert_eq!("Premium".parse::<PackKind>(), Ok(PackKind::Premium));
        assert_eq!("custom".parse::<PackKind>(), Ok(PackKind::Custom));
        assert!("family".parse::<PackKind>().is_err());
    }
}
