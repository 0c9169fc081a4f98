//! Records produced by the customizer: checkout orders, saved snapshots,
//! and the read-only views the storefront renders.

use serde::{Deserialize, Serialize};

use crate::entities::Selection;
use crate::packs::PackKind;
use crate::value_objects::{Engraving, PackageType, Price, Shape, SoapName};

/// A validated order, ready for the cart collaborator
///
/// Only [`Customizer::submit`](crate::Customizer::submit) builds these, so
/// the selection count is always within the pack's bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub pack: PackKind,
    pub selections: Vec<Selection>,
    pub quantity: u32,
    pub shape: Shape,
    pub engraving: Engraving,
    pub engraving_text: String,
    pub package: PackageType,
    pub total_price: Price,
}

/// Snapshot written to scratch storage on "save configuration"
///
/// The price is not stored; it is recomputed from the restored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedConfiguration {
    pub pack: PackKind,
    /// Saved with names and prices, restored by id against the live catalog
    pub soaps: Vec<Selection>,
    pub quantity: u32,
    pub shape: Shape,
    pub engraving: Engraving,
    pub engraving_text: String,
    pub package: PackageType,
}

/// One position in the pack preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Filled(SoapName),
    Empty,
}

impl Slot {
    pub fn is_filled(&self) -> bool {
        matches!(self, Self::Filled(_))
    }
}

/// Selected soaps with their list prices and the sum of those prices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    pub items: Vec<(SoapName, Price)>,
    pub soaps_total: Price,
}

impl SelectionSummary {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
