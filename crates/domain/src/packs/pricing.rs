//! Pricing policies
//!
//! One policy type covers every pack. The custom pack uses the tiered
//! variant; the fixed packs use the flat variant with their own constants.

use crate::entities::Selection;
use crate::value_objects::{Engraving, OptionPrices, PackageType, Price, Shape};

/// Everything a price depends on, borrowed from the customizer state
#[derive(Debug, Clone, Copy)]
pub struct PriceInput<'a> {
    pub quantity: u32,
    pub selections: &'a [Selection],
    pub shape: Shape,
    pub engraving: Engraving,
    pub package: PackageType,
    pub options: &'a OptionPrices,
}

/// Quantity-bracketed pricing with premium and option surcharges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TieredPricing {
    /// Highest quantity billed at `small_price`
    pub small_max: u32,
    pub small_price: Price,
    /// Highest quantity billed at `medium_price`
    pub medium_max: u32,
    pub medium_price: Price,
    /// Above `medium_max`: `large_base + (quantity - large_anchor) * large_per_unit`
    pub large_base: Price,
    pub large_anchor: u32,
    pub large_per_unit: Price,
    /// Soaps priced above this add the difference to the total
    pub premium_threshold: Price,
}

impl TieredPricing {
    pub fn base(&self, quantity: u32) -> Price {
        if quantity <= self.small_max {
            self.small_price
        } else if quantity <= self.medium_max {
            self.medium_price
        } else {
            // Signed: quantities between medium_max and the anchor come in under the base.
            let offset = i64::from(quantity) - i64::from(self.large_anchor);
            Price::from_signed(
                i64::from(self.large_base.units()) + offset * i64::from(self.large_per_unit.units()),
            )
        }
    }

    pub fn premium_surcharge(&self, selections: &[Selection]) -> Price {
        selections
            .iter()
            .map(|s| s.price.excess_over(self.premium_threshold))
            .sum()
    }
}

/// A flat pack price plus a per-unit charge beyond the included bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatPricing {
    pub base: Price,
    pub included_quantity: u32,
    pub per_extra_unit: Price,
}

impl FlatPricing {
    pub fn base(&self, quantity: u32) -> Price {
        let extra = quantity.saturating_sub(self.included_quantity);
        self.base + self.per_extra_unit.times(extra)
    }
}

/// How a pack turns its state into a total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingPolicy {
    Tiered(TieredPricing),
    Flat(FlatPricing),
}

impl PricingPolicy {
    /// Custom pack price sheet
    pub const fn custom() -> Self {
        Self::Tiered(TieredPricing {
            small_max: 3,
            small_price: Price::new(45),
            medium_max: 6,
            medium_price: Price::new(80),
            large_base: Price::new(135),
            large_anchor: 9,
            large_per_unit: Price::new(15),
            premium_threshold: Price::new(8),
        })
    }

    /// Three-bar basic pack
    pub const fn basic() -> Self {
        Self::Flat(FlatPricing {
            base: Price::new(45),
            included_quantity: 3,
            per_extra_unit: Price::new(8),
        })
    }

    /// Six-bar premium pack
    pub const fn premium() -> Self {
        Self::Flat(FlatPricing {
            base: Price::new(80),
            included_quantity: 6,
            per_extra_unit: Price::new(8),
        })
    }

    /// Total price. Pure: the same input always yields the same price.
    pub fn price(&self, input: &PriceInput<'_>) -> Price {
        match self {
            Self::Tiered(tiers) => {
                tiers.base(input.quantity)
                    + tiers.premium_surcharge(input.selections)
                    + input.options.shape(input.shape).times(input.quantity)
                    + input.options.engraving(input.engraving)
                    + input.options.package(input.package)
            }
            Self::Flat(flat) => flat.base(input.quantity) + input.options.package(input.package),
        }
    }
}
