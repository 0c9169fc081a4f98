//! Customizer aggregate - the pack customization widget's state
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state only changes through the operations below
//! - **Explicit state**: price and checkout eligibility are pure functions
//!   of the fields, recomputed on demand rather than read back from markup
//! - **One widget, many packs**: behaviour differences come from
//!   [`PackConfig`], never from subtyping

use crate::entities::{Catalog, OrderRecord, SavedConfiguration, Selection, SelectionSummary, Slot};
use crate::error::DomainError;
use crate::events::CustomizerEvent;
use crate::packs::{PackConfig, PackKind, PriceInput};
use crate::value_objects::{Engraving, OptionPrices, PackageType, Price, Shape, SoapId};

/// Whether the add-to-cart action is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutGate {
    Eligible,
    Ineligible,
}

impl CheckoutGate {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Live state of one pack being customized
///
/// # Invariants
///
/// - `quantity` is always inside the pack's quantity range
/// - selections are unique by soap id and keep insertion order
/// - `|selections| <= max_selections()` after every operation
/// - `engraving_text` is empty whenever `engraving` is `Engraving::None`
///
/// `min_selections() <= |selections|` is NOT an invariant; it only gates
/// checkout.
///
/// # Example
///
/// ```
/// use jaboneria_domain::{Catalog, Customizer, OptionPrices, PackConfig, Price, Selection};
/// use jaboneria_domain::value_objects::{SoapId, SoapName};
///
/// let catalog = Catalog::new(Vec::new(), OptionPrices::default()).unwrap();
/// let mut widget = Customizer::new(PackConfig::custom(), &catalog).unwrap();
/// for id in ["lavanda", "romero", "menta"] {
///     let soap = Selection {
///         id: SoapId::new(id).unwrap(),
///         name: SoapName::new(id).unwrap(),
///         price: Price::new(5),
///     };
///     widget.toggle_selection(soap).unwrap();
/// }
/// assert_eq!(widget.compute_price(), Price::new(45));
/// assert!(widget.checkout_gate().is_eligible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customizer {
    config: PackConfig,
    options: OptionPrices,
    quantity: u32,
    selections: Vec<Selection>,
    shape: Shape,
    engraving: Engraving,
    engraving_text: String,
    package: PackageType,
}

impl Customizer {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a widget in the pack's default state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a default soap of the pack is
    /// missing from the catalog.
    pub fn new(config: PackConfig, catalog: &Catalog) -> Result<Self, DomainError> {
        let selections = config
            .default_soaps
            .iter()
            .map(|id| {
                catalog.selection_for(id).ok_or_else(|| {
                    DomainError::validation(format!("Default soap '{}' is not in the catalog", id))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            quantity: config.default_quantity,
            options: catalog.options().clone(),
            config,
            selections,
            shape: Shape::default(),
            engraving: Engraving::default(),
            engraving_text: String::new(),
            package: PackageType::default(),
        })
    }

    /// Rebuild a widget from a saved snapshot.
    ///
    /// The snapshot is treated as untrusted input: the quantity is clamped,
    /// unknown or duplicate soaps are dropped, the selection set is cut to
    /// the ceiling, and options the pack doesn't offer are ignored. A fixed
    /// pack keeps its defaults unless the snapshot fills it exactly.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the snapshot belongs to another
    /// pack, or if [`Customizer::new`] fails.
    pub fn restore(
        config: PackConfig,
        snapshot: &SavedConfiguration,
        catalog: &Catalog,
    ) -> Result<Self, DomainError> {
        if snapshot.pack != config.kind {
            return Err(DomainError::validation(format!(
                "Saved configuration is for the {} pack, not {}",
                snapshot.pack, config.kind
            )));
        }

        let mut widget = Self::new(config, catalog)?;
        widget.quantity = widget
            .config
            .quantity_range
            .clamp(i64::from(snapshot.quantity));

        let mut restored: Vec<Selection> = Vec::with_capacity(snapshot.soaps.len());
        for saved in &snapshot.soaps {
            if restored.iter().any(|s| s.id == saved.id) {
                continue;
            }
            if let Some(selection) = catalog.selection_for(&saved.id) {
                restored.push(selection);
            }
        }
        restored.truncate(widget.max_selections());
        if !widget.config.is_fixed() || restored.len() == widget.max_selections() {
            widget.selections = restored;
        }

        if widget.config.offers_shape {
            widget.shape = snapshot.shape;
        }
        if widget.config.offers_engraving {
            widget.engraving = snapshot.engraving;
            if widget.engraving.accepts_text() {
                widget.engraving_text = snapshot.engraving_text.clone();
            }
        }
        widget.package = snapshot.package;

        Ok(widget)
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    #[inline]
    pub fn kind(&self) -> PackKind {
        self.config.kind
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected soaps, earliest first
    #[inline]
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn engraving(&self) -> Engraving {
        self.engraving
    }

    #[inline]
    pub fn engraving_text(&self) -> &str {
        &self.engraving_text
    }

    #[inline]
    pub fn package(&self) -> PackageType {
        self.package
    }

    #[inline]
    pub fn options(&self) -> &OptionPrices {
        &self.options
    }

    pub fn min_selections(&self) -> usize {
        self.config.min_selections()
    }

    pub fn max_selections(&self) -> usize {
        self.config.max_selections(self.quantity)
    }

    pub fn is_selected(&self, id: &SoapId) -> bool {
        self.selections.iter().any(|s| &s.id == id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Step the quantity by `delta`, clamped to the pack's range.
    ///
    /// When the ceiling drops below the selection count the latest-added
    /// soaps are dropped; raising it never touches selections.
    pub fn set_quantity(&mut self, delta: i32) -> CustomizerEvent {
        let from = self.quantity;
        let to = self.config.quantity_range.step(from, delta);
        if to == from {
            return CustomizerEvent::Unchanged;
        }
        self.quantity = to;

        let max = self.max_selections();
        let dropped = if self.selections.len() > max {
            self.selections
                .split_off(max)
                .into_iter()
                .map(|s| s.id)
                .collect()
        } else {
            Vec::new()
        };

        CustomizerEvent::QuantityChanged { from, to, dropped }
    }

    /// Add or remove a soap.
    ///
    /// Custom pack: a selected soap is removed; an unselected one is added
    /// if there's room. Fixed packs never shrink: selected soaps stay, and
    /// a new soap replaces the earliest-added one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelectionLimitExceeded` when a custom pack is
    /// already at its ceiling. State is unchanged.
    pub fn toggle_selection(&mut self, item: Selection) -> Result<CustomizerEvent, DomainError> {
        let fixed = self.config.is_fixed();

        if let Some(pos) = self.selections.iter().position(|s| s.id == item.id) {
            if fixed {
                return Ok(CustomizerEvent::Unchanged);
            }
            let removed = self.selections.remove(pos);
            return Ok(CustomizerEvent::SelectionRemoved { id: removed.id });
        }

        let max = self.max_selections();
        if self.selections.len() < max {
            let id = item.id.clone();
            self.selections.push(item);
            return Ok(CustomizerEvent::SelectionAdded { id });
        }

        if fixed && !self.selections.is_empty() {
            let removed = self.selections.remove(0);
            let added = item.id.clone();
            self.selections.push(item);
            return Ok(CustomizerEvent::SelectionReplaced {
                removed: removed.id,
                added,
            });
        }

        Err(DomainError::selection_limit(self.selections.len(), max))
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the pack doesn't offer shapes.
    pub fn set_shape(&mut self, shape: Shape) -> Result<CustomizerEvent, DomainError> {
        if !self.config.offers_shape {
            return Err(DomainError::validation(format!(
                "{} does not offer custom shapes",
                self.config.kind.title()
            )));
        }
        if self.shape == shape {
            return Ok(CustomizerEvent::Unchanged);
        }
        self.shape = shape;
        Ok(CustomizerEvent::ShapeChanged { shape })
    }

    /// Switch engraving style. Any switch clears the engraving text.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the pack doesn't offer engraving.
    pub fn set_engraving(&mut self, engraving: Engraving) -> Result<CustomizerEvent, DomainError> {
        if !self.config.offers_engraving {
            return Err(DomainError::validation(format!(
                "{} does not offer engraving",
                self.config.kind.title()
            )));
        }
        if self.engraving == engraving {
            return Ok(CustomizerEvent::Unchanged);
        }
        self.engraving = engraving;
        let text_cleared = !self.engraving_text.is_empty();
        self.engraving_text.clear();
        Ok(CustomizerEvent::EngravingChanged {
            engraving,
            text_cleared,
        })
    }

    /// Record engraving text. Ignored while no engraving is chosen.
    pub fn set_engraving_text(&mut self, text: impl Into<String>) -> CustomizerEvent {
        if !self.engraving.accepts_text() {
            return CustomizerEvent::Unchanged;
        }
        let text = text.into();
        if text == self.engraving_text {
            return CustomizerEvent::Unchanged;
        }
        self.engraving_text = text;
        CustomizerEvent::EngravingTextChanged
    }

    pub fn set_package(&mut self, package: PackageType) -> CustomizerEvent {
        if self.package == package {
            return CustomizerEvent::Unchanged;
        }
        self.package = package;
        CustomizerEvent::PackageChanged { package }
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    /// Total price for the current state.
    pub fn compute_price(&self) -> Price {
        self.config.pricing.price(&PriceInput {
            quantity: self.quantity,
            selections: &self.selections,
            shape: self.shape,
            engraving: self.engraving,
            package: self.package,
            options: &self.options,
        })
    }

    pub fn checkout_gate(&self) -> CheckoutGate {
        let count = self.selections.len();
        if (self.min_selections()..=self.max_selections()).contains(&count) {
            CheckoutGate::Eligible
        } else {
            CheckoutGate::Ineligible
        }
    }

    /// Guidance shown under the add-to-cart button while it is disabled.
    pub fn checkout_hint(&self) -> Option<String> {
        match self.checkout_gate() {
            CheckoutGate::Eligible => None,
            CheckoutGate::Ineligible => Some(format!(
                "Selecciona entre {} y {} jabones para continuar",
                self.min_selections(),
                self.max_selections()
            )),
        }
    }

    /// One slot per allowed selection, filled in selection order.
    pub fn slots(&self) -> Vec<Slot> {
        (0..self.max_selections())
            .map(|i| match self.selections.get(i) {
                Some(selection) => Slot::Filled(selection.name.clone()),
                None => Slot::Empty,
            })
            .collect()
    }

    pub fn selection_summary(&self) -> SelectionSummary {
        SelectionSummary {
            items: self
                .selections
                .iter()
                .map(|s| (s.name.clone(), s.price))
                .collect(),
            soaps_total: self.selections.iter().map(|s| s.price).sum(),
        }
    }

    // =========================================================================
    // Checkout and persistence
    // =========================================================================

    /// Validate the selection count and produce the order for the cart.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationFailed` if the selection count is
    /// outside `[min, max]`. State is never modified.
    pub fn submit(&self) -> Result<OrderRecord, DomainError> {
        if !self.checkout_gate().is_eligible() {
            return Err(DomainError::validation_failed(
                self.selections.len(),
                self.min_selections(),
                self.max_selections(),
            ));
        }

        Ok(OrderRecord {
            pack: self.config.kind,
            selections: self.selections.clone(),
            quantity: self.quantity,
            shape: self.shape,
            engraving: self.engraving,
            engraving_text: self.engraving_text.clone(),
            package: self.package,
            total_price: self.compute_price(),
        })
    }

    /// Snapshot the state for scratch storage. Always succeeds.
    pub fn save_configuration(&self) -> SavedConfiguration {
        SavedConfiguration {
            pack: self.config.kind,
            soaps: self.selections.clone(),
            quantity: self.quantity,
            shape: self.shape,
            engraving: self.engraving,
            engraving_text: self.engraving_text.clone(),
            package: self.package,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Soap, SoapCategory};
    use crate::value_objects::SoapName;

    fn soap(id: &str, price: u32) -> Soap {
        Soap::new(
            SoapId::new(id).expect("valid id"),
            SoapName::new(id).expect("valid name"),
            Price::new(price),
            SoapCategory::Herbal,
        )
    }

    fn catalog() -> Catalog {
        let ids = [
            ("lavanda", 5),
            ("romero", 5),
            ("calendula", 5),
            ("rosa-mosqueta", 10),
            ("menta", 5),
            ("aloe-vera", 6),
            ("avena", 5),
            ("carbon", 9),
            ("miel", 7),
            ("naranja", 5),
            ("coco", 5),
            ("arcilla", 8),
        ];
        Catalog::new(
            ids.iter().map(|(id, price)| soap(id, *price)).collect(),
            OptionPrices::default()
                .with_shape(Shape::Heart, Price::new(2))
                .with_engraving(Engraving::Initials, Price::new(10))
                .with_package(PackageType::Gift, Price::new(12)),
        )
        .expect("valid catalog")
    }

    fn pick(catalog: &Catalog, id: &str) -> Selection {
        catalog
            .selection_for(&SoapId::new(id).expect("valid id"))
            .expect("soap in catalog")
    }

    fn custom() -> (Customizer, Catalog) {
        let catalog = catalog();
        let widget = Customizer::new(PackConfig::custom(), &catalog).expect("custom pack");
        (widget, catalog)
    }

    fn ids(widget: &Customizer) -> Vec<&str> {
        widget.selections().iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn custom_starts_empty_and_ineligible() {
        let (widget, _) = custom();
        assert_eq!(widget.quantity(), 3);
        assert!(widget.selections().is_empty());
        assert_eq!(widget.checkout_gate(), CheckoutGate::Ineligible);
        assert_eq!(
            widget.checkout_hint().as_deref(),
            Some("Selecciona entre 3 y 3 jabones para continuar")
        );
    }

    #[test]
    fn add_at_ceiling_is_rejected_without_change() {
        let (mut widget, catalog) = custom();
        for id in ["lavanda", "romero", "calendula"] {
            widget.toggle_selection(pick(&catalog, id)).expect("room left");
        }
        let before = widget.clone();

        let err = widget
            .toggle_selection(pick(&catalog, "menta"))
            .expect_err("ceiling reached");
        assert_eq!(err, DomainError::selection_limit(3, 3));
        assert_eq!(widget, before);
    }

    #[test]
    fn lowering_quantity_truncates_latest_additions() {
        let (mut widget, catalog) = custom();
        widget.set_quantity(3);
        for id in ["lavanda", "romero", "calendula", "menta", "avena", "miel"] {
            widget.toggle_selection(pick(&catalog, id)).expect("room left");
        }

        let event = widget.set_quantity(-2);
        assert_eq!(
            event,
            CustomizerEvent::QuantityChanged {
                from: 6,
                to: 4,
                dropped: vec![
                    SoapId::new("avena").expect("valid id"),
                    SoapId::new("miel").expect("valid id"),
                ],
            }
        );
        assert_eq!(ids(&widget), vec!["lavanda", "romero", "calendula", "menta"]);
    }

    #[test]
    fn quantity_at_bound_is_unchanged() {
        let (mut widget, _) = custom();
        assert_eq!(widget.set_quantity(-1), CustomizerEvent::Unchanged);
        widget.set_quantity(100);
        assert_eq!(widget.quantity(), 12);
    }

    #[test]
    fn engraving_text_needs_an_engraving() {
        let (mut widget, _) = custom();
        assert_eq!(widget.set_engraving_text("AB"), CustomizerEvent::Unchanged);
        assert_eq!(widget.engraving_text(), "");

        widget.set_engraving(Engraving::Initials).expect("offered");
        assert_eq!(
            widget.set_engraving_text("AB"),
            CustomizerEvent::EngravingTextChanged
        );
        assert_eq!(widget.engraving_text(), "AB");

        let event = widget.set_engraving(Engraving::Name).expect("offered");
        assert_eq!(
            event,
            CustomizerEvent::EngravingChanged {
                engraving: Engraving::Name,
                text_cleared: true
            }
        );
        assert_eq!(widget.engraving_text(), "");
    }

    #[test]
    fn options_feed_the_price() {
        let (mut widget, catalog) = custom();
        for id in ["lavanda", "rosa-mosqueta", "carbon"] {
            widget.toggle_selection(pick(&catalog, id)).expect("room left");
        }
        widget.set_shape(Shape::Heart).expect("offered");
        widget.set_engraving(Engraving::Initials).expect("offered");
        widget.set_package(PackageType::Gift);

        // 45 base + (10-8) + (9-8) premium + 2*3 shape + 10 engraving + 12 package
        assert_eq!(widget.compute_price(), Price::new(45 + 2 + 1 + 6 + 10 + 12));
    }

    #[test]
    fn submit_builds_order_record() {
        let (mut widget, catalog) = custom();
        for id in ["lavanda", "romero", "calendula"] {
            widget.toggle_selection(pick(&catalog, id)).expect("room left");
        }
        widget.set_engraving(Engraving::Initials).expect("offered");
        widget.set_engraving_text("MJ");

        let order = widget.submit().expect("eligible");
        assert_eq!(order.pack, PackKind::Custom);
        assert_eq!(order.selections.len(), 3);
        assert_eq!(order.engraving_text, "MJ");
        assert_eq!(order.total_price, Price::new(55));
    }

    #[test]
    fn fixed_pack_replaces_oldest_and_refuses_removal() {
        let catalog = catalog();
        let mut widget = Customizer::new(PackConfig::basic(), &catalog).expect("basic pack");
        assert_eq!(ids(&widget), vec!["lavanda", "romero", "calendula"]);
        assert!(widget.checkout_gate().is_eligible());

        assert_eq!(
            widget
                .toggle_selection(pick(&catalog, "romero"))
                .expect("no error"),
            CustomizerEvent::Unchanged
        );

        let event = widget
            .toggle_selection(pick(&catalog, "menta"))
            .expect("replace");
        assert_eq!(
            event,
            CustomizerEvent::SelectionReplaced {
                removed: SoapId::new("lavanda").expect("valid id"),
                added: SoapId::new("menta").expect("valid id"),
            }
        );
        assert_eq!(ids(&widget), vec!["romero", "calendula", "menta"]);
    }

    #[test]
    fn fixed_pack_quantity_keeps_selections_and_prices_flat() {
        let catalog = catalog();
        let mut widget = Customizer::new(PackConfig::premium(), &catalog).expect("premium pack");
        assert_eq!(widget.compute_price(), Price::new(80));

        widget.set_quantity(5);
        assert_eq!(widget.quantity(), 8);
        assert_eq!(widget.selections().len(), 6);
        assert_eq!(widget.compute_price(), Price::new(96));

        widget.set_quantity(-5);
        assert_eq!(widget.quantity(), 6);
        assert_eq!(widget.selections().len(), 6);

        widget.set_package(PackageType::Gift);
        assert_eq!(widget.compute_price(), Price::new(92));
    }

    #[test]
    fn fixed_pack_rejects_shape_and_engraving() {
        let catalog = catalog();
        let mut widget = Customizer::new(PackConfig::basic(), &catalog).expect("basic pack");
        assert!(matches!(
            widget.set_shape(Shape::Heart),
            Err(DomainError::Validation(_))
        ));
        assert!(widget.set_engraving(Engraving::Name).is_err());
        assert_eq!(widget.shape(), Shape::Rectangular);
    }

    #[test]
    fn fixed_pack_needs_defaults_in_catalog() {
        let catalog = Catalog::new(vec![soap("lavanda", 5)], OptionPrices::default())
            .expect("valid catalog");
        assert!(matches!(
            Customizer::new(PackConfig::basic(), &catalog),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn slots_and_summary_follow_selections() {
        let (mut widget, catalog) = custom();
        widget.set_quantity(1);
        widget
            .toggle_selection(pick(&catalog, "rosa-mosqueta"))
            .expect("room left");
        widget
            .toggle_selection(pick(&catalog, "lavanda"))
            .expect("room left");

        let slots = widget.slots();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots.iter().filter(|s| s.is_filled()).count(), 2);
        assert_eq!(
            slots[0],
            Slot::Filled(SoapName::new("rosa-mosqueta").expect("valid name"))
        );
        assert_eq!(slots[3], Slot::Empty);

        let summary = widget.selection_summary();
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.soaps_total, Price::new(15));
    }

    #[test]
    fn save_and_restore_round_trip() {
        let (mut widget, catalog) = custom();
        widget.set_quantity(2);
        for id in ["lavanda", "romero", "calendula", "menta"] {
            widget.toggle_selection(pick(&catalog, id)).expect("room left");
        }
        widget.set_shape(Shape::Heart).expect("offered");
        widget.set_engraving(Engraving::Initials).expect("offered");
        widget.set_engraving_text("LV");
        widget.set_package(PackageType::Gift);

        let snapshot = widget.save_configuration();
        let restored =
            Customizer::restore(PackConfig::custom(), &snapshot, &catalog).expect("restores");
        assert_eq!(restored, widget);
    }

    #[test]
    fn restore_sanitizes_untrusted_snapshot() {
        let catalog = catalog();
        let snapshot = SavedConfiguration {
            pack: PackKind::Custom,
            soaps: ["lavanda", "lavanda", "unknown", "romero", "menta", "avena"]
                .iter()
                .map(|id| soap(id, 99).to_selection())
                .collect(),
            quantity: 1,
            shape: Shape::Round,
            engraving: Engraving::None,
            engraving_text: "ignored".to_string(),
            package: PackageType::Premium,
        };

        let widget =
            Customizer::restore(PackConfig::custom(), &snapshot, &catalog).expect("restores");
        assert_eq!(widget.quantity(), 3);
        assert_eq!(ids(&widget), vec!["lavanda", "romero", "menta"]);
        assert_eq!(widget.engraving_text(), "");
        assert_eq!(widget.package(), PackageType::Premium);
    }

    #[test]
    fn restore_rejects_other_pack() {
        let (widget, catalog) = custom();
        let snapshot = widget.save_configuration();
        assert!(Customizer::restore(PackConfig::basic(), &snapshot, &catalog).is_err());
    }

    #[test]
    fn restore_fixed_pack_keeps_defaults_when_snapshot_is_short() {
        let catalog = catalog();
        let snapshot = SavedConfiguration {
            pack: PackKind::Basic,
            soaps: vec![pick(&catalog, "menta")],
            quantity: 5,
            shape: Shape::Heart,
            engraving: Engraving::Name,
            engraving_text: "x".to_string(),
            package: PackageType::Gift,
        };
        let widget =
            Customizer::restore(PackConfig::basic(), &snapshot, &catalog).expect("restores");
        assert_eq!(ids(&widget), vec!["lavanda", "romero", "calendula"]);
        assert_eq!(widget.quantity(), 5);
        assert_eq!(widget.shape(), Shape::Rectangular);
        assert_eq!(widget.engraving(), Engraving::None);
        assert_eq!(widget.package(), PackageType::Gift);
    }
}
