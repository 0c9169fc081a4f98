//! Customization Service - checkout and save/restore for the pack widget
//!
//! The widget itself lives in the domain crate. This service owns only the
//! ports: it turns a validated order into the cart's wire record and moves
//! configuration snapshots in and out of scratch storage.

use std::sync::Arc;

use jaboneria_domain::{Catalog, Customizer, PackConfig};
use jaboneria_shared::{configuration, OrderRecordData};

use crate::application::ServiceError;
use crate::ports::outbound::{storage_keys, CartPort, CartReceipt, PlatformPort};

#[derive(Clone)]
pub struct CustomizationService {
    cart: Arc<dyn CartPort>,
    platform: Arc<dyn PlatformPort>,
}

impl CustomizationService {
    pub fn new(cart: Arc<dyn CartPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { cart, platform }
    }

    /// Validate the widget and hand its order to the cart
    ///
    /// # Errors
    ///
    /// `ServiceError::Domain(ValidationFailed)` when the selection count is
    /// outside the pack's bounds; the cart is not contacted.
    pub fn add_to_cart(&self, widget: &Customizer) -> Result<CartReceipt, ServiceError> {
        let order = widget.submit()?;
        let record = OrderRecordData::from(&order);

        let receipt = self
            .cart
            .add_to_cart(&record)
            .map_err(ServiceError::Cart)?;

        tracing::info!(
            order_id = %receipt.order_id,
            pack = %order.pack,
            total_price = %order.total_price,
            "Pack added to cart"
        );
        Ok(receipt)
    }

    /// Overwrite the saved configuration with the widget's current state
    pub fn save_configuration(&self, widget: &Customizer) -> Result<(), ServiceError> {
        let snapshot = widget.save_configuration();
        let json = configuration::encode(&snapshot).map_err(ServiceError::Encode)?;
        self.platform
            .storage_save(storage_keys::SAVED_CONFIGURATION, &json);

        tracing::info!(
            pack = %snapshot.pack,
            soaps = snapshot.soaps.len(),
            quantity = snapshot.quantity,
            "Configuration saved"
        );
        Ok(())
    }

    /// Rebuild a widget from the saved configuration
    ///
    /// Returns `None` when nothing is saved, the snapshot can't be decoded,
    /// or it belongs to another pack.
    pub fn load_configuration(&self, config: PackConfig, catalog: &Catalog) -> Option<Customizer> {
        let json = self
            .platform
            .storage_load(storage_keys::SAVED_CONFIGURATION)?;

        let snapshot = match configuration::decode(&json) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring undecodable saved configuration");
                return None;
            }
        };

        match Customizer::restore(config, &snapshot, catalog) {
            Ok(widget) => {
                tracing::debug!(pack = %widget.kind(), "Restored saved configuration");
                Some(widget)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved configuration not restored");
                None
            }
        }
    }

    /// Drop the saved configuration
    pub fn clear_configuration(&self) {
        self.platform
            .storage_remove(storage_keys::SAVED_CONFIGURATION);
    }
}
