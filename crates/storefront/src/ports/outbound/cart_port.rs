//! Cart Port - hands validated orders to the shopping cart
//!
//! The cart is a collaborator outside the storefront widget. It receives the
//! wire order record and answers with a receipt, or fails.

use chrono::{DateTime, Utc};
use jaboneria_domain::OrderId;
use jaboneria_shared::OrderRecordData;

/// Acknowledgement returned by the cart for an accepted order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartReceipt {
    pub order_id: OrderId,
    pub added_at: DateTime<Utc>,
}

impl CartReceipt {
    pub fn new(order_id: OrderId, added_at: DateTime<Utc>) -> Self {
        Self { order_id, added_at }
    }
}

/// Port for the shopping cart
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait CartPort: Send + Sync {
    /// Add an order to the cart
    ///
    /// # Arguments
    /// * `order` - The order record, already validated and priced
    fn add_to_cart(&self, order: &OrderRecordData) -> anyhow::Result<CartReceipt>;
}
