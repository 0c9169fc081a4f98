//! Logging cart - stands in for the storefront's cart backend
//!
//! Accepts every order, logs it, and issues a fresh order id. The full
//! record is logged at debug level as the JSON the backend would receive.

use chrono::Utc;
use jaboneria_domain::OrderId;
use jaboneria_shared::OrderRecordData;

use crate::ports::outbound::{CartPort, CartReceipt};

#[derive(Clone, Default)]
pub struct LoggingCart;

impl LoggingCart {
    pub fn new() -> Self {
        Self
    }
}

impl CartPort for LoggingCart {
    fn add_to_cart(&self, order: &OrderRecordData) -> anyhow::Result<CartReceipt> {
        let receipt = CartReceipt::new(OrderId::new(), Utc::now());

        tracing::info!(
            order_id = %receipt.order_id,
            pack = order.pack.as_deref().unwrap_or("custom"),
            soaps = order.soaps.len(),
            quantity = order.quantity,
            total_price = order.total_price,
            "Order added to cart"
        );
        tracing::debug!(order = %order.to_json()?, "Order record");

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> OrderRecordData {
        OrderRecordData {
            pack: None,
            soaps: Vec::new(),
            quantity: 3,
            shape: "rectangular".to_string(),
            engraving: "none".to_string(),
            engraving_text: String::new(),
            package: "standard".to_string(),
            total_price: 45,
        }
    }

    #[test]
    fn every_order_gets_its_own_id() {
        let cart = LoggingCart::new();
        let first = cart.add_to_cart(&order()).expect("accepted");
        let second = cart.add_to_cart(&order()).expect("accepted");

        assert_ne!(first.order_id, second.order_id);
        assert!(second.added_at >= first.added_at);
    }
}
