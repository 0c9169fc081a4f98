//! Add-to-cart and save-configuration actions
//!
//! Add-to-cart is disabled while the checkout gate is closed; the hint
//! under it says how many soaps are needed.

use dioxus::prelude::*;

use crate::presentation::state::{use_customizer_state, use_notification_state, Notification};
use crate::presentation::use_services;

#[component]
pub fn CheckoutPanel() -> Element {
    let services = use_services();
    let state = use_customizer_state();
    let mut notifications = use_notification_state();

    let (eligible, hint, kind) = {
        let customizer = state.customizer.read();
        (
            customizer.checkout_gate().is_eligible(),
            customizer.checkout_hint(),
            customizer.kind(),
        )
    };

    let cart_service = services.customization.clone();
    let save_service = services.customization.clone();

    rsx! {
        div {
            class: "card checkout-panel",
            button {
                class: "btn-primary",
                disabled: !eligible,
                onclick: move |_| {
                    let result = cart_service.add_to_cart(&state.customizer.read());
                    match result {
                        Ok(_) => notifications.show(Notification::success(format!(
                            "¡{} agregado al carrito!",
                            kind.title()
                        ))),
                        Err(e) => {
                            tracing::warn!(error = %e, "Add to cart failed");
                            notifications.show(Notification::from_service_error(&e));
                        }
                    }
                },
                "Agregar al carrito"
            }
            if let Some(hint) = hint {
                p { class: "checkout-hint", "{hint}" }
            }
            button {
                class: "btn-secondary",
                onclick: move |_| {
                    match save_service.save_configuration(&state.customizer.read()) {
                        Ok(()) => notifications.show(Notification::success("¡Configuración guardada!")),
                        Err(e) => {
                            tracing::error!(error = %e, "Saving configuration failed");
                            notifications.show(Notification::from_service_error(&e));
                        }
                    }
                },
                "Guardar configuración"
            }
        }
    }
}
