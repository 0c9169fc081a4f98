//! Quantity stepper
//!
//! The buttons disable themselves at the pack's floor and ceiling; the
//! domain clamps regardless.

use dioxus::prelude::*;

use crate::presentation::state::use_customizer_state;

#[component]
pub fn QuantitySelector() -> Element {
    let mut state = use_customizer_state();

    let (quantity, floor, ceiling) = {
        let customizer = state.customizer.read();
        let range = customizer.config().quantity_range;
        (customizer.quantity(), range.floor(), range.ceiling())
    };

    rsx! {
        div {
            class: "card quantity-selector",
            span { class: "label", "Cantidad de jabones" }
            button {
                class: "qty-btn",
                disabled: quantity <= floor,
                onclick: move |_| state.update(|c| c.set_quantity(-1)),
                "−"
            }
            span { class: "quantity", "{quantity}" }
            button {
                class: "qty-btn",
                disabled: quantity >= ceiling,
                onclick: move |_| state.update(|c| c.set_quantity(1)),
                "+"
            }
            span { class: "range", "({floor}–{ceiling})" }
        }
    }
}
