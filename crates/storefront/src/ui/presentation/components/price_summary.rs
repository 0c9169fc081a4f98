use dioxus::prelude::*;

use crate::presentation::state::use_customizer_state;

/// Live total, recomputed on every render from the widget state
#[component]
pub fn PriceSummary() -> Element {
    let state = use_customizer_state();
    let (total, quantity) = {
        let customizer = state.customizer.read();
        (customizer.compute_price(), customizer.quantity())
    };

    rsx! {
        div {
            class: "card price-summary",
            span { class: "label", "Total ({quantity} jabones)" }
            div { class: "price-total", "{total}" }
        }
    }
}
