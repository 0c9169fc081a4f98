//! Itemized list of the selected soaps

use dioxus::prelude::*;

use crate::presentation::state::use_customizer_state;

#[component]
pub fn SelectionSummary() -> Element {
    let state = use_customizer_state();
    let summary = state.customizer.read().selection_summary();

    rsx! {
        div {
            class: "card selection-summary",
            h3 { "Jabones seleccionados" }
            if summary.is_empty() {
                p { class: "empty", "Aún no has seleccionado jabones" }
            } else {
                ul {
                    for (index, (name, price)) in summary.items.iter().enumerate() {
                        li {
                            key: "{index}",
                            span { class: "selected-soap-name", "{name}" }
                            span { class: "selected-soap-price", "{price}" }
                        }
                    }
                    li {
                        class: "selected-soap-total",
                        span { "Total jabones" }
                        span { strong { "{summary.soaps_total}" } }
                    }
                }
            }
        }
    }
}
