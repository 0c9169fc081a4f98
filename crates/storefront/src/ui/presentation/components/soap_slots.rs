//! Pack preview: one slot per soap the pack can hold

use dioxus::prelude::*;
use jaboneria_domain::Slot;

use crate::presentation::state::use_customizer_state;

#[component]
pub fn SoapSlots() -> Element {
    let state = use_customizer_state();
    let (slots, selected, max) = {
        let customizer = state.customizer.read();
        (
            customizer.slots(),
            customizer.selections().len(),
            customizer.max_selections(),
        )
    };

    rsx! {
        div {
            class: "card",
            h3 { "Tu pack ({selected}/{max})" }
            div {
                class: "soap-slots",
                for (index, slot) in slots.into_iter().enumerate() {
                    match slot {
                        Slot::Filled(name) => rsx! {
                            div { key: "{index}", class: "soap-slot filled", "{name}" }
                        },
                        Slot::Empty => rsx! {
                            div { key: "{index}", class: "soap-slot", "Vacío" }
                        },
                    }
                }
            }
        }
    }
}
