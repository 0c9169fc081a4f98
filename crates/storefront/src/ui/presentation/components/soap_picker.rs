//! Soap picker with category tabs
//!
//! Clicking a soap toggles it. In the fixed packs a new soap replaces the
//! earliest pick, so the set never drops below its size.

use dioxus::prelude::*;
use jaboneria_domain::{Soap, SoapCategory};

use crate::presentation::state::{
    use_customizer_state, use_notification_state, Notification,
};
use crate::presentation::use_services;

#[component]
pub fn CategoryTabs() -> Element {
    let services = use_services();
    let mut state = use_customizer_state();
    let active = *state.active_category.read();
    let categories = services.catalog.categories();

    rsx! {
        div {
            class: "category-tabs",
            button {
                class: if active.is_none() { "tab active" } else { "tab" },
                onclick: move |_| state.select_category(None),
                "Todos"
            }
            for category in categories {
                CategoryTab { key: "{category}", category, active: active == Some(category) }
            }
        }
    }
}

#[component]
fn CategoryTab(category: SoapCategory, active: bool) -> Element {
    let mut state = use_customizer_state();

    rsx! {
        button {
            class: if active { "tab active" } else { "tab" },
            onclick: move |_| state.select_category(Some(category)),
            "{category.label()}"
        }
    }
}

#[component]
pub fn SoapPicker() -> Element {
    let services = use_services();
    let state = use_customizer_state();
    let category = *state.active_category.read();

    let soaps: Vec<Soap> = services.catalog.filter(category).cloned().collect();

    rsx! {
        div {
            class: "soap-grid",
            for soap in soaps {
                SoapOption { key: "{soap.id}", soap }
            }
        }
    }
}

#[component]
fn SoapOption(soap: Soap) -> Element {
    let mut state = use_customizer_state();
    let mut notifications = use_notification_state();
    let selected = state.customizer.read().is_selected(&soap.id);
    let selection = soap.to_selection();

    rsx! {
        div {
            class: if selected { "soap-option selected" } else { "soap-option" },
            onclick: move |_| {
                let item = selection.clone();
                if let Err(e) = state.apply(|c| c.toggle_selection(item)) {
                    notifications.show(Notification::from_domain_error(&e));
                }
            },
            div { class: "soap-name", "{soap.name}" }
            div { class: "soap-price", "{soap.price}" }
        }
    }
}
