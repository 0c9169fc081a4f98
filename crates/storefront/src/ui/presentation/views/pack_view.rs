//! Pack view - one customizer page
//!
//! Restores the saved configuration when it belongs to this pack, otherwise
//! starts from the pack's defaults.

use dioxus::prelude::*;
use jaboneria_domain::{Customizer, PackKind};

use crate::presentation::components::{
    CategoryTabs, CheckoutPanel, EngravingOptions, PackageOptions, PriceSummary,
    QuantitySelector, SelectionSummary, ShapeOptions, SoapPicker, SoapSlots,
};
use crate::presentation::state::CustomizerState;
use crate::presentation::use_services;
use crate::use_platform;

#[component]
pub fn PackView(kind: PackKind) -> Element {
    let services = use_services();
    let platform = use_platform();

    let initial = use_hook(|| {
        let config = kind.config();
        match services
            .customization
            .load_configuration(config.clone(), &services.catalog)
        {
            Some(widget) => Ok(widget),
            None => Customizer::new(config, &services.catalog),
        }
    });

    use_effect(move || platform.set_page_title(kind.title()));

    match initial {
        Ok(widget) => rsx! {
            PackCustomizer { widget }
        },
        Err(e) => {
            tracing::error!(pack = %kind, error = %e, "Pack unavailable for this catalog");
            rsx! {
                div { class: "card error", "Este pack no está disponible en este momento." }
            }
        }
    }
}

#[component]
fn PackCustomizer(widget: Customizer) -> Element {
    let state = use_context_provider(|| CustomizerState::new(widget.clone()));
    let kind = state.customizer.read().kind();
    let fixed = state.customizer.read().config().is_fixed();

    rsx! {
        div {
            class: "customizer",
            h1 { "{kind.title()}" }
            if fixed {
                p {
                    class: "pack-note",
                    "Elige un jabón para reemplazar el primero de tu pack."
                }
            }
            QuantitySelector {}
            div {
                class: "card",
                h3 { "Elige tus jabones" }
                CategoryTabs {}
                SoapPicker {}
            }
            SoapSlots {}
            ShapeOptions {}
            EngravingOptions {}
            PackageOptions {}
            SelectionSummary {}
            PriceSummary {}
            CheckoutPanel {}
        }
    }
}
