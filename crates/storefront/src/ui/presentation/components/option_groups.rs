//! Radio-style option groups: shape, engraving, packaging
//!
//! Shape and engraving are only rendered for packs that offer them.

use dioxus::prelude::*;
use jaboneria_domain::{Engraving, PackageType, Price, Shape};

use crate::presentation::state::{use_customizer_state, use_notification_state, Notification};

/// Label with the option's surcharge, if any
fn priced_label(label: &str, price: Price, per_unit: bool) -> String {
    match (price == Price::ZERO, per_unit) {
        (true, _) => label.to_string(),
        (false, true) => format!("{} (+{} c/u)", label, price),
        (false, false) => format!("{} (+{})", label, price),
    }
}

#[component]
fn OptionButton(label: String, selected: bool, onselect: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: if selected { "option selected" } else { "option" },
            onclick: move |_| onselect.call(()),
            input { r#type: "radio", checked: selected, readonly: true }
            span { "{label}" }
        }
    }
}

#[component]
pub fn ShapeOptions() -> Element {
    let mut state = use_customizer_state();
    let mut notifications = use_notification_state();

    let (offered, current, options) = {
        let customizer = state.customizer.read();
        (
            customizer.config().offers_shape,
            customizer.shape(),
            customizer.options().clone(),
        )
    };

    if !offered {
        return rsx! {};
    }

    rsx! {
        div {
            class: "card",
            h3 { "Forma" }
            div {
                class: "option-group",
                for shape in Shape::ALL {
                    OptionButton {
                        key: "{shape}",
                        label: priced_label(shape.label(), options.shape(shape), true),
                        selected: shape == current,
                        onselect: move |_| {
                            if let Err(e) = state.apply(|c| c.set_shape(shape)) {
                                notifications.show(Notification::from_domain_error(&e));
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
pub fn EngravingOptions() -> Element {
    let mut state = use_customizer_state();
    let mut notifications = use_notification_state();

    let (offered, current, text, options) = {
        let customizer = state.customizer.read();
        (
            customizer.config().offers_engraving,
            customizer.engraving(),
            customizer.engraving_text().to_string(),
            customizer.options().clone(),
        )
    };

    if !offered {
        return rsx! {};
    }

    rsx! {
        div {
            class: "card",
            h3 { "Grabado" }
            div {
                class: "option-group",
                for engraving in Engraving::ALL {
                    OptionButton {
                        key: "{engraving}",
                        label: priced_label(engraving.label(), options.engraving(engraving), false),
                        selected: engraving == current,
                        onselect: move |_| {
                            if let Err(e) = state.apply(|c| c.set_engraving(engraving)) {
                                notifications.show(Notification::from_domain_error(&e));
                            }
                        },
                    }
                }
            }
            if current.accepts_text() {
                input {
                    class: "engraving-text",
                    r#type: "text",
                    placeholder: "Texto del grabado",
                    value: "{text}",
                    oninput: move |evt: FormEvent| {
                        state.update(|c| c.set_engraving_text(evt.value()));
                    },
                }
            }
        }
    }
}

#[component]
pub fn PackageOptions() -> Element {
    let mut state = use_customizer_state();
    let (current, options) = {
        let customizer = state.customizer.read();
        (customizer.package(), customizer.options().clone())
    };

    rsx! {
        div {
            class: "card",
            h3 { "Empaque" }
            div {
                class: "option-group",
                for package in PackageType::ALL {
                    OptionButton {
                        key: "{package}",
                        label: priced_label(package.label(), options.package(package), false),
                        selected: package == current,
                        onselect: move |_| state.update(|c| c.set_package(package)),
                    }
                }
            }
        }
    }
}
