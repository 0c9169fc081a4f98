//! Toast notification
//!
//! Auto-dismisses after [`NOTIFICATION_TIMEOUT_MS`] or on click.

use dioxus::prelude::*;

use crate::presentation::state::notification_state::NOTIFICATION_TIMEOUT_MS;
use crate::presentation::state::{use_notification_state, Notification};
use crate::use_platform;

#[component]
pub fn NotificationToast() -> Element {
    let platform = use_platform();
    let mut notifications = use_notification_state();

    use_effect(move || {
        let seq = notifications.current.read().as_ref().map(|n| n.seq);
        if let Some(seq) = seq {
            let platform = platform.clone();
            spawn(async move {
                platform.sleep_ms(NOTIFICATION_TIMEOUT_MS).await;
                notifications.dismiss(seq);
            });
        }
    });

    let current = notifications.current.read().clone();

    rsx! {
        if let Some(Notification { seq, kind, message }) = current {
            div {
                class: "toast {kind.css_class()}",
                onclick: move |_| notifications.dismiss(seq),
                "{message}"
            }
        }
    }
}
