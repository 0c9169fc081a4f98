use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

use presentation::components::NotificationToast;
use presentation::state::NotificationState;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime.
    use_context_provider(NotificationState::new);

    rsx! {
        document::Stylesheet {
            href: asset!("/assets/storefront.css"),
        }
        Router::<routes::Route> {}
        NotificationToast {}
    }
}
