//! Storefront routes
//!
//! `/` renders the configured start pack (the custom pack unless
//! `JABONERIA_START_PACK` says otherwise). Each pack also has its own path.

use dioxus::prelude::*;
use jaboneria_domain::PackKind;

use crate::presentation::use_services;
use crate::presentation::views::PackView;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StorefrontLayout)]
        #[route("/")]
        Home {},
        #[route("/pack/personalizado")]
        CustomPack {},
        #[route("/pack/basico")]
        BasicPack {},
        #[route("/pack/premium")]
        PremiumPack {},
}

impl Route {
    /// The dedicated route for a pack
    pub fn for_pack(kind: PackKind) -> Self {
        match kind {
            PackKind::Custom => Route::CustomPack {},
            PackKind::Basic => Route::BasicPack {},
            PackKind::Premium => Route::PremiumPack {},
        }
    }
}

#[component]
fn StorefrontLayout() -> Element {
    rsx! {
        nav {
            class: "pack-nav",
            for kind in PackKind::ALL {
                Link {
                    key: "{kind}",
                    to: Route::for_pack(kind),
                    active_class: "active",
                    "{kind.title()}"
                }
            }
        }
        Outlet::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let services = use_services();
    rsx! {
        PackView { kind: services.start_pack }
    }
}

#[component]
fn CustomPack() -> Element {
    rsx! {
        PackView { kind: PackKind::Custom }
    }
}

#[component]
fn BasicPack() -> Element {
    rsx! {
        PackView { kind: PackKind::Basic }
    }
}

#[component]
fn PremiumPack() -> Element {
    rsx! {
        PackView { kind: PackKind::Premium }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_paths() {
        assert_eq!(Route::Home {}.to_string(), "/");
        assert_eq!(Route::for_pack(PackKind::Custom).to_string(), "/pack/personalizado");
        assert_eq!(Route::for_pack(PackKind::Basic).to_string(), "/pack/basico");
        assert_eq!(Route::for_pack(PackKind::Premium).to_string(), "/pack/premium");
    }

    #[test]
    fn paths_parse_back_to_routes() {
        assert_eq!("/pack/basico".parse::<Route>().ok(), Some(Route::BasicPack {}));
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Home {}));
    }
}
