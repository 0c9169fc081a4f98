//! Services handed to the UI by the composition root

use dioxus::prelude::*;
use jaboneria_domain::{Catalog, PackKind};

use crate::application::services::CustomizationService;

/// Everything a pack view needs besides its own state
#[derive(Clone)]
pub struct Services {
    pub customization: CustomizationService,
    pub catalog: Catalog,
    /// Pack rendered at `/`
    pub start_pack: PackKind,
}

impl Services {
    pub fn new(customization: CustomizationService, catalog: Catalog, start_pack: PackKind) -> Self {
        Self {
            customization,
            catalog,
            start_pack,
        }
    }
}

/// Hook to access the services from Dioxus context
pub fn use_services() -> Services {
    use_context::<Services>()
}
