//! Jaboneria storefront - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jaboneria_storefront::application::services::CustomizationService;
use jaboneria_storefront::config::StorefrontConfig;
use jaboneria_storefront::infrastructure::{embedded_catalog, load_catalog, LoggingCart};
use jaboneria_storefront::ports::outbound::{CartPort, PlatformPort};
use jaboneria_storefront::presentation::Services;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "jaboneria_storefront=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Jaboneria storefront");

    let config = StorefrontConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("Invalid configuration, using defaults: {:#}", e);
        StorefrontConfig::default()
    });

    let catalog = match load_catalog(&config).or_else(|e| {
        tracing::error!("Falling back to the embedded catalog: {:#}", e);
        embedded_catalog()
    }) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("No usable catalog: {:#}", e);
            return;
        }
    };

    // Platform
    let platform = jaboneria_storefront::infrastructure::platform::create_platform();
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // Cart
    let cart: Arc<dyn CartPort> = Arc::new(LoggingCart::new());

    let services = Services::new(
        CustomizationService::new(cart, platform.clone()),
        catalog,
        config.start_pack,
    );

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Jaboneria");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(services)
        .launch(jaboneria_storefront::app);
}
