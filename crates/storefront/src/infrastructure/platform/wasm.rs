//! WASM platform implementations
//!
//! Browser-backed providers: `localStorage`, `document.title`, and
//! `setTimeout`-driven sleeps.

use crate::ports::outbound::platform::{DocumentProvider, SleepProvider, StorageProvider};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// WASM storage provider backed by `localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::error!("Failed to write localStorage key: {}", key);
                }
            }
            None => tracing::warn!("localStorage unavailable; dropping save for {}", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                tracing::error!("Failed to remove localStorage key: {}", key);
            }
        }
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

/// WASM sleep provider using gloo-timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(WasmSleepProvider, WasmStorageProvider, WasmDocumentProvider)
}
