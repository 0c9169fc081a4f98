//! In-memory platform for tests
//!
//! Storage lives in a shared map, sleeps resolve immediately, and page
//! titles are recorded instead of applied.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{DocumentProvider, SleepProvider, StorageProvider};
use crate::state::Platform;

/// Storage provider over a shared `HashMap`
///
/// Clones share the same map, so a test can keep one handle to inspect what
/// the code under test wrote.
#[derive(Clone, Default)]
pub struct InMemoryStorageProvider {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for InMemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
    }
}

#[derive(Clone, Default)]
pub struct InstantSleepProvider;

impl SleepProvider for InstantSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(std::future::ready(()))
    }
}

#[derive(Clone, Default)]
pub struct RecordingDocumentProvider {
    titles: Arc<RwLock<Vec<String>>>,
}

impl RecordingDocumentProvider {
    pub fn last_title(&self) -> Option<String> {
        self.titles.read().ok()?.last().cloned()
    }
}

impl DocumentProvider for RecordingDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut titles) = self.titles.write() {
            titles.push(title.to_string());
        }
    }
}

/// Create an in-memory platform plus a handle onto its storage
pub fn create_mock_platform() -> (Platform, InMemoryStorageProvider) {
    let storage = InMemoryStorageProvider::new();
    let platform = Platform::new(
        InstantSleepProvider,
        storage.clone(),
        RecordingDocumentProvider::default(),
    );
    (platform, storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::PlatformPort;

    #[test]
    fn platform_routes_storage_to_shared_map() {
        let (platform, storage) = create_mock_platform();
        platform.storage_save("savedConfiguration", "{}");

        assert_eq!(storage.load("savedConfiguration").as_deref(), Some("{}"));
        platform.storage_remove("savedConfiguration");
        assert!(storage.is_empty());
    }

    #[test]
    fn recorded_titles_keep_the_latest() {
        let document = RecordingDocumentProvider::default();
        document.set_page_title("Pack Básico");
        document.set_page_title("Pack Premium");
        assert_eq!(document.last_title().as_deref(), Some("Pack Premium"));
    }
}
