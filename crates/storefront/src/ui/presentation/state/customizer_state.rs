//! Customizer state management
//!
//! Wraps the domain widget in a signal. Every mutation goes through
//! [`CustomizerState::apply`] so the resulting event is logged in one place.

use dioxus::prelude::*;
use jaboneria_domain::{Customizer, CustomizerEvent, DomainError, SoapCategory};

/// Per-pack widget state, provided by the pack view
#[derive(Clone, Copy)]
pub struct CustomizerState {
    pub customizer: Signal<Customizer>,
    /// Category tab filtering the soap picker (`None` = all)
    pub active_category: Signal<Option<SoapCategory>>,
}

impl CustomizerState {
    pub fn new(customizer: Customizer) -> Self {
        Self {
            customizer: Signal::new(customizer),
            active_category: Signal::new(None),
        }
    }

    /// Run a fallible mutation and log what it did
    pub fn apply(
        &mut self,
        mutation: impl FnOnce(&mut Customizer) -> Result<CustomizerEvent, DomainError>,
    ) -> Result<CustomizerEvent, DomainError> {
        let mut customizer = self.customizer.write();
        let kind = customizer.kind();
        match mutation(&mut *customizer) {
            Ok(event) => {
                log_event(kind, &event);
                Ok(event)
            }
            Err(e) => {
                tracing::warn!(pack = %kind, error = %e, "Customizer rejected change");
                Err(e)
            }
        }
    }

    /// Run an infallible mutation and log what it did
    pub fn update(&mut self, mutation: impl FnOnce(&mut Customizer) -> CustomizerEvent) {
        let _ = self.apply(|c| Ok(mutation(c)));
    }

    pub fn select_category(&mut self, category: Option<SoapCategory>) {
        self.active_category.set(category);
    }
}

fn log_event(kind: jaboneria_domain::PackKind, event: &CustomizerEvent) {
    if !event.is_change() {
        return;
    }
    match event {
        CustomizerEvent::QuantityChanged { from, to, dropped } if !dropped.is_empty() => {
            tracing::debug!(
                pack = %kind,
                from,
                to,
                dropped = dropped.len(),
                "Quantity lowered below selection count"
            );
        }
        _ => tracing::debug!(pack = %kind, event = event.event_type(), "{:?}", event),
    }
}

/// Hook to access the customizer state from Dioxus context
pub fn use_customizer_state() -> CustomizerState {
    use_context::<CustomizerState>()
}
