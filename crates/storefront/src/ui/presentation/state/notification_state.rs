//! Notification state - the transient toast
//!
//! One toast at a time; a new notification replaces the current one. Each
//! gets a sequence number so a stale dismiss timer can't clear its
//! successor.

use dioxus::prelude::*;
use jaboneria_domain::DomainError;

use crate::application::ServiceError;

/// How long a toast stays on screen
pub const NOTIFICATION_TIMEOUT_MS: u64 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub seq: u64,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            seq: 0,
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    /// Toast for a rejected widget operation
    pub fn from_domain_error(error: &DomainError) -> Self {
        match error {
            DomainError::SelectionLimitExceeded { .. } => Self::new(
                NotificationKind::Warning,
                "Has alcanzado el máximo de jabones para este pack",
            ),
            DomainError::ValidationFailed { min, max, .. } if min == max => Self::new(
                NotificationKind::Error,
                format!("Selecciona {} jabones", min),
            ),
            DomainError::ValidationFailed { min, max, .. } => Self::new(
                NotificationKind::Error,
                format!("Selecciona entre {} y {} jabones", min, max),
            ),
            other => Self::new(NotificationKind::Error, other.to_string()),
        }
    }

    pub fn from_service_error(error: &ServiceError) -> Self {
        match error.as_domain() {
            Some(domain) => Self::from_domain_error(domain),
            None => Self::new(
                NotificationKind::Error,
                "No pudimos completar la operación. Inténtalo de nuevo.",
            ),
        }
    }
}

#[derive(Clone, Copy)]
pub struct NotificationState {
    pub current: Signal<Option<Notification>>,
    next_seq: Signal<u64>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            next_seq: Signal::new(0),
        }
    }

    pub fn show(&mut self, mut notification: Notification) {
        let seq = *self.next_seq.read() + 1;
        self.next_seq.set(seq);
        notification.seq = seq;
        self.current.set(Some(notification));
    }

    /// Clear the toast if it is still the one numbered `seq`
    pub fn dismiss(&mut self, seq: u64) {
        let is_current = self.current.read().as_ref().is_some_and(|n| n.seq == seq);
        if is_current {
            self.current.set(None);
        }
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the notification state from Dioxus context
pub fn use_notification_state() -> NotificationState {
    use_context::<NotificationState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_a_warning() {
        let n = Notification::from_domain_error(&DomainError::selection_limit(9, 9));
        assert_eq!(n.kind, NotificationKind::Warning);
        assert_eq!(n.message, "Has alcanzado el máximo de jabones para este pack");
    }

    #[test]
    fn validation_names_the_bounds() {
        let n = Notification::from_domain_error(&DomainError::validation_failed(1, 3, 5));
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "Selecciona entre 3 y 5 jabones");

        let exact = Notification::from_domain_error(&DomainError::validation_failed(1, 3, 3));
        assert_eq!(exact.message, "Selecciona 3 jabones");
    }

    #[test]
    fn cart_failures_get_a_generic_message() {
        let n = Notification::from_service_error(&ServiceError::Cart(anyhow::anyhow!("timeout")));
        assert_eq!(n.kind, NotificationKind::Error);
        assert!(!n.message.contains("timeout"));
    }

    #[test]
    fn kinds_map_to_toast_classes() {
        assert_eq!(NotificationKind::Success.css_class(), "success");
        assert_eq!(NotificationKind::Warning.css_class(), "warning");
    }
}
