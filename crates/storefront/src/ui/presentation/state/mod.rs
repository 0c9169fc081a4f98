//! UI state held in Dioxus signals

pub mod customizer_state;
pub mod notification_state;

pub use customizer_state::{use_customizer_state, CustomizerState};
pub use notification_state::{
    use_notification_state, Notification, NotificationKind, NotificationState,
};
