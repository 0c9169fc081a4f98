//! Composition-time state shared with the UI through Dioxus context

pub mod platform;

pub use platform::Platform;
