//! Presentation layer - Dioxus state, components, and views

pub mod components;
pub mod services;
pub mod state;
pub mod views;

pub use services::{use_services, Services};
