//! Application services

pub mod customization_service;

pub use customization_service::CustomizationService;
