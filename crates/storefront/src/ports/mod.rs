//! Ports - interfaces the storefront depends on but does not implement

pub mod outbound;
