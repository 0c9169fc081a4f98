//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the platform and the cart
//! without depending on concrete implementations.

pub mod cart_port;
pub mod platform;
pub mod platform_port;

pub use cart_port::{CartPort, CartReceipt};
#[cfg(any(test, feature = "testing"))]
pub use cart_port::MockCartPort;
pub use platform::{storage_keys, DocumentProvider, SleepProvider, StorageProvider};
pub use platform_port::PlatformPort;
