//! Data models
//!
//! Shared between the client and any server implementing the inventory
//! contract. Product ids are `i64` (server-assigned, INTEGER PRIMARY KEY).

pub mod producto;
pub mod venta;

// Re-exports
pub use producto::*;
pub use venta::*;
