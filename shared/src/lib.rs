//! Shared types for the inventario client
//!
//! Wire types used in API communication with the inventory server.
//! Field names match the server's JSON contract verbatim, so they stay
//! in Spanish.

pub mod client;
pub mod models;

// Re-exports
pub use client::Confirmacion;
pub use models::{NuevaVenta, Producto, ProductoPayload};
pub use serde::{Deserialize, Serialize};
