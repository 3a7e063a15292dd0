//! Inventario Client - HTTP client for the inventory/POS server
//!
//! Keeps an in-memory product list consistent with the remote store across
//! create/update/delete/sale operations: every mutation re-fetches the full
//! list, so the local state always reflects the server's last-known view.

pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod render;
pub mod store;
pub mod sync;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{FormError, FormMode, ProductForm, SaleForm};
pub use http::HttpClient;
pub use render::ProductRow;
pub use store::{RefreshTicket, StateStore};
pub use sync::InventarioClient;

// Re-export shared types for convenience
pub use shared::{Confirmacion, NuevaVenta, Producto, ProductoPayload};
