//! Sale Model

use serde::{Deserialize, Serialize};

/// Sale request for `POST /ventas`.
///
/// References the product by barcode, not id. Stock arithmetic is owned by
/// the server: it locates the product, checks availability and decrements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NuevaVenta {
    pub codigo_barra: String,
    pub cantidad: u32,
}
