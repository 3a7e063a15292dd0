//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity as served by `GET /productos`.
///
/// `margen_bruto` and `margen_neto` are computed server-side on every
/// response; the client treats them as display data and never recomputes
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: i64,
    pub nombre: String,
    /// Unique business key used to reference the product in sales
    pub codigo_barra: String,
    pub precio_costo: f64,
    pub precio_venta: f64,
    pub stock: u32,
    pub margen_bruto: f64,
    /// Gross margin as a percentage of cost
    pub margen_neto: f64,
}

/// Create/update product payload
///
/// `POST /productos` and `PUT /productos/{id}` take the same body: the
/// product without its server-assigned id and without the computed margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductoPayload {
    pub nombre: String,
    pub codigo_barra: String,
    pub precio_costo: f64,
    pub precio_venta: f64,
    pub stock: u32,
}
