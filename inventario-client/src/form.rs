//! Product and sale entry forms
//!
//! The form holds raw text fields exactly as the user typed them and a
//! tagged mode instead of the classic "id field empty means create"
//! inference. Coercion into a wire payload happens once, at submit time,
//! and parse failures are explicit errors rather than NaN payloads.

use thiserror::Error;

use crate::store::StateStore;
use shared::{NuevaVenta, ProductoPayload};

/// Form error type
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    /// A numeric field could not be parsed
    #[error("Invalid number in field '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// Load-for-edit referenced an id missing from the current state
    #[error("Unknown product id: {0}")]
    UnknownProduct(i64),
}

/// Which branch a submit executes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: i64,
    },
}

/// Product entry form
///
/// Field values are kept as strings; see [`ProductForm::payload`] for the
/// coercion policy. Mode transitions:
///
/// ```text
/// Create --load_for_edit(id found)--> Edit
/// Create --submit ok--> Create (reset)
/// Edit   --submit ok--> Create (reset)
/// Edit   --load_for_edit--> Edit (different product)
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub nombre: String,
    pub codigo_barra: String,
    pub precio_costo: String,
    pub precio_venta: String,
    pub stock: String,
    mode: FormMode,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Populate every field from the product with the given id and enter
    /// edit mode.
    ///
    /// If the id is stale the form is left untouched, in whatever mode it
    /// was.
    pub fn load_for_edit(&mut self, store: &StateStore, id: i64) -> Result<(), FormError> {
        let producto = store.find_by_id(id).ok_or(FormError::UnknownProduct(id))?;

        self.nombre = producto.nombre;
        self.codigo_barra = producto.codigo_barra;
        self.precio_costo = producto.precio_costo.to_string();
        self.precio_venta = producto.precio_venta.to_string();
        self.stock = producto.stock.to_string();
        self.mode = FormMode::Edit { id };
        Ok(())
    }

    /// Coerce the fields into a request payload.
    ///
    /// Prices parse as floating-point, stock as an unsigned integer. Text
    /// fields are passed through as typed; the server owns any further
    /// validation.
    pub fn payload(&self) -> Result<ProductoPayload, FormError> {
        Ok(ProductoPayload {
            nombre: self.nombre.trim().to_string(),
            codigo_barra: self.codigo_barra.trim().to_string(),
            precio_costo: parse_f64("precio_costo", &self.precio_costo)?,
            precio_venta: parse_f64("precio_venta", &self.precio_venta)?,
            stock: parse_u32("stock", &self.stock)?,
        })
    }

    /// Clear all fields and return to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sale entry form, coerced the same way as the product form.
#[derive(Debug, Clone, Default)]
pub struct SaleForm {
    pub codigo_barra: String,
    pub cantidad: String,
}

impl SaleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerce the fields into a sale request.
    ///
    /// Whether stock suffices is not checked here; that check is
    /// server-owned and surfaces as a validation error on submit.
    pub fn payload(&self) -> Result<NuevaVenta, FormError> {
        Ok(NuevaVenta {
            codigo_barra: self.codigo_barra.trim().to_string(),
            cantidad: parse_u32("cantidad", &self.cantidad)?,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn parse_f64(field: &'static str, value: &str) -> Result<f64, FormError> {
    value.trim().parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_u32(field: &'static str, value: &str) -> Result<u32, FormError> {
    value.trim().parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Producto;

    fn store_with(productos: Vec<Producto>) -> StateStore {
        let store = StateStore::new();
        store.replace(productos);
        store
    }

    fn pan() -> Producto {
        Producto {
            id: 7,
            nombre: "Pan".to_string(),
            codigo_barra: "123".to_string(),
            precio_costo: 1.0,
            precio_venta: 2.5,
            stock: 10,
            margen_bruto: 1.5,
            margen_neto: 150.0,
        }
    }

    #[test]
    fn starts_in_create_mode() {
        assert_eq!(ProductForm::new().mode(), FormMode::Create);
    }

    #[test]
    fn load_for_edit_populates_and_switches_mode() {
        let store = store_with(vec![pan()]);
        let mut form = ProductForm::new();

        form.load_for_edit(&store, 7).unwrap();

        assert_eq!(form.mode(), FormMode::Edit { id: 7 });
        assert_eq!(form.nombre, "Pan");
        assert_eq!(form.codigo_barra, "123");
        assert_eq!(form.precio_venta, "2.5");
        assert_eq!(form.stock, "10");
    }

    #[test]
    fn load_for_edit_with_stale_id_leaves_form_untouched() {
        let store = store_with(vec![pan()]);
        let mut form = ProductForm::new();
        form.nombre = "Queso".to_string();

        let err = form.load_for_edit(&store, 99).unwrap_err();

        assert_eq!(err, FormError::UnknownProduct(99));
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.nombre, "Queso");
    }

    #[test]
    fn load_for_edit_can_switch_between_products() {
        let mut otro = pan();
        otro.id = 8;
        otro.nombre = "Leche".to_string();
        let store = store_with(vec![pan(), otro]);

        let mut form = ProductForm::new();
        form.load_for_edit(&store, 7).unwrap();
        form.load_for_edit(&store, 8).unwrap();

        assert_eq!(form.mode(), FormMode::Edit { id: 8 });
        assert_eq!(form.nombre, "Leche");
    }

    #[test]
    fn payload_coerces_numeric_fields() {
        let form = ProductForm {
            nombre: " Pan ".to_string(),
            codigo_barra: "123".to_string(),
            precio_costo: "1.0".to_string(),
            precio_venta: "2.5".to_string(),
            stock: "10".to_string(),
            ..Default::default()
        };

        let payload = form.payload().unwrap();
        assert_eq!(payload.nombre, "Pan");
        assert_eq!(payload.precio_venta, 2.5);
        assert_eq!(payload.stock, 10);
    }

    #[test]
    fn payload_rejects_non_numeric_input() {
        let form = ProductForm {
            precio_costo: "gratis".to_string(),
            ..Default::default()
        };

        assert_eq!(
            form.payload().unwrap_err(),
            FormError::InvalidNumber {
                field: "precio_costo",
                value: "gratis".to_string()
            }
        );
    }

    #[test]
    fn payload_rejects_negative_stock() {
        let form = ProductForm {
            precio_costo: "1".to_string(),
            precio_venta: "2".to_string(),
            stock: "-3".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            form.payload(),
            Err(FormError::InvalidNumber { field: "stock", .. })
        ));
    }

    #[test]
    fn reset_returns_to_create_mode() {
        let store = store_with(vec![pan()]);
        let mut form = ProductForm::new();
        form.load_for_edit(&store, 7).unwrap();

        form.reset();

        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.nombre.is_empty());
        assert!(form.stock.is_empty());
    }

    #[test]
    fn sale_form_coerces_quantity() {
        let form = SaleForm {
            codigo_barra: "123".to_string(),
            cantidad: "3".to_string(),
        };

        let venta = form.payload().unwrap();
        assert_eq!(venta.codigo_barra, "123");
        assert_eq!(venta.cantidad, 3);
    }

    #[test]
    fn sale_form_rejects_non_numeric_quantity() {
        let form = SaleForm {
            codigo_barra: "123".to_string(),
            cantidad: "tres".to_string(),
        };

        assert!(matches!(
            form.payload(),
            Err(FormError::InvalidNumber {
                field: "cantidad",
                ..
            })
        ));
    }
}
