//! Display projection
//!
//! Pure functions from store contents to display rows and from rows to a
//! text table. Nothing here writes to the terminal; printing is the
//! caller's side effect, which keeps the projection testable on its own.

use shared::Producto;

/// One display row per product, in server response order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub nombre: String,
    pub codigo_barra: String,
    pub precio_costo: f64,
    pub precio_venta: f64,
    pub stock: u32,
    /// Shown as stored
    pub margen_bruto: f64,
    /// Formatted to two decimal places, the only formatting rule
    pub margen_neto: String,
}

impl ProductRow {
    fn from_producto(p: &Producto) -> Self {
        Self {
            id: p.id,
            nombre: p.nombre.clone(),
            codigo_barra: p.codigo_barra.clone(),
            precio_costo: p.precio_costo,
            precio_venta: p.precio_venta,
            stock: p.stock,
            margen_bruto: p.margen_bruto,
            margen_neto: format!("{:.2}", p.margen_neto),
        }
    }
}

/// Project the product list into display rows.
///
/// No sorting, filtering or pagination: row order equals the order the
/// server returned.
pub fn rows(productos: &[Producto]) -> Vec<ProductRow> {
    productos.iter().map(ProductRow::from_producto).collect()
}

/// Fold display rows into a fixed-width text table.
pub fn table(rows: &[ProductRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<20} {:<14} {:>10} {:>10} {:>6} {:>10} {:>10}\n",
        "ID", "Nombre", "Codigo", "Costo", "Venta", "Stock", "M.Bruto", "M.Neto"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:>4}  {:<20} {:<14} {:>10} {:>10} {:>6} {:>10} {:>10}\n",
            row.id,
            row.nombre,
            row.codigo_barra,
            row.precio_costo,
            row.precio_venta,
            row.stock,
            row.margen_bruto,
            row.margen_neto,
        ));
    }
    out
}

/// Pretty-print the report JSON verbatim, as the server computed it.
pub fn report_text(reporte: &serde_json::Value) -> String {
    serde_json::to_string_pretty(reporte).unwrap_or_else(|_| reporte.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn producto(id: i64, margen_neto: f64) -> Producto {
        Producto {
            id,
            nombre: format!("Producto {id}"),
            codigo_barra: format!("{id}{id}{id}"),
            precio_costo: 1.5,
            precio_venta: 3.0,
            stock: 4,
            margen_bruto: 1.5,
            margen_neto,
        }
    }

    #[test]
    fn one_row_per_product_in_order() {
        let productos = vec![producto(2, 100.0), producto(1, 100.0)];
        let rows = rows(&productos);

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn net_margin_has_two_decimals() {
        let filas = rows(&[producto(1, 33.333333)]);
        assert_eq!(filas[0].margen_neto, "33.33");

        let filas = rows(&[producto(1, 100.0)]);
        assert_eq!(filas[0].margen_neto, "100.00");
    }

    #[test]
    fn gross_margin_shown_as_stored() {
        let rows = rows(&[producto(1, 100.0)]);
        assert_eq!(rows[0].margen_bruto, 1.5);
    }

    #[test]
    fn table_lists_every_row() {
        let rows = rows(&[producto(1, 100.0), producto(2, 50.0)]);
        let text = table(&rows);

        assert!(text.contains("Producto 1"));
        assert!(text.contains("Producto 2"));
        assert!(text.contains("50.00"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn report_is_passed_through_verbatim() {
        let reporte = serde_json::json!({
            "total_ventas": 120.0,
            "total_ganancias": 45.5,
        });

        let text = report_text(&reporte);
        assert!(text.contains("\"total_ventas\": 120.0"));
    }
}
