//! Sync controller
//!
//! Every mutation follows the same two-phase protocol: issue the request,
//! then re-fetch the full product list and commit it into the state store.
//! There is no incremental patching and no retry; each operation is one
//! request plus one refresh, and every failure is returned to the caller.

use std::sync::Arc;

use crate::form::{FormMode, ProductForm, SaleForm};
use crate::{ClientConfig, ClientResult, HttpClient, StateStore};
use shared::{Confirmacion, NuevaVenta, Producto, ProductoPayload};

/// Client for the inventory server, holding the HTTP transport and the
/// product state it keeps in sync.
#[derive(Debug, Clone)]
pub struct InventarioClient {
    http: HttpClient,
    store: Arc<StateStore>,
}

impl InventarioClient {
    /// Create a new client from configuration, with an empty store.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            store: Arc::new(StateStore::new()),
        }
    }

    /// The product state this client keeps in sync.
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }

    /// Fetch all products and replace the store with the response.
    pub async fn list(&self) -> ClientResult<Vec<Producto>> {
        tracing::debug!("GET /productos");
        let ticket = self.store.begin_refresh();
        let productos: Vec<Producto> = self.http.get("productos").await?;
        self.store.commit(ticket, productos.clone());
        Ok(productos)
    }

    /// Create a product, then refresh.
    pub async fn create(&self, payload: &ProductoPayload) -> ClientResult<()> {
        tracing::debug!(codigo_barra = %payload.codigo_barra, "POST /productos");
        self.http
            .post::<Confirmacion, _>("productos", payload)
            .await?;
        self.refresh().await
    }

    /// Update a product by id, then refresh.
    pub async fn update(&self, id: i64, payload: &ProductoPayload) -> ClientResult<()> {
        tracing::debug!(id, "PUT /productos/{{id}}");
        self.http
            .put::<Confirmacion, _>(&format!("productos/{id}"), payload)
            .await?;
        self.refresh().await
    }

    /// Delete a product by id, then refresh.
    pub async fn remove(&self, id: i64) -> ClientResult<()> {
        tracing::debug!(id, "DELETE /productos/{{id}}");
        self.http
            .delete::<Confirmacion>(&format!("productos/{id}"))
            .await?;
        self.refresh().await
    }

    /// Record a sale against a product by barcode, then refresh.
    ///
    /// Whether stock suffices is checked by the server; a rejection comes
    /// back as [`crate::ClientError::Validation`] with the server message.
    pub async fn record_sale(&self, venta: &NuevaVenta) -> ClientResult<()> {
        tracing::debug!(codigo_barra = %venta.codigo_barra, cantidad = venta.cantidad, "POST /ventas");
        self.http.post::<Confirmacion, _>("ventas", venta).await?;
        self.refresh().await
    }

    /// Fetch the server-computed report, passed through as-is.
    pub async fn report(&self) -> ClientResult<serde_json::Value> {
        tracing::debug!("GET /reporte");
        self.http.get("reporte").await
    }

    /// Submit the product form: create or update depending on its mode.
    ///
    /// On success the form resets to create mode. On failure mode and
    /// fields are left as entered, for correction.
    pub async fn submit(&self, form: &mut ProductForm) -> ClientResult<()> {
        let payload = form.payload()?;
        match form.mode() {
            FormMode::Create => self.create(&payload).await?,
            FormMode::Edit { id } => self.update(id, &payload).await?,
        }
        form.reset();
        Ok(())
    }

    /// Submit the sale form, resetting it on success.
    pub async fn submit_sale(&self, form: &mut SaleForm) -> ClientResult<()> {
        let venta = form.payload()?;
        self.record_sale(&venta).await?;
        form.reset();
        Ok(())
    }

    /// Re-fetch the full list into the store (second phase of a mutation).
    async fn refresh(&self) -> ClientResult<()> {
        let ticket = self.store.begin_refresh();
        let productos: Vec<Producto> = self.http.get("productos").await?;
        self.store.commit(ticket, productos);
        Ok(())
    }
}
