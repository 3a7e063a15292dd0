//! Client-related types shared between server and client
//!
//! Common response types used in API communication.

use serde::{Deserialize, Serialize};

/// Mutation confirmation body, e.g. `{"message": "Producto agregado"}`.
///
/// Returned by create/update/delete and sale endpoints. The client
/// deserializes it for completeness but acts only on the status code; the
/// refreshed product list is the real signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Confirmacion {
    pub message: String,
}
