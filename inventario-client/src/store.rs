//! In-memory product state
//!
//! Holds the last-fetched product list. The store is never patched in
//! place: every successful refresh replaces the whole sequence, so it
//! always reflects the server's last-known view rather than a local guess.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use shared::Producto;

/// Ticket identifying one refresh attempt.
///
/// Tickets are issued before the network round-trip and compared on commit,
/// so an older list response that resolves after a newer one is discarded
/// instead of clobbering fresher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

#[derive(Debug, Default)]
struct Inner {
    productos: Vec<Producto>,
    /// Ticket of the list currently applied
    applied: u64,
}

/// Owned product state, shared between the sync client and any front-end.
#[derive(Debug, Default)]
pub struct StateStore {
    inner: RwLock<Inner>,
    seq: AtomicU64,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally overwrite the current state.
    ///
    /// Counts as the newest view: any refresh ticketed before this call
    /// will be discarded when it commits.
    pub fn replace(&self, productos: Vec<Producto>) {
        // Bump the sequence under the write lock so overlapping replaces
        // cannot leave `applied` pointing at an older value.
        let mut inner = self.inner.write().expect("state store lock poisoned");
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        inner.productos = productos;
        inner.applied = seq;
    }

    /// Start a refresh, reserving its position in the sequence.
    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket(self.seq.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Apply a fetched list for the given ticket.
    ///
    /// Returns `false` (leaving the state untouched) when a newer list has
    /// already been applied.
    pub fn commit(&self, ticket: RefreshTicket, productos: Vec<Producto>) -> bool {
        let mut inner = self.inner.write().expect("state store lock poisoned");
        if ticket.0 < inner.applied {
            tracing::warn!(
                ticket = ticket.0,
                applied = inner.applied,
                "Discarding stale product list"
            );
            return false;
        }
        inner.productos = productos;
        inner.applied = ticket.0;
        true
    }

    /// Linear lookup by server-assigned id.
    ///
    /// Returns `None` for stale ids (e.g. the product was deleted by
    /// another session since the last refresh); callers must guard before
    /// reading fields.
    pub fn find_by_id(&self, id: i64) -> Option<Producto> {
        let inner = self.inner.read().expect("state store lock poisoned");
        inner.productos.iter().find(|p| p.id == id).cloned()
    }

    /// Clone of the current list, in server response order.
    pub fn snapshot(&self) -> Vec<Producto> {
        let inner = self.inner.read().expect("state store lock poisoned");
        inner.productos.clone()
    }

    pub fn len(&self) -> usize {
        let inner = self.inner.read().expect("state store lock poisoned");
        inner.productos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
