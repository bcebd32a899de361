//! Persistence collaborator boundary.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::{Invoice, InvoiceCandidate, InvoiceKey};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage collaborator for assembled invoices.
///
/// Implementations own the uniqueness guarantee on the identifying triple:
/// `save` must reject a candidate whose key is already held, via
/// [`StoreError::DuplicateKey`]. The pipeline's own pre-write lookup is
/// advisory only.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Look up an invoice by its identifying triple.
    async fn find_by_key(&self, key: &InvoiceKey) -> Result<Option<Invoice>>;

    /// Persist a candidate, assigning its id.
    async fn save(&self, candidate: InvoiceCandidate) -> Result<Invoice>;

    /// List stored invoices, optionally filtered by client number.
    async fn list(&self, client_number: Option<&str>) -> Result<Vec<Invoice>>;
}

/// In-memory store with sequential ids. Used in tests and as a reference
/// implementation of the uniqueness constraint.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    next_id: u64,
    invoices: HashMap<InvoiceKey, Invoice>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryInner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("poisoned lock".to_string()))
    }
}

#[async_trait]
impl InvoiceStore for MemoryStore {
    async fn find_by_key(&self, key: &InvoiceKey) -> Result<Option<Invoice>> {
        Ok(self.lock()?.invoices.get(key).cloned())
    }

    async fn save(&self, candidate: InvoiceCandidate) -> Result<Invoice> {
        let mut inner = self.lock()?;
        let key = candidate.key();
        if inner.invoices.contains_key(&key) {
            return Err(StoreError::DuplicateKey(key));
        }

        inner.next_id += 1;
        let invoice = candidate.with_id(inner.next_id);
        inner.invoices.insert(key, invoice.clone());
        Ok(invoice)
    }

    async fn list(&self, client_number: Option<&str>) -> Result<Vec<Invoice>> {
        let inner = self.lock()?;
        let mut invoices: Vec<Invoice> = inner
            .invoices
            .values()
            .filter(|invoice| client_number.is_none_or(|c| invoice.client_number == c))
            .cloned()
            .collect();
        invoices.sort_by_key(|invoice| invoice.id);
        Ok(invoices)
    }
}
