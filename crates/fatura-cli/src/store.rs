//! JSON-file-backed invoice store for CLI use.

use std::fs;
use std::path::PathBuf;

use async_trait::async_trait;
use fatura_core::store::{InvoiceStore, Result};
use fatura_core::{Invoice, InvoiceCandidate, InvoiceKey, StoreError};

/// Invoice store persisting to a single JSON file.
///
/// Good enough for manual and batch use; the file is read and rewritten
/// whole on each call, and the uniqueness constraint is checked against the
/// freshly loaded contents.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<Invoice>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| StoreError::Backend(err.to_string()))
    }

    fn persist(&self, invoices: &[Invoice]) -> Result<()> {
        let data = serde_json::to_string_pretty(invoices)
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for JsonFileStore {
    async fn find_by_key(&self, key: &InvoiceKey) -> Result<Option<Invoice>> {
        Ok(self.load()?.into_iter().find(|invoice| &invoice.key() == key))
    }

    async fn save(&self, candidate: InvoiceCandidate) -> Result<Invoice> {
        let mut invoices = self.load()?;
        let key = candidate.key();
        if invoices.iter().any(|invoice| invoice.key() == key) {
            return Err(StoreError::DuplicateKey(key));
        }

        let id = invoices.iter().map(|invoice| invoice.id).max().unwrap_or(0) + 1;
        let invoice = candidate.with_id(id);
        invoices.push(invoice.clone());
        self.persist(&invoices)?;
        Ok(invoice)
    }

    async fn list(&self, client_number: Option<&str>) -> Result<Vec<Invoice>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|invoice| client_number.is_none_or(|c| invoice.client_number == c))
            .collect())
    }
}
