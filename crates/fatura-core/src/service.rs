//! Invoice assembly pipeline: render, extract, derive, persist.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ProcessError, RenderError, Result};
use crate::extract::parse_text;
use crate::metrics::derive_metrics;
use crate::model::{Invoice, InvoiceCandidate, RawExtraction};
use crate::pdf::{DocumentRenderer, PdfTextRenderer};
use crate::store::InvoiceStore;

/// Parse a bill document into its raw extracted fields using the default
/// PDF renderer. Never touches storage.
pub fn parse_invoice(data: &[u8]) -> std::result::Result<RawExtraction, RenderError> {
    let text = PdfTextRenderer::new().render(data)?.linearize();
    Ok(parse_text(&text))
}

/// Map extracted fields and derived metrics into the canonical invoice
/// columns. Absent identifiers become empty strings, absent numbers zero.
pub fn assemble(raw: &RawExtraction) -> InvoiceCandidate {
    let metrics = derive_metrics(raw);
    InvoiceCandidate {
        client_number: raw.client_number.clone().unwrap_or_default(),
        installation_number: raw.installation_number.clone().unwrap_or_default(),
        reference_month: raw.reference_month.clone().unwrap_or_default(),
        electricity_consumption: raw.electric_energy.as_ref().map_or(0.0, |i| i.quantity),
        electricity_value: raw.electric_energy.as_ref().map_or(0.0, |i| i.value),
        scee_consumption: raw.scee_energy.as_ref().map_or(0.0, |i| i.quantity),
        scee_value: raw.scee_energy.as_ref().map_or(0.0, |i| i.value),
        compensated_energy_consumption: raw
            .compensated_energy
            .as_ref()
            .map_or(0.0, |i| i.quantity),
        compensated_energy_value: raw.compensated_energy.as_ref().map_or(0.0, |i| i.value),
        public_lighting_contribution: raw.public_lighting_contribution.unwrap_or(0.0),
        total_energy_consumption: metrics.energy_consumption,
        total_value_without_gd: metrics.total_value_without_gd,
        gd_savings: metrics.gd_savings,
        total_amount: metrics.total_amount(),
    }
}

/// End-to-end processor for one uploaded bill.
///
/// Holds the renderer and the storage collaborator; every call is otherwise
/// stack-local, so concurrent documents may be processed in parallel.
pub struct InvoiceProcessor {
    renderer: Box<dyn DocumentRenderer + Send + Sync>,
    store: Arc<dyn InvoiceStore>,
}

impl InvoiceProcessor {
    /// Create a processor with the default PDF renderer.
    pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
        Self {
            renderer: Box::new(PdfTextRenderer::new()),
            store,
        }
    }

    /// Replace the document renderer.
    pub fn with_renderer(
        mut self,
        renderer: impl DocumentRenderer + Send + Sync + 'static,
    ) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Run the full pipeline for one document: render, extract, derive,
    /// duplicate-check, persist.
    ///
    /// The pre-write lookup is a fast-path courtesy; the store's own
    /// constraint is the uniqueness guarantee, and a constraint violation on
    /// write surfaces as the same [`ProcessError::Duplicate`].
    pub async fn process(&self, data: &[u8]) -> Result<Invoice> {
        let text = self.renderer.render(data)?.linearize();
        let raw = parse_text(&text);
        let candidate = assemble(&raw);
        let key = candidate.key();

        debug!(%key, "assembled invoice candidate");

        if self.store.find_by_key(&key).await?.is_some() {
            return Err(ProcessError::Duplicate(key));
        }

        let invoice = self.store.save(candidate).await?;
        info!(id = invoice.id, month = %invoice.reference_month, "invoice stored");
        Ok(invoice)
    }
}
