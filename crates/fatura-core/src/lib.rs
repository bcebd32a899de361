//! Core library for Brazilian electricity-bill processing.
//!
//! This crate provides:
//! - PDF text rendering and fragment linearization
//! - Locale-aware numeric parsing (decimal comma, thousands dot)
//! - Rule-based field extraction for the distributor's bill template
//! - Derived consumption metrics and invoice assembly with duplicate detection

pub mod error;
pub mod extract;
pub mod metrics;
pub mod model;
pub mod pdf;
pub mod service;
pub mod store;

pub use error::{ProcessError, RenderError, Result, StoreError};
pub use extract::{parse_locale_number, parse_text};
pub use metrics::derive_metrics;
pub use model::{DerivedMetrics, Invoice, InvoiceCandidate, InvoiceKey, LineItem, RawExtraction};
pub use pdf::{DocumentRenderer, DocumentText, PageText, PdfTextRenderer, TextFragment};
pub use service::{parse_invoice, InvoiceProcessor};
pub use store::{InvoiceStore, MemoryStore};
