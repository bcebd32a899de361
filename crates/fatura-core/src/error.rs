//! Error types for the fatura-core library.

use thiserror::Error;

use crate::model::InvoiceKey;

/// Errors from the document renderer boundary.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The supplied bytes could not be rendered into text.
    #[error("failed to render document: {0}")]
    Malformed(String),

    /// The document rendered but contains no pages.
    #[error("document has no pages")]
    NoPages,
}

/// Errors from the persistence collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store's uniqueness constraint rejected the write.
    #[error("invoice already stored for {0}")]
    DuplicateKey(InvoiceKey),

    /// Any other storage failure.
    #[error("storage failure: {0}")]
    Backend(String),

    /// I/O error from a file-backed store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whole-document failures crossing the pipeline boundary.
///
/// Field-level misses never show up here; they are resolved inside the
/// extractor as absent fields.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The input could not be rendered into text at all.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An invoice with the same identifying triple already exists.
    #[error("duplicate invoice for {0}")]
    Duplicate(InvoiceKey),

    /// The persistence collaborator failed for another reason.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ProcessError {
    /// A constraint violation surfaced on write reports the same condition
    /// as the pre-write duplicate check.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(key) => ProcessError::Duplicate(key),
            other => ProcessError::Store(other),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ProcessError>;
