//! PDF text rendering using pdf-extract.

use tracing::debug;

use super::{DocumentRenderer, DocumentText, PageText, Result, TextFragment};
use crate::error::RenderError;

/// Default renderer backed by `pdf-extract`.
///
/// Each non-empty line of a page becomes one fragment, with the line index
/// as its vertical coordinate. Encoding issues are the PDF library's
/// concern; the output is always UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextRenderer;

impl PdfTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for PdfTextRenderer {
    fn render(&self, data: &[u8]) -> Result<DocumentText> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|err| RenderError::Malformed(err.to_string()))?;

        if pages.is_empty() {
            return Err(RenderError::NoPages);
        }

        debug!("rendered {} page(s)", pages.len());

        let pages = pages
            .into_iter()
            .map(|page| PageText {
                fragments: page
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .enumerate()
                    .map(|(row, line)| TextFragment::new(line, 0.0, row as f32))
                    .collect(),
            })
            .collect();

        Ok(DocumentText { pages })
    }
}
