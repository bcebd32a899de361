//! Document rendering and fragment linearization.

mod renderer;

pub use renderer::PdfTextRenderer;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// One positioned text fragment as supplied by the renderer.
///
/// Coordinates carry the renderer's layout context; linearization relies on
/// fragment order alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Fragments of a single page, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageText {
    pub fragments: Vec<TextFragment>,
}

/// A rendered document: ordered pages of ordered fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentText {
    pub pages: Vec<PageText>,
}

impl DocumentText {
    /// Flatten the document into one searchable string: fragments joined
    /// with a single space, pages joined with a line break.
    ///
    /// Reading order is preserved exactly as supplied; no reordering and no
    /// deduplication. A page with no fragments contributes an empty line.
    pub fn linearize(&self) -> String {
        self.pages
            .iter()
            .map(|page| {
                page.fragments
                    .iter()
                    .map(|fragment| fragment.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Trait for renderers that turn raw document bytes into positioned text.
pub trait DocumentRenderer {
    /// Render the document, or fail when the bytes cannot be interpreted.
    fn render(&self, data: &[u8]) -> Result<DocumentText>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(fragments: &[&str]) -> PageText {
        PageText {
            fragments: fragments
                .iter()
                .enumerate()
                .map(|(i, text)| TextFragment::new(*text, 0.0, i as f32))
                .collect(),
        }
    }

    #[test]
    fn test_linearize_joins_fragments_with_spaces() {
        let doc = DocumentText {
            pages: vec![page(&["Nº DO CLIENTE", "Nº DA INSTALAÇÃO", "7202210726", "3001422762"])],
        };
        assert_eq!(
            doc.linearize(),
            "Nº DO CLIENTE Nº DA INSTALAÇÃO 7202210726 3001422762"
        );
    }

    #[test]
    fn test_linearize_joins_pages_with_line_breaks() {
        let doc = DocumentText {
            pages: vec![page(&["first"]), page(&["second", "page"])],
        };
        assert_eq!(doc.linearize(), "first\nsecond page");
    }

    #[test]
    fn test_empty_page_contributes_empty_line() {
        let doc = DocumentText {
            pages: vec![page(&["first"]), PageText::default(), page(&["third"])],
        };
        assert_eq!(doc.linearize(), "first\n\nthird");
    }

    #[test]
    fn test_repeated_fragments_are_kept() {
        let doc = DocumentText {
            pages: vec![page(&["kWh", "kWh"])],
        };
        assert_eq!(doc.linearize(), "kWh kWh");
    }
}
