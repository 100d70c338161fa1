//! # markdeck
//!
//! Layout and pagination engine that turns a structured document tree
//! (headings, paragraphs, lists, quotes, code blocks, tables, images)
//! into a paginated slide deck of positioned shapes, with no
//! user-specified coordinates anywhere.
//!
//! ## Quick Start
//!
//! ```
//! use markdeck::{to_deck, Block, ConvertOptions, Document, Inline};
//!
//! fn main() -> markdeck::Result<()> {
//!     let mut doc = Document::new();
//!     doc.push(Block::heading(1, vec![Inline::text("Title")]));
//!     doc.push(Block::paragraph(vec![
//!         Inline::text("Hello "),
//!         Inline::bold(vec![Inline::text("world")]),
//!     ]));
//!
//!     let deck = to_deck(&doc, &ConvertOptions::default())?;
//!     assert_eq!(deck.slide_count(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Automatic pagination**: headings start slides, overflowing content
//!   continues onto "(cont.)" slides
//! - **Standalone shapes**: code blocks, tables and images reflow the
//!   content region around them
//! - **Syntax highlighting**: pluggable tokenizers for shell, TypeSpec,
//!   HTTP and JSON code blocks
//! - **Image probing**: pixel dimensions read straight from PNG/JPEG/GIF/
//!   BMP headers, no image decoding
//! - **Sink interface**: container packaging stays behind the
//!   [`DeckSink`] trait; [`MemorySink`] collects a plain value

pub mod deck;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod model;
pub mod probe;
pub mod render;
pub mod source;
pub mod style;

// Re-export commonly used types
pub use deck::{Deck, DeckSink, MemorySink, Shape, ShapeKind, Slide, SlideSize};
pub use error::{Error, Result};
pub use model::{Block, Document, Inline, ListItem, Metadata, TableCell, TableRow};
pub use render::{convert, convert_with_source, to_deck, ConvertOptions};
pub use source::{FileAndHttpSource, ImageSource, ResolvedImage};
pub use style::{StyleConfig, SyntaxPalette};

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use markdeck::{Document, Markdeck};
///
/// let doc: Document = serde_json::from_str("{\"blocks\": []}").unwrap();
/// let deck = Markdeck::new()
///     .with_base_path("./assets")
///     .without_syntax_highlighting()
///     .to_deck(&doc)?;
/// # Ok::<(), markdeck::Error>(())
/// ```
pub struct Markdeck {
    options: ConvertOptions,
}

impl Markdeck {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the style configuration.
    pub fn with_styles(mut self, styles: StyleConfig) -> Self {
        self.options = self.options.with_styles(styles);
        self
    }

    /// Set the base directory for relative image paths.
    pub fn with_base_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_base_path(path);
        self
    }

    /// Disable syntax highlighting for code blocks.
    pub fn without_syntax_highlighting(mut self) -> Self {
        self.options = self.options.with_syntax_highlighting(false);
        self
    }

    /// Set the slide dimensions in inches.
    pub fn with_slide_size(mut self, width: f64, height: f64) -> Self {
        self.options = self.options.with_slide_size(width, height);
        self
    }

    /// Access the assembled options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert a document through a sink.
    pub fn convert<S: DeckSink>(&self, doc: &Document, sink: &mut S) -> Result<()> {
        convert(doc, sink, &self.options)
    }

    /// Convert a document into an in-memory deck.
    pub fn to_deck(&self, doc: &Document) -> Result<Deck> {
        to_deck(doc, &self.options)
    }
}

impl Default for Markdeck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_options() {
        let builder = Markdeck::new()
            .without_syntax_highlighting()
            .with_slide_size(12.0, 9.0);
        assert!(!builder.options().syntax_highlighting);
        assert_eq!(builder.options().slide_width, 12.0);
    }

    #[test]
    fn test_empty_document_rejected() {
        let doc = Document::new();
        let result = Markdeck::new().to_deck(&doc);
        assert!(matches!(result, Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_quick_start_example() {
        let mut doc = Document::new();
        doc.push(Block::heading(1, vec![Inline::text("Title")]));
        doc.push(Block::paragraph(vec![
            Inline::text("Hello "),
            Inline::bold(vec![Inline::text("world")]),
        ]));

        let deck = to_deck(&doc, &ConvertOptions::default()).unwrap();
        assert_eq!(deck.slide_count(), 1);
    }
}
