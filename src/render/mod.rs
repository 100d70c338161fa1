//! Rendering: document tree in, deck of slides out.

mod blocks;
mod engine;
mod inlines;
mod options;

pub use options::ConvertOptions;

use crate::deck::{Deck, DeckSink, MemorySink};
use crate::error::Result;
use crate::model::Document;
use crate::source::{FileAndHttpSource, ImageSource};

use engine::DeckRenderer;

/// Convert a document into slides, emitting them through `sink`.
pub fn convert<S: DeckSink>(doc: &Document, sink: &mut S, options: &ConvertOptions) -> Result<()> {
    let source = FileAndHttpSource::new(options.base_path.clone());
    convert_with_source(doc, sink, options, &source)
}

/// Convert with a caller-supplied image source.
pub fn convert_with_source<S: DeckSink>(
    doc: &Document,
    sink: &mut S,
    options: &ConvertOptions,
    source: &dyn ImageSource,
) -> Result<()> {
    DeckRenderer::new(sink, options, source).render_document(doc)
}

/// Convert a document and collect the result as an in-memory [`Deck`].
pub fn to_deck(doc: &Document, options: &ConvertOptions) -> Result<Deck> {
    let mut sink = MemorySink::new();
    convert(doc, &mut sink, options)?;
    sink.into_deck()
}
