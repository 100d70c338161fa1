//! Deck output model and presentation sink.
//!
//! The layout engine produces a deck of slides, each a flat list of
//! positioned shapes. A [`DeckSink`] receives every finished slide once;
//! container packaging (PPTX and friends) is the sink implementor's
//! concern, not the engine's.

mod shape;
mod sink;
mod slide;

pub use shape::{
    Anchor, Emu, Insets, Paragraph, ParagraphContent, ParagraphProps, Rect, Run, Shape, ShapeKind,
    TableGrid, TableGridCell, TableGridRow, TextBody, EMU_PER_INCH,
};
pub use sink::{DeckSink, MemorySink};
pub use slide::{Deck, Slide, SlideSize};
