//! Presentation sink trait and the in-memory implementation.

use crate::error::{Error, Result};
use crate::model::Metadata;

use super::{Deck, Slide, SlideSize};

/// Receiver for finished slides.
///
/// The engine calls `begin` once, `slide` once per finished slide in deck
/// order, and `finish` once at the end of a conversion. Implementors own
/// the actual output: [`MemorySink`] collects a [`Deck`] value; a container
/// packager would stream each slide into its format instead.
pub trait DeckSink {
    /// Called once before the first slide.
    fn begin(&mut self, size: SlideSize, metadata: &Metadata) -> Result<()>;

    /// Called once per finished slide, in order.
    fn slide(&mut self, slide: Slide) -> Result<()>;

    /// Called once after the last slide.
    fn finish(&mut self) -> Result<()>;
}

/// A sink that collects slides into an in-memory [`Deck`].
#[derive(Debug, Default)]
pub struct MemorySink {
    deck: Option<Deck>,
    finished: bool,
}

impl MemorySink {
    /// Create a new memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the sink and return the collected deck.
    ///
    /// Returns an error if the conversion never ran to completion.
    pub fn into_deck(self) -> Result<Deck> {
        if !self.finished {
            return Err(Error::Sink("conversion did not finish".into()));
        }
        self.deck
            .ok_or_else(|| Error::Sink("conversion did not begin".into()))
    }
}

impl DeckSink for MemorySink {
    fn begin(&mut self, size: SlideSize, metadata: &Metadata) -> Result<()> {
        self.deck = Some(Deck::new(size, metadata.clone()));
        self.finished = false;
        Ok(())
    }

    fn slide(&mut self, slide: Slide) -> Result<()> {
        match self.deck.as_mut() {
            Some(deck) => {
                deck.slides.push(slide);
                Ok(())
            }
            None => Err(Error::Sink("slide emitted before begin".into())),
        }
    }

    fn finish(&mut self) -> Result<()> {
        if self.deck.is_none() {
            return Err(Error::Sink("finish before begin".into()));
        }
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_collects_slides() {
        let mut sink = MemorySink::new();
        sink.begin(SlideSize::default(), &Metadata::default())
            .unwrap();
        sink.slide(Slide::new()).unwrap();
        sink.slide(Slide::new()).unwrap();
        sink.finish().unwrap();

        let deck = sink.into_deck().unwrap();
        assert_eq!(deck.slide_count(), 2);
    }

    #[test]
    fn test_memory_sink_unfinished() {
        let mut sink = MemorySink::new();
        sink.begin(SlideSize::default(), &Metadata::default())
            .unwrap();
        assert!(sink.into_deck().is_err());
    }

    #[test]
    fn test_memory_sink_slide_before_begin() {
        let mut sink = MemorySink::new();
        assert!(sink.slide(Slide::new()).is_err());
    }
}
