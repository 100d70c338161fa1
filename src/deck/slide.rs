//! Slide and deck types.

use serde::{Deserialize, Serialize};

use super::{Emu, Shape, EMU_PER_INCH};
use crate::model::Metadata;

/// Slide dimensions in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSize {
    /// Slide width
    pub width: Emu,
    /// Slide height
    pub height: Emu,
}

impl SlideSize {
    /// Create a slide size from inches.
    pub fn from_inches(width: f64, height: f64) -> Self {
        Self {
            width: (width * EMU_PER_INCH as f64) as Emu,
            height: (height * EMU_PER_INCH as f64) as Emu,
        }
    }
}

impl Default for SlideSize {
    /// 10in × 7.5in, the engine's default canvas.
    fn default() -> Self {
        Self::from_inches(10.0, 7.5)
    }
}

/// One finished slide: an ordered list of positioned shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Shapes in creation order
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the slide has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get the number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}

/// A complete deck: metadata, slide size and the slides themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Deck metadata, carried over from the source document
    #[serde(default)]
    pub metadata: Metadata,

    /// Slide dimensions
    pub size: SlideSize,

    /// Slides in order
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new(size: SlideSize, metadata: Metadata) -> Self {
        Self {
            metadata,
            size,
            slides: Vec::new(),
        }
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
