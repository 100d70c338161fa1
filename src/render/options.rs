//! Conversion options.

use std::path::PathBuf;

use crate::deck::SlideSize;
use crate::style::StyleConfig;

/// Options controlling a document-to-deck conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Style configuration
    pub styles: StyleConfig,

    /// Enable syntax highlighting for fenced code blocks
    pub syntax_highlighting: bool,

    /// Base directory for resolving relative image paths
    pub base_path: Option<PathBuf>,

    /// Slide width in inches
    pub slide_width: f64,

    /// Slide height in inches
    pub slide_height: f64,
}

impl ConvertOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style configuration.
    pub fn with_styles(mut self, styles: StyleConfig) -> Self {
        self.styles = styles;
        self
    }

    /// Enable or disable syntax highlighting.
    pub fn with_syntax_highlighting(mut self, enable: bool) -> Self {
        self.syntax_highlighting = enable;
        self
    }

    /// Set the base directory for relative image paths.
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    /// Set the slide dimensions in inches.
    pub fn with_slide_size(mut self, width: f64, height: f64) -> Self {
        self.slide_width = width;
        self.slide_height = height;
        self
    }

    /// Slide dimensions in EMUs.
    pub fn slide_size(&self) -> SlideSize {
        SlideSize::from_inches(self.slide_width, self.slide_height)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            styles: StyleConfig::default(),
            syntax_highlighting: true,
            base_path: None,
            slide_width: 10.0,
            slide_height: 7.5,
        }
    }
}
