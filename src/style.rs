//! Style configuration for deck output.
//!
//! All colors are hex format without a `#` prefix (e.g., `"2E74B5"`).
//! The configuration is read-only during a conversion.

use serde::{Deserialize, Serialize};

use crate::highlight::TokenKind;

/// Fonts, sizes and theme colors used by the layout engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Font name for body text
    pub body_font: String,

    /// Font size for body text, in points
    pub body_font_size: u16,

    /// Font size for slide titles (H1), in points
    pub title_font_size: u16,

    /// Font size for subtitles (H2), in points
    pub subtitle_font_size: u16,

    /// Font sizes for H3-H6, in points
    pub heading_font_sizes: [u16; 4],

    /// Title text color
    pub title_color: String,

    /// Body text color
    pub body_color: String,

    /// Hyperlink color
    pub link_color: String,

    /// Font name for code blocks and inline code
    pub code_font: String,

    /// Font size for code, in points
    pub code_font_size: u16,

    /// Background color for code block shapes
    pub code_background: String,

    /// Table header row fill color
    pub table_header_fill: String,

    /// Table header text color
    pub table_header_text: String,

    /// Fill color for striped body rows
    pub table_stripe_fill: String,

    /// Table and rule border color
    pub border_color: String,

    /// Colors for syntax highlighting
    pub syntax: SyntaxPalette,
}

impl StyleConfig {
    /// Create a style configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body font name.
    pub fn with_body_font(mut self, font: impl Into<String>) -> Self {
        self.body_font = font.into();
        self
    }

    /// Set the code font name.
    pub fn with_code_font(mut self, font: impl Into<String>) -> Self {
        self.code_font = font.into();
        self
    }

    /// Set the title color.
    pub fn with_title_color(mut self, color: impl Into<String>) -> Self {
        self.title_color = color.into();
        self
    }

    /// Get the font size in points for a heading level.
    pub fn heading_font_size(&self, level: u8) -> u16 {
        match level {
            1 => self.title_font_size,
            2 => self.subtitle_font_size,
            3..=6 => self.heading_font_sizes[(level - 3) as usize],
            _ => self.body_font_size,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            body_font: "Calibri".into(),
            body_font_size: 18,
            title_font_size: 36,
            subtitle_font_size: 28,
            heading_font_sizes: [24, 22, 20, 18],
            title_color: "2E74B5".into(),
            body_color: "333333".into(),
            link_color: "0563C1".into(),
            code_font: "Consolas".into(),
            code_font_size: 14,
            code_background: "F5F5F5".into(),
            table_header_fill: "2E74B5".into(),
            table_header_text: "FFFFFF".into(),
            table_stripe_fill: "F2F2F2".into(),
            border_color: "CCCCCC".into(),
            syntax: SyntaxPalette::default(),
        }
    }
}

/// Color scheme for syntax highlighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntaxPalette {
    pub keyword: String,
    pub string: String,
    pub number: String,
    pub comment: String,
    pub operator: String,
    pub type_name: String,
    pub function: String,
    pub property: String,
    pub identifier: String,
    pub default: String,
}

impl SyntaxPalette {
    /// Get the color for a token classification.
    pub fn color_for(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Keyword => &self.keyword,
            TokenKind::String => &self.string,
            TokenKind::Number => &self.number,
            TokenKind::Comment => &self.comment,
            TokenKind::Operator => &self.operator,
            TokenKind::Type => &self.type_name,
            TokenKind::Function => &self.function,
            TokenKind::Property => &self.property,
            TokenKind::Identifier => &self.identifier,
            TokenKind::Default => &self.default,
        }
    }
}

impl Default for SyntaxPalette {
    fn default() -> Self {
        Self {
            keyword: "569CD6".into(),
            string: "CE9178".into(),
            number: "098658".into(),
            comment: "6A9955".into(),
            operator: "4A4A4A".into(),
            type_name: "4EC9B0".into(),
            function: "C4A000".into(),
            property: "4FC1FF".into(),
            identifier: "383838".into(),
            default: "383838".into(),
        }
    }
}
