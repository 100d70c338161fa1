//! Block-level node types.

use serde::{Deserialize, Serialize};

use super::Inline;

/// A block-level document node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading with level 1-6
    Heading {
        /// Heading level (1-6)
        level: u8,
        /// Inline content of the heading
        content: Vec<Inline>,
    },

    /// A paragraph of inline content
    Paragraph {
        /// Inline content
        content: Vec<Inline>,
    },

    /// An ordered or unordered list
    List {
        /// Whether the list is numbered
        ordered: bool,
        /// List items in order
        items: Vec<ListItem>,
    },

    /// A block quote
    Quote {
        /// Quoted child blocks
        blocks: Vec<Block>,
    },

    /// A fenced code block
    CodeBlock {
        /// Language tag from the fence info string, if any
        language: Option<String>,
        /// Raw text lines, without terminators
        lines: Vec<String>,
    },

    /// A table
    Table {
        /// Table rows in order
        rows: Vec<TableRow>,
    },

    /// A thematic break (horizontal rule in source markup)
    ThematicBreak,
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: u8, content: Vec<Inline>) -> Self {
        Block::Heading { level, content }
    }

    /// Create a paragraph block.
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// Create a paragraph block with plain text.
    pub fn text_paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            content: vec![Inline::text(text)],
        }
    }

    /// Create a code block from raw text, splitting it into lines.
    pub fn code(language: Option<&str>, text: &str) -> Self {
        Block::CodeBlock {
            language: language.map(str::to_string),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }
}

/// A single item of a list; may contain nested lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    /// Child blocks of the item
    pub blocks: Vec<Block>,
}

impl ListItem {
    /// Create a list item from child blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Create a list item holding a single text paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![Block::text_paragraph(text)],
        }
    }
}

/// A table row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,

    /// Whether this is a header row
    #[serde(default)]
    pub is_header: bool,
}

impl TableRow {
    /// Create a new body row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create a header row.
    pub fn header(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }
}

/// A table cell holding inline content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    pub content: Vec<Inline>,
}

impl TableCell {
    /// Create a cell with inline content.
    pub fn new(content: Vec<Inline>) -> Self {
        Self { content }
    }

    /// Create a cell with plain text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Inline::text(text)],
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
        }
    }
}
