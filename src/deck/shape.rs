//! Shape, paragraph and run types.

use serde::{Deserialize, Serialize};

/// English Metric Unit, the coordinate unit of the deck model.
pub type Emu = i64;

/// EMUs per inch.
pub const EMU_PER_INCH: Emu = 914_400;

/// An axis-aligned rectangle in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: Emu,
    /// Top edge
    pub y: Emu,
    /// Width
    pub w: Emu,
    /// Height
    pub h: Emu,
}

impl Rect {
    /// Create a rectangle from offset and extents.
    pub fn new(x: Emu, y: Emu, w: Emu, h: Emu) -> Self {
        Self { x, y, w, h }
    }

    /// Bottom edge.
    pub fn bottom(&self) -> Emu {
        self.y + self.h
    }

    /// Right edge.
    pub fn right(&self) -> Emu {
        self.x + self.w
    }
}

/// A positioned shape on a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Position and size
    pub frame: Rect,

    /// Shape content
    pub kind: ShapeKind,
}

/// Content carried by a shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    /// A text box
    Text(TextBody),

    /// An embedded image
    Image {
        /// Raw image bytes
        #[serde(with = "base64_bytes")]
        data: Vec<u8>,
        /// MIME content type (e.g., "image/png")
        content_type: String,
    },

    /// A table grid
    Table(TableGrid),

    /// A thin horizontal line
    Line {
        /// Line color
        color: String,
        /// Line width in EMUs
        width: Emu,
    },
}

/// Text content of a shape: ordered paragraphs of styled runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextBody {
    /// Vertical anchoring of the text inside the shape
    #[serde(default)]
    pub anchor: Anchor,

    /// Solid background fill color, if any
    #[serde(default)]
    pub fill: Option<String>,

    /// Text insets (padding), if any
    #[serde(default)]
    pub insets: Option<Insets>,

    /// Paragraphs in order
    pub paragraphs: Vec<Paragraph>,
}

/// Vertical text anchoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Anchor text to the top of the shape (default)
    #[default]
    Top,
    /// Anchor text to the bottom of the shape
    Bottom,
}

/// Text insets in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: Emu,
    pub top: Emu,
    pub right: Emu,
    pub bottom: Emu,
}

/// A paragraph of runs with paragraph-level properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph properties
    #[serde(default)]
    pub props: ParagraphProps,

    /// Runs and breaks in order
    pub content: Vec<ParagraphContent>,
}

impl Paragraph {
    /// Create an empty paragraph with the given properties.
    pub fn new(props: ParagraphProps) -> Self {
        Self {
            props,
            content: Vec::new(),
        }
    }

    /// Append a run.
    pub fn push_run(&mut self, run: Run) {
        self.content.push(ParagraphContent::Run(run));
    }

    /// Iterate over the runs, skipping line breaks.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.content.iter().filter_map(|c| match c {
            ParagraphContent::Run(run) => Some(run),
            ParagraphContent::LineBreak => None,
        })
    }

    /// Iterate mutably over the runs, skipping line breaks.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut Run> {
        self.content.iter_mut().filter_map(|c| match c {
            ParagraphContent::Run(run) => Some(run),
            ParagraphContent::LineBreak => None,
        })
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                ParagraphContent::Run(run) => run.text.as_str(),
                ParagraphContent::LineBreak => "\n",
            })
            .collect()
    }
}

/// Paragraph-level layout properties.
///
/// Spacing values are in hundredths of a point, matching the drawing
/// conventions of presentation formats; `indent` is in EMUs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphProps {
    /// Space before the paragraph
    #[serde(default)]
    pub space_before: Option<i32>,

    /// Space after the paragraph
    #[serde(default)]
    pub space_after: Option<i32>,

    /// Line spacing as a percentage × 1000 (100000 = single)
    #[serde(default)]
    pub line_spacing: Option<u32>,

    /// Left indent in EMUs
    #[serde(default)]
    pub indent: Option<Emu>,
}

/// One element of a paragraph: a styled run or an explicit line break.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParagraphContent {
    /// A styled text run
    Run(Run),
    /// A hard line break
    LineBreak,
}

/// A contiguous span of identically styled text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Font name; the sink's default when `None`
    #[serde(default)]
    pub font: Option<String>,

    /// Font size in points
    #[serde(default)]
    pub size: Option<u16>,

    /// Text color as hex without `#`
    #[serde(default)]
    pub color: Option<String>,

    /// Bold
    #[serde(default)]
    pub bold: bool,

    /// Italic
    #[serde(default)]
    pub italic: bool,

    /// Underline
    #[serde(default)]
    pub underline: bool,

    /// Hyperlink click target
    #[serde(default)]
    pub hyperlink: Option<String>,
}

impl Run {
    /// Create a run with text and no styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a styled run with the common font/size/color triple.
    pub fn styled(
        text: impl Into<String>,
        font: impl Into<String>,
        size: u16,
        color: Option<&str>,
    ) -> Self {
        Self {
            text: text.into(),
            font: Some(font.into()),
            size: Some(size),
            color: color.map(str::to_string),
            ..Default::default()
        }
    }

    /// Set bold and return self.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic and return self.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

/// A table grid: uniform borders, per-column widths, rows of cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGrid {
    /// Column widths in EMUs
    pub column_widths: Vec<Emu>,

    /// Border color for all cell edges
    pub border_color: String,

    /// Border width in EMUs
    pub border_width: Emu,

    /// Rows in order
    pub rows: Vec<TableGridRow>,
}

/// A row of a table grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableGridRow {
    /// Row height in EMUs
    pub height: Emu,

    /// Cells in order, padded to the grid's column count
    pub cells: Vec<TableGridCell>,
}

/// A single cell of a table grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableGridCell {
    /// Cell text
    pub paragraph: Paragraph,

    /// Solid background fill, if any
    #[serde(default)]
    pub fill: Option<String>,
}

/// Serde helper: image bytes as base64 in JSON.
mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}
