//! Layout constants, all in EMUs (914,400 per inch).

use crate::deck::Emu;

/// Left slide margin (0.5 in).
pub const LEFT_MARGIN: Emu = 457_200;

/// Right slide margin (0.5 in).
pub const RIGHT_MARGIN: Emu = 457_200;

/// Top slide margin (~0.3 in).
pub const TOP_MARGIN: Emu = 274_638;

/// Bottom slide margin (~0.3 in).
pub const BOTTOM_MARGIN: Emu = 274_638;

/// Height of the title bar (~1.08 in).
pub const TITLE_HEIGHT: Emu = 990_600;

/// Gap between the title bar and the content area (~0.2 in).
pub const TITLE_CONTENT_GAP: Emu = 182_880;

/// Estimated height of one content paragraph (~0.35 in).
///
/// The content region's height is `paragraph count × this value`; the
/// engine deliberately uses this constant-height model instead of measured
/// text layout, and the overflow threshold depends on it.
pub const PARAGRAPH_HEIGHT: Emu = 320_040;

/// Minimum height the content shape is ever shrunk to (0.2 in).
pub const MIN_CONTENT_HEIGHT: Emu = 182_880;

/// Vertical gap inserted between consecutive standalone shapes (0.1 in).
pub const SHAPE_GAP: Emu = 91_440;

/// Extra padding added to a code block shape's computed height (0.2 in).
pub const CODE_PADDING: Emu = 182_880;

/// Horizontal text inset for code block shapes (0.1 in).
pub const CODE_INSET_X: Emu = 91_440;

/// Vertical text inset for code block shapes (0.05 in).
pub const CODE_INSET_Y: Emu = 45_720;

/// EMUs per point.
pub const EMU_PER_POINT: Emu = 12_700;

/// EMUs per image pixel at 96 DPI.
pub const EMU_PER_PIXEL: Emu = 9_525;

/// Height of the line emitted by a horizontal rule (0.5 pt).
pub const RULE_HEIGHT: Emu = 6_350;

/// Cursor advance after a horizontal rule (0.2 in).
pub const RULE_ADVANCE: Emu = 182_880;

/// Hairline border width for tables (0.5 pt).
pub const HAIRLINE: Emu = 6_350;

/// Left indent applied per list nesting level (0.5 in).
pub const LIST_INDENT: Emu = 457_200;

/// Line height multiplier for code text.
pub const CODE_LINE_FACTOR: f64 = 1.4;

/// Row height multiplier for table text.
pub const TABLE_ROW_FACTOR: f64 = 1.6;

/// Maximum share of the content width a portrait image may take.
pub const PORTRAIT_MAX_WIDTH_NUM: Emu = 2;
pub const PORTRAIT_MAX_WIDTH_DEN: Emu = 5;
