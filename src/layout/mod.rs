//! Slide geometry management.
//!
//! [`SlideLayout`] owns one slide's coordinate state: the title and content
//! regions, the vertical cursor, overflow detection and the placement rules
//! for standalone shapes (code blocks, tables, images, rules). It turns
//! "add this kind of content" requests from the renderer into positioned
//! shapes, using a constant-height-per-paragraph estimate rather than
//! measured text.

pub mod geometry;
mod slide;

pub use slide::{ParagraphRef, PortraitSide, SlideLayout};
