//! Per-slide layout state and shape placement.

use crate::deck::{
    Anchor, Emu, Insets, Paragraph, ParagraphContent, ParagraphProps, Rect, Run, Shape, ShapeKind,
    Slide, SlideSize, TableGrid, TextBody,
};

use super::geometry::*;

/// Which side of the slide a portrait image has claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitSide {
    Left,
    Right,
}

/// Opaque handle to a paragraph inside the slide under layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphRef {
    shape: usize,
    para: usize,
}

/// Layout manager for a single slide.
///
/// Tracks the title and content regions, a monotonic vertical cursor and
/// the standalone shapes placed so far. Content height is estimated as
/// `paragraph count × PARAGRAPH_HEIGHT`; that estimate drives both the
/// overflow predicate and the content-shape reflow that happens when a
/// standalone shape is placed below it.
pub struct SlideLayout {
    slide_width: Emu,
    slide_height: Emu,
    content_top: Emu,
    content_height: Emu,
    full_content_width: Emu,
    code_line_height: Emu,

    current_y: Emu,
    paragraph_count: usize,
    title: Option<usize>,
    content: Option<usize>,
    first_standalone_y: Option<Emu>,
    portrait: Option<(PortraitSide, Emu)>,

    slide: Slide,
}

impl SlideLayout {
    /// Create a layout manager for a fresh slide.
    pub fn new(size: SlideSize, code_font_size: u16) -> Self {
        let content_top = TOP_MARGIN + TITLE_HEIGHT + TITLE_CONTENT_GAP;
        Self {
            slide_width: size.width,
            slide_height: size.height,
            content_top,
            content_height: size.height - content_top - BOTTOM_MARGIN,
            full_content_width: size.width - LEFT_MARGIN - RIGHT_MARGIN,
            code_line_height: (code_font_size as f64 * EMU_PER_POINT as f64 * CODE_LINE_FACTOR)
                as Emu,
            current_y: content_top,
            paragraph_count: 0,
            title: None,
            content: None,
            first_standalone_y: None,
            portrait: None,
            slide: Slide::new(),
        }
    }

    /// Available width between the slide margins.
    pub fn full_content_width(&self) -> Emu {
        self.full_content_width
    }

    /// Number of content paragraphs added so far.
    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    /// Whether the content shape has been created.
    pub fn has_content_shape(&self) -> bool {
        self.content.is_some()
    }

    /// Which side a portrait image has claimed, if any.
    pub fn portrait_side(&self) -> Option<PortraitSide> {
        self.portrait.map(|(side, _)| side)
    }

    /// Consume the layout and return the finished slide.
    pub fn finish(self) -> Slide {
        self.slide
    }

    // Content column origin, accounting for a left-side portrait claim.
    fn content_x(&self) -> Emu {
        match self.portrait {
            Some((PortraitSide::Left, w)) => LEFT_MARGIN + w + SHAPE_GAP,
            _ => LEFT_MARGIN,
        }
    }

    // Content column width, accounting for a portrait claim on either side.
    fn content_width(&self) -> Emu {
        match self.portrait {
            Some((_, w)) => self.full_content_width - w - SHAPE_GAP,
            None => self.full_content_width,
        }
    }

    // The cursor never retreats.
    fn advance_cursor(&mut self, candidate: Emu) {
        self.current_y = self.current_y.max(candidate);
    }

    fn record_standalone(&mut self, y: Emu) {
        if self.first_standalone_y.is_none() {
            self.first_standalone_y = Some(y);
        }
    }

    fn text_body_mut(&mut self, shape: usize) -> Option<&mut TextBody> {
        match self.slide.shapes.get_mut(shape) {
            Some(Shape {
                kind: ShapeKind::Text(body),
                ..
            }) => Some(body),
            _ => None,
        }
    }

    /// Get or create the title shape at the top of the slide.
    pub fn get_or_create_title_shape(&mut self) -> usize {
        if let Some(idx) = self.title {
            return idx;
        }
        let idx = self.slide.shapes.len();
        self.slide.shapes.push(Shape {
            frame: Rect::new(LEFT_MARGIN, TOP_MARGIN, self.full_content_width, TITLE_HEIGHT),
            kind: ShapeKind::Text(TextBody {
                anchor: Anchor::Bottom,
                ..Default::default()
            }),
        });
        self.title = Some(idx);
        idx
    }

    /// Get or create the content shape below the title region.
    ///
    /// If a portrait image has already claimed a side, the shape is offset
    /// and narrowed into the remaining column.
    pub fn get_or_create_content_shape(&mut self) -> usize {
        if let Some(idx) = self.content {
            return idx;
        }
        let idx = self.slide.shapes.len();
        self.slide.shapes.push(Shape {
            frame: Rect::new(
                self.content_x(),
                self.content_top,
                self.content_width(),
                self.content_height,
            ),
            kind: ShapeKind::Text(TextBody::default()),
        });
        self.content = Some(idx);
        idx
    }

    /// Append an empty paragraph to the title shape.
    pub fn add_title_paragraph(&mut self) -> ParagraphRef {
        let shape = self.get_or_create_title_shape();
        self.append_paragraph(shape, ParagraphProps::default())
    }

    /// Append a paragraph to the content shape and advance the estimate.
    pub fn add_content_paragraph(&mut self, props: ParagraphProps) -> ParagraphRef {
        let shape = self.get_or_create_content_shape();
        let at = self.append_paragraph(shape, props);
        self.paragraph_count += 1;
        self.advance_cursor(self.content_top + self.paragraph_count as Emu * PARAGRAPH_HEIGHT);
        at
    }

    /// Append a paragraph to an arbitrary text shape (code blocks).
    pub fn add_shape_paragraph(&mut self, shape: usize, props: ParagraphProps) -> ParagraphRef {
        self.append_paragraph(shape, props)
    }

    fn append_paragraph(&mut self, shape: usize, props: ParagraphProps) -> ParagraphRef {
        let para = match self.text_body_mut(shape) {
            Some(body) => {
                body.paragraphs.push(Paragraph::new(props));
                body.paragraphs.len() - 1
            }
            None => 0,
        };
        ParagraphRef { shape, para }
    }

    /// Append a run to a paragraph.
    pub fn push_run(&mut self, at: ParagraphRef, run: Run) {
        if let Some(body) = self.text_body_mut(at.shape) {
            if let Some(para) = body.paragraphs.get_mut(at.para) {
                para.push_run(run);
            }
        }
    }

    /// Append a hard line break to a paragraph.
    pub fn push_line_break(&mut self, at: ParagraphRef) {
        if let Some(body) = self.text_body_mut(at.shape) {
            if let Some(para) = body.paragraphs.get_mut(at.para) {
                para.content.push(ParagraphContent::LineBreak);
            }
        }
    }

    /// Apply a styling fix-up to every run of a paragraph.
    pub fn restyle_runs(&mut self, at: ParagraphRef, mut f: impl FnMut(&mut Run)) {
        if let Some(body) = self.text_body_mut(at.shape) {
            if let Some(para) = body.paragraphs.get_mut(at.para) {
                for run in para.runs_mut() {
                    f(run);
                }
            }
        }
    }

    /// True when the next content paragraph's estimated bottom would cross
    /// the bottom margin. Advisory only; based on the height estimate.
    pub fn would_overflow_with_paragraph(&self) -> bool {
        let next_bottom = self.content_top + (self.paragraph_count as Emu + 1) * PARAGRAPH_HEIGHT;
        next_bottom > self.slide_height - BOTTOM_MARGIN
    }

    // Shrink the content shape to its estimated height and move the cursor
    // past it. Called before placing a code block or a landscape image.
    // The estimate can undershoot already-rendered text; that is the
    // documented behavior of the constant-height model.
    fn reflow_content_for_standalone(&mut self) {
        let Some(idx) = self.content else { return };
        let mut estimated = (self.paragraph_count as Emu * PARAGRAPH_HEIGHT).max(MIN_CONTENT_HEIGHT);
        if let Some(first_y) = self.first_standalone_y {
            estimated = estimated.min((first_y - self.content_top).max(MIN_CONTENT_HEIGHT));
        }
        self.slide.shapes[idx].frame.h = estimated;
        let candidate = self.content_top + estimated + SHAPE_GAP;
        self.advance_cursor(candidate);
    }

    /// Add a standalone text box with a solid background fill for a code
    /// block. Height is derived from the surviving line count.
    pub fn add_code_block_shape(&mut self, line_count: usize, fill: &str) -> usize {
        self.reflow_content_for_standalone();
        if self.first_standalone_y.is_some() {
            self.current_y += SHAPE_GAP;
        }
        let height = line_count.max(1) as Emu * self.code_line_height + CODE_PADDING;
        let frame = Rect::new(LEFT_MARGIN, self.current_y, self.full_content_width, height);
        let idx = self.slide.shapes.len();
        self.slide.shapes.push(Shape {
            frame,
            kind: ShapeKind::Text(TextBody {
                fill: Some(fill.to_string()),
                insets: Some(Insets {
                    left: CODE_INSET_X,
                    top: CODE_INSET_Y,
                    right: CODE_INSET_X,
                    bottom: CODE_INSET_Y,
                }),
                ..Default::default()
            }),
        });
        self.record_standalone(frame.y);
        self.advance_cursor(frame.bottom());
        idx
    }

    /// Add an empty table grid at the cursor. Width is divided evenly
    /// across `cols`; the cursor advances by `rows × row_height`.
    pub fn add_table(
        &mut self,
        rows: usize,
        cols: usize,
        row_height: Emu,
        border_color: &str,
    ) -> usize {
        let height = rows as Emu * row_height;
        let frame = Rect::new(LEFT_MARGIN, self.current_y, self.full_content_width, height);
        let idx = self.slide.shapes.len();
        self.slide.shapes.push(Shape {
            frame,
            kind: ShapeKind::Table(TableGrid {
                column_widths: vec![self.full_content_width / cols as Emu; cols],
                border_color: border_color.to_string(),
                border_width: HAIRLINE,
                rows: Vec::new(),
            }),
        });
        self.record_standalone(frame.y);
        self.advance_cursor(frame.bottom());
        idx
    }

    /// Mutable access to a table grid created by [`add_table`].
    ///
    /// [`add_table`]: SlideLayout::add_table
    pub fn table_mut(&mut self, shape: usize) -> Option<&mut TableGrid> {
        match self.slide.shapes.get_mut(shape) {
            Some(Shape {
                kind: ShapeKind::Table(grid),
                ..
            }) => Some(grid),
            _ => None,
        }
    }

    /// Place an image, choosing between portrait (side column) and
    /// landscape (in flow, below the content) placement.
    pub fn add_image(&mut self, data: Vec<u8>, content_type: &str, px_w: u32, px_h: u32) {
        let native_w = px_w as Emu * EMU_PER_PIXEL;
        let native_h = px_h as Emu * EMU_PER_PIXEL;
        if native_w <= 0 || native_h <= 0 {
            return;
        }
        if px_h > px_w && self.portrait.is_none() {
            self.place_portrait_image(data, content_type, native_w, native_h);
        } else {
            self.place_flow_image(data, content_type, native_w, native_h);
        }
    }

    // Portrait images claim a side column once per slide: left when no
    // content paragraphs exist yet, right otherwise. Width is capped to
    // 40% of the content width; height fits the content area.
    fn place_portrait_image(
        &mut self,
        data: Vec<u8>,
        content_type: &str,
        native_w: Emu,
        native_h: Emu,
    ) {
        let max_w = self.full_content_width * PORTRAIT_MAX_WIDTH_NUM / PORTRAIT_MAX_WIDTH_DEN;
        let scale = fit_scale(native_w, native_h, max_w, self.content_height);
        let w = (native_w as f64 * scale).round() as Emu;
        let h = (native_h as f64 * scale).round() as Emu;
        if w <= 0 || h <= 0 {
            return;
        }

        let side = if self.paragraph_count == 0 {
            PortraitSide::Left
        } else {
            PortraitSide::Right
        };
        let x = match side {
            PortraitSide::Left => LEFT_MARGIN,
            PortraitSide::Right => self.slide_width - RIGHT_MARGIN - w,
        };
        let y = self.content_top + (self.content_height - h) / 2;
        self.slide.shapes.push(Shape {
            frame: Rect::new(x, y, w, h),
            kind: ShapeKind::Image {
                data,
                content_type: content_type.to_string(),
            },
        });
        self.portrait = Some((side, w));

        // An existing content shape moves into the remaining column; it is
        // only ever narrowed, never widened.
        if let Some(idx) = self.content {
            let x = self.content_x();
            let width = self.content_width();
            let frame = &mut self.slide.shapes[idx].frame;
            frame.x = x;
            frame.w = frame.w.min(width);
        }
    }

    // Landscape images (and any image after a portrait claim) go below the
    // content, shrink-to-fit, horizontally centered.
    fn place_flow_image(
        &mut self,
        data: Vec<u8>,
        content_type: &str,
        native_w: Emu,
        native_h: Emu,
    ) {
        self.reflow_content_for_standalone();
        let avail_h = self.slide_height - BOTTOM_MARGIN - self.current_y;
        if avail_h <= 0 {
            log::warn!("no vertical space left for image, dropping it");
            return;
        }
        let scale = fit_scale(native_w, native_h, self.full_content_width, avail_h);
        let w = (native_w as f64 * scale).round() as Emu;
        let h = (native_h as f64 * scale).round() as Emu;
        if w <= 0 || h <= 0 {
            return;
        }
        let x = LEFT_MARGIN + (self.full_content_width - w) / 2;
        let frame = Rect::new(x, self.current_y, w, h);
        self.slide.shapes.push(Shape {
            frame,
            kind: ShapeKind::Image {
                data,
                content_type: content_type.to_string(),
            },
        });
        self.record_standalone(frame.y);
        self.advance_cursor(frame.bottom() + SHAPE_GAP);
    }

    /// Emit a thin line spanning the content width at the cursor.
    pub fn add_horizontal_rule(&mut self, color: &str) {
        let frame = Rect::new(
            LEFT_MARGIN,
            self.current_y,
            self.full_content_width,
            RULE_HEIGHT,
        );
        self.slide.shapes.push(Shape {
            frame,
            kind: ShapeKind::Line {
                color: color.to_string(),
                width: RULE_HEIGHT,
            },
        });
        self.advance_cursor(self.current_y + RULE_ADVANCE);
    }

    /// Concatenated text of the title shape, if it has any.
    pub fn title_text(&self) -> Option<String> {
        let idx = self.title?;
        match &self.slide.shapes[idx].kind {
            ShapeKind::Text(body) => {
                let text: String = body.paragraphs.iter().map(|p| p.plain_text()).collect();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            _ => None,
        }
    }
}

// Shrink-to-fit scale factor; never upscales past 1.0.
fn fit_scale(w: Emu, h: Emu, max_w: Emu, max_h: Emu) -> f64 {
    let sw = max_w as f64 / w as f64;
    let sh = max_h as f64 / h as f64;
    sw.min(sh).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SlideLayout {
        SlideLayout::new(SlideSize::default(), 14)
    }

    #[test]
    fn test_title_shape_idempotent() {
        let mut layout = layout();
        let a = layout.get_or_create_title_shape();
        let b = layout.get_or_create_title_shape();
        assert_eq!(a, b);
        assert_eq!(layout.slide.shape_count(), 1);
    }

    #[test]
    fn test_content_shape_geometry() {
        let mut layout = layout();
        let idx = layout.get_or_create_content_shape();
        let frame = layout.slide.shapes[idx].frame;
        assert_eq!(frame.x, LEFT_MARGIN);
        assert_eq!(frame.y, TOP_MARGIN + TITLE_HEIGHT + TITLE_CONTENT_GAP);
        assert_eq!(frame.w, 9_144_000 - LEFT_MARGIN - RIGHT_MARGIN);
    }

    #[test]
    fn test_cursor_never_retreats() {
        let mut layout = layout();
        layout.add_content_paragraph(ParagraphProps::default());
        let after_one = layout.current_y;
        // A code block pushes the cursor well past the estimate; another
        // paragraph must not pull it back.
        layout.add_code_block_shape(10, "F5F5F5");
        let after_code = layout.current_y;
        layout.add_content_paragraph(ParagraphProps::default());
        assert!(layout.current_y >= after_code);
        assert!(after_code > after_one);
    }

    #[test]
    fn test_overflow_predicate() {
        let mut layout = layout();
        assert!(!layout.would_overflow_with_paragraph());
        let capacity = (layout.slide_height - BOTTOM_MARGIN - layout.content_top)
            / PARAGRAPH_HEIGHT;
        for _ in 0..capacity {
            layout.add_content_paragraph(ParagraphProps::default());
        }
        assert!(layout.would_overflow_with_paragraph());
    }

    #[test]
    fn test_code_block_shrinks_content() {
        let mut layout = layout();
        let content = layout.get_or_create_content_shape();
        layout.add_content_paragraph(ParagraphProps::default());
        layout.add_content_paragraph(ParagraphProps::default());
        let code = layout.add_code_block_shape(3, "F5F5F5");

        let content_frame = layout.slide.shapes[content].frame;
        assert_eq!(content_frame.h, 2 * PARAGRAPH_HEIGHT);
        let code_frame = layout.slide.shapes[code].frame;
        assert!(code_frame.y >= content_frame.bottom());
        let expected_h = 3 * layout.code_line_height + CODE_PADDING;
        assert_eq!(code_frame.h, expected_h);
    }

    #[test]
    fn test_content_shrink_capped_by_first_standalone() {
        let mut layout = layout();
        layout.add_content_paragraph(ParagraphProps::default());
        let first = layout.add_code_block_shape(1, "F5F5F5");
        let first_y = layout.slide.shapes[first].frame.y;
        // Many more paragraphs would grow the estimate past the first
        // standalone shape; the reflow must cap at its Y.
        for _ in 0..8 {
            layout.add_content_paragraph(ParagraphProps::default());
        }
        layout.add_code_block_shape(1, "F5F5F5");
        let content = layout.content.unwrap();
        let content_frame = layout.slide.shapes[content].frame;
        assert!(content_frame.bottom() <= first_y);
    }

    #[test]
    fn test_consecutive_code_blocks_have_gap() {
        let mut layout = layout();
        let a = layout.add_code_block_shape(2, "F5F5F5");
        let b = layout.add_code_block_shape(2, "F5F5F5");
        let a_bottom = layout.slide.shapes[a].frame.bottom();
        let b_top = layout.slide.shapes[b].frame.y;
        assert_eq!(b_top, a_bottom + SHAPE_GAP);
    }

    #[test]
    fn test_portrait_image_left_when_no_content() {
        let mut layout = layout();
        layout.add_image(vec![0u8; 4], "image/png", 200, 400);
        assert_eq!(layout.portrait_side(), Some(PortraitSide::Left));
        let img_frame = layout.slide.shapes[0].frame;
        assert_eq!(img_frame.x, LEFT_MARGIN);
        // Later-created content shape lands right of the image.
        let content = layout.get_or_create_content_shape();
        let frame = layout.slide.shapes[content].frame;
        assert!(frame.x > img_frame.right());
    }

    #[test]
    fn test_portrait_image_right_after_content() {
        let mut layout = layout();
        layout.add_content_paragraph(ParagraphProps::default());
        let content_frame_before = layout.slide.shapes[layout.content.unwrap()].frame;
        layout.add_image(vec![0u8; 4], "image/png", 200, 400);
        assert_eq!(layout.portrait_side(), Some(PortraitSide::Right));
        let img = layout.slide.shapes.last().unwrap();
        assert!(img.frame.x > LEFT_MARGIN);
        // Content shape narrowed, not moved.
        let content_frame = layout.slide.shapes[layout.content.unwrap()].frame;
        assert_eq!(content_frame.x, LEFT_MARGIN);
        assert!(content_frame.w < content_frame_before.w);
    }

    #[test]
    fn test_portrait_width_capped_at_two_fifths() {
        let mut layout = layout();
        // Tall but wide enough that the 40% cap binds before the height.
        layout.add_image(vec![0u8; 4], "image/png", 2000, 2001);
        let img = &layout.slide.shapes[0];
        let cap = layout.full_content_width * 2 / 5;
        assert!(img.frame.w <= cap);
    }

    #[test]
    fn test_second_portrait_image_flows() {
        let mut layout = layout();
        layout.add_image(vec![0u8; 4], "image/png", 200, 400);
        layout.add_image(vec![0u8; 4], "image/png", 200, 400);
        assert_eq!(layout.slide.shape_count(), 2);
        let second = &layout.slide.shapes[1];
        // Flow placement starts at the content top, not vertically centered.
        assert_eq!(second.frame.y, layout.content_top);
    }

    #[test]
    fn test_landscape_image_centered_and_scaled() {
        let mut layout = layout();
        // 8000px wide: must be shrunk to the content width.
        layout.add_image(vec![0u8; 4], "image/png", 8000, 1000);
        let img = &layout.slide.shapes[0];
        assert_eq!(img.frame.w, layout.full_content_width);
        let mid = LEFT_MARGIN + (layout.full_content_width - img.frame.w) / 2;
        assert_eq!(img.frame.x, mid);
    }

    #[test]
    fn test_small_landscape_image_not_upscaled() {
        let mut layout = layout();
        layout.add_image(vec![0u8; 4], "image/png", 100, 50);
        let img = &layout.slide.shapes[0];
        assert_eq!(img.frame.w, 100 * EMU_PER_PIXEL);
        assert_eq!(img.frame.h, 50 * EMU_PER_PIXEL);
    }

    #[test]
    fn test_table_placement() {
        let mut layout = layout();
        let idx = layout.add_table(3, 4, 100_000, "CCCCCC");
        let frame = layout.slide.shapes[idx].frame;
        assert_eq!(frame.h, 300_000);
        let grid = layout.table_mut(idx).unwrap();
        assert_eq!(grid.column_widths.len(), 4);
        assert!(grid.column_widths.iter().all(|&w| w == 8_229_600 / 4));
    }

    #[test]
    fn test_horizontal_rule_advances_cursor() {
        let mut layout = layout();
        let before = layout.current_y;
        layout.add_horizontal_rule("CCCCCC");
        assert_eq!(layout.current_y, before + RULE_ADVANCE);
        assert!(matches!(
            layout.slide.shapes[0].kind,
            ShapeKind::Line { .. }
        ));
    }

    #[test]
    fn test_title_text() {
        let mut layout = layout();
        assert!(layout.title_text().is_none());
        let para = layout.add_title_paragraph();
        layout.push_run(para, Run::new("Intro"));
        assert_eq!(layout.title_text().as_deref(), Some("Intro"));
    }
}
