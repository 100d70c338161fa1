//! Block node handlers.

use crate::deck::{DeckSink, Emu, Paragraph, ParagraphProps, Run, TableGridCell, TableGridRow};
use crate::error::Result;
use crate::layout::geometry::{EMU_PER_POINT, LIST_INDENT, TABLE_ROW_FACTOR};
use crate::layout::ParagraphRef;
use crate::model::{Block, Inline, ListItem, TableCell, TableRow};

use super::engine::DeckRenderer;

// Extra space before sub-headings and quote paragraphs, in hundredths of
// a point.
const HEADING_SPACE_BEFORE: i32 = 600;
const QUOTE_SPACE_BEFORE: i32 = 200;

impl<S: DeckSink> DeckRenderer<'_, S> {
    /// Dispatch one block node.
    ///
    /// A pending thematic break that was not claimed by a heading forces a
    /// new slide before any other block type renders.
    pub(crate) fn write_block(&mut self, block: &Block) -> Result<()> {
        if self.pending_break && !matches!(block, Block::Heading { .. } | Block::ThematicBreak) {
            self.pending_break = false;
            self.new_slide()?;
        }

        match block {
            Block::Heading { level, content } => self.render_heading(*level, content),
            Block::Paragraph { content } => self.render_paragraph(content),
            Block::List { ordered, items } => self.render_list(*ordered, items, 0),
            Block::Quote { blocks } => self.render_quote(blocks),
            Block::CodeBlock { language, lines } => {
                self.render_code_block(language.as_deref(), lines)
            }
            Block::Table { rows } => self.render_table(rows),
            Block::ThematicBreak => {
                // Deferred: the next heading consumes this instead of
                // creating a duplicate slide.
                self.pending_break = true;
                Ok(())
            }
        }
    }

    // H1/H2 start a new slide and render into its title shape; H3-H6 are
    // styled paragraphs in the content area.
    fn render_heading(&mut self, level: u8, content: &[Inline]) -> Result<()> {
        let font_size = self.options.styles.heading_font_size(level);

        let para = if level <= 2 {
            self.pending_break = false;
            self.new_slide()?;
            self.current_slide().add_title_paragraph()
        } else {
            self.current_slide().add_content_paragraph(ParagraphProps {
                space_before: Some(HEADING_SPACE_BEFORE),
                ..Default::default()
            })
        };
        self.paragraph = Some(para);
        self.render_inlines(content)?;
        self.apply_heading_style(para, font_size);
        Ok(())
    }

    fn apply_heading_style(&mut self, at: ParagraphRef, font_size: u16) {
        let color = self.options.styles.title_color.clone();
        let font = self.options.styles.body_font.clone();
        if let Some(slide) = self.slide.as_mut() {
            slide.restyle_runs(at, |run| {
                run.size = Some(font_size);
                run.bold = true;
                run.color = Some(color.clone());
                if run.font.is_none() {
                    run.font = Some(font.clone());
                }
            });
        }
    }

    fn render_paragraph(&mut self, content: &[Inline]) -> Result<()> {
        // A paragraph holding nothing but images places them directly; a
        // text paragraph here would claim the content column before the
        // first portrait image could take the left side.
        if !content.is_empty() && content.iter().all(is_image_link) {
            self.paragraph = None;
            return self.render_inlines(content);
        }

        if self.current_slide().would_overflow_with_paragraph() {
            self.new_continuation_slide()?;
        }
        let para = self
            .current_slide()
            .add_content_paragraph(ParagraphProps::default());
        self.paragraph = Some(para);
        self.render_inlines(content)
    }

    // Lists flatten into overflow-checked content paragraphs: a numbered
    // or bulleted prefix run, a per-level indent, and the item's inline
    // content. Nested lists recurse one level deeper.
    fn render_list(&mut self, ordered: bool, items: &[ListItem], level: usize) -> Result<()> {
        for (index, item) in items.iter().enumerate() {
            for block in &item.blocks {
                match block {
                    Block::Paragraph { content } => {
                        if self.current_slide().would_overflow_with_paragraph() {
                            self.new_continuation_slide()?;
                        }
                        let indent = (level > 0).then(|| LIST_INDENT * level as Emu);
                        let para = self.current_slide().add_content_paragraph(ParagraphProps {
                            indent,
                            ..Default::default()
                        });
                        self.paragraph = Some(para);

                        let prefix = if ordered {
                            format!("{}. ", index + 1)
                        } else {
                            format!("{} ", bullet_glyph(level))
                        };
                        let run = self.body_run(&prefix);
                        self.push_run(run);
                        self.render_inlines(content)?;
                    }
                    Block::List { ordered, items } => {
                        self.render_list(*ordered, items, level + 1)?;
                    }
                    other => self.write_block(other)?,
                }
            }
        }
        Ok(())
    }

    // Quote paragraphs are indented, spaced and forced italic; any other
    // child block dispatches normally.
    fn render_quote(&mut self, blocks: &[Block]) -> Result<()> {
        for block in blocks {
            match block {
                Block::Paragraph { content } => {
                    if self.current_slide().would_overflow_with_paragraph() {
                        self.new_continuation_slide()?;
                    }
                    let para = self.current_slide().add_content_paragraph(ParagraphProps {
                        space_before: Some(QUOTE_SPACE_BEFORE),
                        ..Default::default()
                    });
                    self.paragraph = Some(para);

                    let styles = &self.options.styles;
                    let indent = Run::styled(
                        "    ",
                        styles.body_font.as_str(),
                        styles.body_font_size,
                        None,
                    );
                    self.push_run(indent);
                    self.render_inlines(content)?;

                    if let Some(slide) = self.slide.as_mut() {
                        slide.restyle_runs(para, |run| run.italic = true);
                    }
                }
                other => self.write_block(other)?,
            }
        }
        Ok(())
    }

    // Code blocks become standalone filled shapes, one paragraph per line.
    // Trailing blank lines are dropped; an all-blank block keeps one empty
    // line of height.
    fn render_code_block(&mut self, language: Option<&str>, lines: &[String]) -> Result<()> {
        let language = language.map(str::trim).filter(|l| !l.is_empty());
        let highlight =
            self.options.syntax_highlighting && language.is_some_and(|l| self.registry.supports(l));

        let last_non_blank = lines.iter().rposition(|l| !l.trim().is_empty());
        let line_count = last_non_blank.map_or(1, |i| i + 1);

        let background = self.options.styles.code_background.clone();
        let shape = self
            .current_slide()
            .add_code_block_shape(line_count, &background);

        if let Some(last) = last_non_blank {
            let props = ParagraphProps {
                line_spacing: Some(100_000),
                space_before: Some(0),
                space_after: Some(0),
                indent: None,
            };
            for line in &lines[..=last] {
                let para = self.current_slide().add_shape_paragraph(shape, props);
                if highlight {
                    let styles = &self.options.styles;
                    let runs: Vec<Run> = self
                        .registry
                        .tokenize(line, language)
                        .map(|token| {
                            Run::styled(
                                token.text,
                                styles.code_font.as_str(),
                                styles.code_font_size,
                                Some(styles.syntax.color_for(token.kind)),
                            )
                        })
                        .collect();
                    for run in runs {
                        self.current_slide().push_run(para, run);
                    }
                } else {
                    let run = self.code_run(line);
                    self.current_slide().push_run(para, run);
                }
            }
        }
        self.paragraph = None;
        Ok(())
    }

    // Tables skip entirely when either dimension is zero; short rows pad
    // with empty cells up to the widest row.
    fn render_table(&mut self, rows: &[TableRow]) -> Result<()> {
        let row_count = rows.len();
        let col_count = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
        if row_count == 0 || col_count == 0 {
            log::debug!("skipping table with zero rows or columns");
            return Ok(());
        }

        let styles = &self.options.styles;
        let row_height =
            (styles.body_font_size as f64 * EMU_PER_POINT as f64 * TABLE_ROW_FACTOR) as Emu;
        let header_fill = styles.table_header_fill.clone();
        let stripe_fill = styles.table_stripe_fill.clone();
        let border_color = styles.border_color.clone();

        let grid_rows: Vec<TableGridRow> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let fill = if row.is_header {
                    Some(header_fill.clone())
                } else if i % 2 == 0 {
                    Some(stripe_fill.clone())
                } else {
                    None
                };
                let mut cells: Vec<TableGridCell> = row
                    .cells
                    .iter()
                    .map(|cell| TableGridCell {
                        paragraph: self.table_cell_paragraph(cell, row.is_header),
                        fill: fill.clone(),
                    })
                    .collect();
                cells.resize_with(col_count, TableGridCell::default);
                TableGridRow {
                    height: row_height,
                    cells,
                }
            })
            .collect();

        let shape = self
            .current_slide()
            .add_table(row_count, col_count, row_height, &border_color);
        if let Some(grid) = self.current_slide().table_mut(shape) {
            grid.rows = grid_rows;
        }
        self.paragraph = None;
        Ok(())
    }

    // Table cells render a restricted inline subset: text, emphasis over
    // text, and code spans.
    fn table_cell_paragraph(&self, cell: &TableCell, is_header: bool) -> Paragraph {
        let styles = &self.options.styles;
        let mut para = Paragraph::default();
        for inline in &cell.content {
            match inline {
                Inline::Text { text } => {
                    let color = if is_header {
                        &styles.table_header_text
                    } else {
                        &styles.body_color
                    };
                    para.push_run(
                        Run::styled(
                            text,
                            styles.body_font.as_str(),
                            styles.body_font_size,
                            Some(color),
                        )
                        .bold(is_header),
                    );
                }
                Inline::Emphasis {
                    delimiter_count,
                    content,
                } => {
                    for child in content {
                        if let Inline::Text { text } = child {
                            para.push_run(
                                Run::styled(
                                    text,
                                    styles.body_font.as_str(),
                                    styles.body_font_size,
                                    Some(&styles.body_color),
                                )
                                .bold(*delimiter_count == 2 || is_header)
                                .italic(*delimiter_count == 1),
                            );
                        }
                    }
                }
                Inline::CodeSpan { text } => {
                    para.push_run(
                        Run::styled(
                            text,
                            styles.code_font.as_str(),
                            styles.code_font_size,
                            Some(&styles.body_color),
                        )
                        .bold(is_header),
                    );
                }
                _ => {}
            }
        }
        para
    }
}

fn is_image_link(inline: &Inline) -> bool {
    matches!(inline, Inline::Link { is_image: true, .. })
}

// Bullet glyphs cycle with period 3 by nesting depth.
fn bullet_glyph(level: usize) -> char {
    match level % 3 {
        0 => '•',
        1 => '○',
        _ => '■',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_glyph_cycles() {
        assert_eq!(bullet_glyph(0), '•');
        assert_eq!(bullet_glyph(1), '○');
        assert_eq!(bullet_glyph(2), '■');
        assert_eq!(bullet_glyph(3), '•');
    }
}
