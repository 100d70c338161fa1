//! The pagination controller.
//!
//! Walks the document tree in order, dispatching each node to its handler
//! while tracking the current slide, the current paragraph, and the
//! pending-break flag left behind by thematic breaks. Slides are built by
//! a [`SlideLayout`] and handed to the sink as they finish.

use crate::deck::{DeckSink, Run};
use crate::error::{Error, Result};
use crate::highlight::TokenizerRegistry;
use crate::layout::{ParagraphRef, SlideLayout};
use crate::model::Document;
use crate::source::ImageSource;

use super::ConvertOptions;

/// Renders one document into a deck through a sink.
///
/// State is scoped to a single conversion and discarded afterwards; the
/// renderer is single-threaded and walks the tree in one forward pass.
pub(crate) struct DeckRenderer<'a, S: DeckSink> {
    pub(crate) sink: &'a mut S,
    pub(crate) options: &'a ConvertOptions,
    pub(crate) source: &'a dyn ImageSource,
    pub(crate) registry: TokenizerRegistry,

    pub(crate) slide: Option<SlideLayout>,
    pub(crate) paragraph: Option<ParagraphRef>,
    pub(crate) pending_break: bool,
    pub(crate) slide_count: usize,
}

impl<'a, S: DeckSink> DeckRenderer<'a, S> {
    pub(crate) fn new(
        sink: &'a mut S,
        options: &'a ConvertOptions,
        source: &'a dyn ImageSource,
    ) -> Self {
        Self {
            sink,
            options,
            source,
            registry: TokenizerRegistry::new(),
            slide: None,
            paragraph: None,
            pending_break: false,
            slide_count: 0,
        }
    }

    /// Convert a whole document. Fails before producing any slide when the
    /// document has no blocks; otherwise always emits at least one slide.
    pub(crate) fn render_document(&mut self, doc: &Document) -> Result<()> {
        if doc.is_empty() {
            return Err(Error::EmptyDocument);
        }
        self.sink.begin(self.options.slide_size(), &doc.metadata)?;
        for block in &doc.blocks {
            self.write_block(block)?;
        }
        self.pending_break = false;

        if self.slide.is_none() && self.slide_count == 0 {
            self.current_slide();
        }
        self.flush_slide()?;
        log::debug!("conversion finished with {} slide(s)", self.slide_count);
        self.sink.finish()
    }

    /// The active slide layout, lazily creating slide #1.
    pub(crate) fn current_slide(&mut self) -> &mut SlideLayout {
        let size = self.options.slide_size();
        let code_font_size = self.options.styles.code_font_size;
        if self.slide.is_none() {
            self.slide_count += 1;
            log::debug!("starting slide {}", self.slide_count);
        }
        self.slide
            .get_or_insert_with(|| SlideLayout::new(size, code_font_size))
    }

    /// Finalize the current slide (if any) and start a fresh one.
    pub(crate) fn new_slide(&mut self) -> Result<()> {
        self.flush_slide()?;
        self.paragraph = None;
        self.current_slide();
        Ok(())
    }

    /// Start a continuation slide, carrying over the previous slide's
    /// title with a " (cont.)" suffix.
    pub(crate) fn new_continuation_slide(&mut self) -> Result<()> {
        let title = self.slide.as_ref().and_then(SlideLayout::title_text);
        self.new_slide()?;

        if let Some(mut title) = title {
            if !title.ends_with(" (cont.)") {
                title.push_str(" (cont.)");
            }
            let styles = &self.options.styles;
            let run = Run::styled(
                title,
                styles.body_font.as_str(),
                styles.title_font_size,
                Some(&styles.title_color),
            );
            let slide = self.current_slide();
            let para = slide.add_title_paragraph();
            slide.push_run(para, run);
            self.paragraph = Some(para);
        }
        Ok(())
    }

    fn flush_slide(&mut self) -> Result<()> {
        if let Some(layout) = self.slide.take() {
            self.sink.slide(layout.finish())?;
        }
        Ok(())
    }

    /// Append a run to the current paragraph; no-op without one.
    pub(crate) fn push_run(&mut self, run: Run) {
        if let (Some(slide), Some(at)) = (self.slide.as_mut(), self.paragraph) {
            slide.push_run(at, run);
        }
    }

    /// A run in the body font, size and color.
    pub(crate) fn body_run(&self, text: &str) -> Run {
        let styles = &self.options.styles;
        Run::styled(
            text,
            styles.body_font.as_str(),
            styles.body_font_size,
            Some(&styles.body_color),
        )
    }

    /// A run in the code font at code size.
    pub(crate) fn code_run(&self, text: &str) -> Run {
        let styles = &self.options.styles;
        Run::styled(
            text,
            styles.code_font.as_str(),
            styles.code_font_size,
            Some(&styles.body_color),
        )
    }

    /// An underlined, link-colored run with a click target.
    pub(crate) fn hyperlink_run(&self, text: &str, url: &str) -> Run {
        let styles = &self.options.styles;
        let mut run = Run::styled(
            text,
            styles.body_font.as_str(),
            styles.body_font_size,
            Some(&styles.link_color),
        );
        run.underline = true;
        run.hyperlink = Some(url.to_string());
        run
    }
}
