//! Inline node handlers.

use crate::deck::DeckSink;
use crate::error::Result;
use crate::model::{content_text, Inline};
use crate::probe;

use super::engine::DeckRenderer;

impl<S: DeckSink> DeckRenderer<'_, S> {
    /// Render a sequence of inline nodes into the current paragraph.
    pub(crate) fn render_inlines(&mut self, content: &[Inline]) -> Result<()> {
        for inline in content {
            self.render_inline(inline)?;
        }
        Ok(())
    }

    fn render_inline(&mut self, inline: &Inline) -> Result<()> {
        match inline {
            Inline::Text { text } => {
                if !text.is_empty() {
                    let run = self.body_run(text);
                    self.push_run(run);
                }
                Ok(())
            }
            Inline::Emphasis {
                delimiter_count,
                content,
            } => self.render_emphasis(*delimiter_count, content),
            Inline::CodeSpan { text } => {
                let run = self.code_run(text);
                self.push_run(run);
                Ok(())
            }
            Inline::LineBreak { hard } => {
                if *hard {
                    if let (Some(slide), Some(at)) = (self.slide.as_mut(), self.paragraph) {
                        slide.push_line_break(at);
                    }
                } else {
                    let run = self.body_run(" ");
                    self.push_run(run);
                }
                Ok(())
            }
            Inline::Link {
                url,
                title,
                is_image,
                content,
            } => {
                if *is_image {
                    self.render_image(url, title.as_deref(), content)
                } else if url.is_empty() {
                    // No target: render children unstyled.
                    self.render_inlines(content)
                } else {
                    self.render_hyperlink(url, content);
                    Ok(())
                }
            }
        }
    }

    // One or three-plus delimiters set italic, two or more set bold.
    // Literal children get the styling directly; anything else dispatches
    // on its own.
    fn render_emphasis(&mut self, delimiter_count: u8, content: &[Inline]) -> Result<()> {
        let bold = delimiter_count >= 2;
        let italic = delimiter_count == 1 || delimiter_count >= 3;
        for child in content {
            match child {
                Inline::Text { text } => {
                    let run = self.body_run(text).bold(bold).italic(italic);
                    self.push_run(run);
                }
                other => self.render_inline(other)?,
            }
        }
        Ok(())
    }

    // One hyperlink run per literal child; the bare URL when the link has
    // no children.
    fn render_hyperlink(&mut self, url: &str, content: &[Inline]) {
        if content.is_empty() {
            let run = self.hyperlink_run(url, url);
            self.push_run(run);
            return;
        }
        for child in content {
            if let Inline::Text { text } = child {
                let run = self.hyperlink_run(text, url);
                self.push_run(run);
            }
        }
    }

    // Resolve, probe and place the image; on any failure fall back to an
    // italic alt-text run when inside a paragraph, else drop it silently.
    fn render_image(&mut self, url: &str, title: Option<&str>, content: &[Inline]) -> Result<()> {
        match self.try_embed_image(url) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::warn!("could not embed image '{}': {}", url, e);
                if self.paragraph.is_some() {
                    let alt = image_alt_text(url, title, content);
                    let run = self.body_run(&format!("[Image: {alt}]")).italic(true);
                    self.push_run(run);
                }
                Ok(())
            }
        }
    }

    fn try_embed_image(&mut self, url: &str) -> Result<()> {
        let resolved = self.source.fetch(url)?;
        let (width, height) = probe::dimensions(&resolved.data);
        self.current_slide()
            .add_image(resolved.data, &resolved.content_type, width, height);
        Ok(())
    }
}

// Title, else the alt content, else the URL itself.
fn image_alt_text(url: &str, title: Option<&str>, content: &[Inline]) -> String {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        return title.to_string();
    }
    let alt = content_text(content);
    if alt.is_empty() {
        url.to_string()
    } else {
        alt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Inline;

    #[test]
    fn test_image_alt_text_priority() {
        let content = vec![Inline::text("alt words")];
        assert_eq!(
            image_alt_text("u.png", Some("the title"), &content),
            "the title"
        );
        assert_eq!(image_alt_text("u.png", None, &content), "alt words");
        assert_eq!(image_alt_text("u.png", None, &[]), "u.png");
        assert_eq!(image_alt_text("u.png", Some(""), &[]), "u.png");
    }
}
