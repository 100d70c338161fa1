//! Inline node types.

use serde::{Deserialize, Serialize};

/// An inline node inside a paragraph, heading, or table cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    /// Literal text
    Text {
        /// The text content
        text: String,
    },

    /// Emphasis: one delimiter is italic, two is bold, three or more is both
    Emphasis {
        /// Number of emphasis delimiters in the source
        delimiter_count: u8,
        /// Emphasized content
        content: Vec<Inline>,
    },

    /// Inline code span
    CodeSpan {
        /// The code text
        text: String,
    },

    /// A line break; hard breaks render as real breaks, soft ones as spaces
    LineBreak {
        /// Whether the break was explicit in the source
        #[serde(default)]
        hard: bool,
    },

    /// A hyperlink or an image reference
    Link {
        /// Target URL
        url: String,
        /// Optional title (tooltip / image caption)
        #[serde(default)]
        title: Option<String>,
        /// Whether this link is an image reference
        #[serde(default)]
        is_image: bool,
        /// Link text / image alt content
        #[serde(default)]
        content: Vec<Inline>,
    },
}

impl Inline {
    /// Create a literal text node.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    /// Create an italic emphasis node.
    pub fn italic(content: Vec<Inline>) -> Self {
        Inline::Emphasis {
            delimiter_count: 1,
            content,
        }
    }

    /// Create a bold emphasis node.
    pub fn bold(content: Vec<Inline>) -> Self {
        Inline::Emphasis {
            delimiter_count: 2,
            content,
        }
    }

    /// Create an inline code span.
    pub fn code(text: impl Into<String>) -> Self {
        Inline::CodeSpan { text: text.into() }
    }

    /// Create a hyperlink with literal text content.
    pub fn link(url: impl Into<String>, text: impl Into<String>) -> Self {
        Inline::Link {
            url: url.into(),
            title: None,
            is_image: false,
            content: vec![Inline::text(text)],
        }
    }

    /// Create an image reference with alt text.
    pub fn image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Inline::Link {
            url: url.into(),
            title: None,
            is_image: true,
            content: vec![Inline::text(alt)],
        }
    }

    /// Get the plain text of this node and its children.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text { text } => text.clone(),
            Inline::Emphasis { content, .. } => content_text(content),
            Inline::CodeSpan { text } => text.clone(),
            Inline::LineBreak { .. } => "\n".to_string(),
            Inline::Link { content, url, .. } => {
                let text = content_text(content);
                if text.is_empty() {
                    url.clone()
                } else {
                    text
                }
            }
        }
    }
}

/// Concatenate the plain text of a slice of inline nodes.
pub(crate) fn content_text(content: &[Inline]) -> String {
    content.iter().map(Inline::plain_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let node = Inline::bold(vec![Inline::text("hi "), Inline::code("x")]);
        assert_eq!(node.plain_text(), "hi x");
    }

    #[test]
    fn test_link_plain_text_falls_back_to_url() {
        let link = Inline::Link {
            url: "https://example.com".into(),
            title: None,
            is_image: false,
            content: vec![],
        };
        assert_eq!(link.plain_text(), "https://example.com");
    }

    #[test]
    fn test_image_constructor() {
        let img = Inline::image("pic.png", "a picture");
        match img {
            Inline::Link { is_image, .. } => assert!(is_image),
            _ => panic!("expected link"),
        }
    }
}
