//! Syntax tokenizer registry.
//!
//! Tokenizers split code text into classified spans for coloring. Every
//! tokenizer upholds one contract: concatenating the emitted token texts
//! in order reproduces the input exactly. The built-in tokenizers are
//! hand-written scanners, not table-driven lexers.

mod bash;
mod http;
mod json;
mod typespec;

pub use bash::ShellTokenizer;
pub use http::HttpTokenizer;
pub use json::JsonTokenizer;
pub use typespec::TypeSpecTokenizer;

/// Classification of a syntax token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    String,
    Number,
    Comment,
    Operator,
    Type,
    Function,
    Property,
    Identifier,
    Default,
}

/// A classified span of code text, borrowed from the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxToken<'a> {
    /// The span text
    pub text: &'a str,
    /// Classification
    pub kind: TokenKind,
}

impl<'a> SyntaxToken<'a> {
    /// Create a token.
    pub fn new(text: &'a str, kind: TokenKind) -> Self {
        Self { text, kind }
    }
}

/// A lexer that splits code into classified spans.
pub trait Tokenizer: Send + Sync {
    /// Whether this tokenizer handles the given language name
    /// (case-insensitive).
    fn supports_language(&self, language: &str) -> bool;

    /// Tokenize `code` into a finite sequence of spans whose concatenation
    /// equals `code`.
    fn tokenize<'a>(&self, code: &'a str) -> Box<dyn Iterator<Item = SyntaxToken<'a>> + 'a>;
}

/// Registry of tokenizers; selection is first-registered-wins.
pub struct TokenizerRegistry {
    tokenizers: Vec<Box<dyn Tokenizer>>,
}

impl TokenizerRegistry {
    /// Create a registry with the built-in tokenizers.
    pub fn new() -> Self {
        Self {
            tokenizers: vec![
                Box::new(HttpTokenizer::new()),
                Box::new(TypeSpecTokenizer),
                Box::new(ShellTokenizer),
                Box::new(JsonTokenizer),
            ],
        }
    }

    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            tokenizers: Vec::new(),
        }
    }

    /// Register an additional tokenizer; later registrations lose ties.
    pub fn register(&mut self, tokenizer: Box<dyn Tokenizer>) {
        self.tokenizers.push(tokenizer);
    }

    /// Whether any registered tokenizer supports the language.
    pub fn supports(&self, language: &str) -> bool {
        if language.trim().is_empty() {
            return false;
        }
        self.tokenizers
            .iter()
            .any(|t| t.supports_language(language))
    }

    /// Tokenize `code` with the first tokenizer matching `language`.
    ///
    /// Falls back to a single `Default` token covering the whole input when
    /// no language is given or none matches.
    pub fn tokenize<'a>(
        &self,
        code: &'a str,
        language: Option<&str>,
    ) -> Box<dyn Iterator<Item = SyntaxToken<'a>> + 'a> {
        if code.is_empty() {
            return Box::new(std::iter::empty());
        }
        if let Some(lang) = language.filter(|l| !l.trim().is_empty()) {
            if let Some(tokenizer) = self.tokenizers.iter().find(|t| t.supports_language(lang)) {
                return tokenizer.tokenize(code);
            }
        }
        Box::new(std::iter::once(SyntaxToken::new(code, TokenKind::Default)))
    }
}

impl Default for TokenizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Character cursor shared by the hand-written scanners.
pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    pub(crate) fn peek_second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.bump();
        }
    }

    /// The text from `start` up to the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.src[start..self.pos]
    }

    /// First non-whitespace character at or after the cursor.
    pub(crate) fn peek_past_whitespace(&self) -> Option<char> {
        self.src[self.pos..].chars().find(|c| !c.is_whitespace())
    }
}
