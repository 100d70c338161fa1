//! TypeSpec schema language tokenizer.

use super::{Scanner, SyntaxToken, TokenKind, Tokenizer};

const KEYWORDS: &[&str] = &[
    "model", "namespace", "op", "interface", "enum", "union", "using", "import", "extends", "is",
    "alias", "scalar", "void", "never", "unknown", "true", "false", "if", "else", "return",
    "valueof", "typeof",
];

const TYPES: &[&str] = &[
    "string", "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32", "uint64", "safeint",
    "float", "float32", "float64", "decimal", "decimal128", "numeric", "integer", "boolean",
    "bytes", "duration", "plaindate", "plaintime", "utcdatetime", "offsetdatetime", "url",
    "record", "array",
];

/// Tokenizer for the `typespec`/`cadl` schema definition language.
pub struct TypeSpecTokenizer;

impl Tokenizer for TypeSpecTokenizer {
    fn supports_language(&self, language: &str) -> bool {
        ["typespec", "cadl"]
            .iter()
            .any(|l| language.eq_ignore_ascii_case(l))
    }

    fn tokenize<'a>(&self, code: &'a str) -> Box<dyn Iterator<Item = SyntaxToken<'a>> + 'a> {
        Box::new(TypeSpecScanner {
            cur: Scanner::new(code),
        })
    }
}

struct TypeSpecScanner<'a> {
    cur: Scanner<'a>,
}

impl<'a> TypeSpecScanner<'a> {
    fn scan_quoted(&mut self, quote: char) {
        self.cur.bump();
        while let Some(c) = self.cur.peek() {
            if c == '\\' && self.cur.peek_second().is_some() {
                self.cur.bump();
                self.cur.bump();
                continue;
            }
            self.cur.bump();
            if c == quote {
                break;
            }
        }
    }
}

impl<'a> Iterator for TypeSpecScanner<'a> {
    type Item = SyntaxToken<'a>;

    fn next(&mut self) -> Option<SyntaxToken<'a>> {
        let start = self.cur.pos();
        let c = self.cur.peek()?;

        if c.is_whitespace() {
            self.cur.eat_while(char::is_whitespace);
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Default));
        }

        if c == '/' && self.cur.peek_second() == Some('*') {
            self.cur.bump();
            self.cur.bump();
            while let Some(c) = self.cur.peek() {
                if c == '*' && self.cur.peek_second() == Some('/') {
                    self.cur.bump();
                    self.cur.bump();
                    break;
                }
                self.cur.bump();
            }
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Comment));
        }

        if c == '/' && self.cur.peek_second() == Some('/') {
            self.cur.eat_while(|c| c != '\n' && c != '\r');
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Comment));
        }

        if c == '"' || c == '`' {
            self.scan_quoted(c);
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::String));
        }

        if c.is_ascii_digit()
            || (c == '-' && self.cur.peek_second().is_some_and(|c| c.is_ascii_digit()))
        {
            if c == '-' {
                self.cur.bump();
            }
            self.cur.eat_while(|c| {
                c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+')
            });
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Number));
        }

        if c == '@' {
            self.cur.bump();
            self.cur.eat_while(|c| c.is_alphanumeric() || c == '_');
            return Some(SyntaxToken::new(
                self.cur.slice_from(start),
                TokenKind::Property,
            ));
        }

        if c.is_alphabetic() || c == '_' {
            self.cur.eat_while(|c| c.is_alphanumeric() || c == '_');
            let word = self.cur.slice_from(start);
            let lower = word.to_ascii_lowercase();
            let kind = if KEYWORDS.contains(&lower.as_str()) {
                TokenKind::Keyword
            } else if TYPES.contains(&lower.as_str()) {
                TokenKind::Type
            } else if self.cur.peek() == Some('(') {
                TokenKind::Function
            } else if c.is_uppercase() {
                TokenKind::Type
            } else {
                TokenKind::Identifier
            };
            return Some(SyntaxToken::new(word, kind));
        }

        if "{}[]()<>:;,.?|&=+-*/%!".contains(c) {
            self.cur.bump();
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Operator));
        }

        self.cur.bump();
        Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Default))
    }
}
