//! JSON tokenizer.

use super::{Scanner, SyntaxToken, TokenKind, Tokenizer};

/// Tokenizer for JSON literals and structure.
pub struct JsonTokenizer;

impl Tokenizer for JsonTokenizer {
    fn supports_language(&self, language: &str) -> bool {
        language.eq_ignore_ascii_case("json")
    }

    fn tokenize<'a>(&self, code: &'a str) -> Box<dyn Iterator<Item = SyntaxToken<'a>> + 'a> {
        Box::new(JsonScanner {
            cur: Scanner::new(code),
        })
    }
}

pub(crate) struct JsonScanner<'a> {
    cur: Scanner<'a>,
}

impl<'a> JsonScanner<'a> {
    pub(crate) fn new(code: &'a str) -> Self {
        Self {
            cur: Scanner::new(code),
        }
    }
}

impl<'a> Iterator for JsonScanner<'a> {
    type Item = SyntaxToken<'a>;

    fn next(&mut self) -> Option<SyntaxToken<'a>> {
        let start = self.cur.pos();
        let c = self.cur.peek()?;

        if c.is_whitespace() {
            self.cur.eat_while(char::is_whitespace);
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Default));
        }

        if c == '"' {
            self.cur.bump();
            while let Some(c) = self.cur.peek() {
                if c == '\\' && self.cur.peek_second().is_some() {
                    self.cur.bump();
                    self.cur.bump();
                    continue;
                }
                self.cur.bump();
                if c == '"' {
                    break;
                }
            }
            // A string directly followed by a colon is an object key.
            let kind = if self.cur.peek_past_whitespace() == Some(':') {
                TokenKind::Property
            } else {
                TokenKind::String
            };
            return Some(SyntaxToken::new(self.cur.slice_from(start), kind));
        }

        if c.is_ascii_digit()
            || (c == '-' && self.cur.peek_second().is_some_and(|c| c.is_ascii_digit()))
        {
            if c == '-' {
                self.cur.bump();
            }
            self.cur.eat_while(|c| {
                c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
            });
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Number));
        }

        if c.is_alphabetic() {
            self.cur.eat_while(char::is_alphabetic);
            let word = self.cur.slice_from(start);
            let kind = match word {
                "true" | "false" | "null" => TokenKind::Keyword,
                _ => TokenKind::Default,
            };
            return Some(SyntaxToken::new(word, kind));
        }

        if "{}[]:,".contains(c) {
            self.cur.bump();
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Operator));
        }

        self.cur.bump();
        Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(code: &str) -> Vec<SyntaxToken<'_>> {
        JsonTokenizer.tokenize(code).collect()
    }

    #[test]
    fn test_supports_language() {
        assert!(JsonTokenizer.supports_language("json"));
        assert!(JsonTokenizer.supports_language("JSON"));
        assert!(!JsonTokenizer.supports_language("yaml"));
    }

    #[test]
    fn test_keys_vs_strings() {
        let toks = tokens("{\"name\": \"value\"}");
        assert_eq!(toks[1], SyntaxToken::new("\"name\"", TokenKind::Property));
        let value = toks.iter().find(|t| t.text == "\"value\"").unwrap();
        assert_eq!(value.kind, TokenKind::String);
    }

    #[test]
    fn test_key_with_space_before_colon() {
        let toks = tokens("{\"key\" : 1}");
        assert_eq!(toks[1].kind, TokenKind::Property);
    }

    #[test]
    fn test_literals() {
        let toks = tokens("[true, false, null, -1.5e+2]");
        assert_eq!(toks[1], SyntaxToken::new("true", TokenKind::Keyword));
        let num = toks.iter().find(|t| t.kind == TokenKind::Number).unwrap();
        assert_eq!(num.text, "-1.5e+2");
    }

    #[test]
    fn test_structural_operators() {
        let toks = tokens("{}");
        assert!(toks.iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_round_trip_with_escapes() {
        let code = "{\"a\\\"b\": [1, \"x\\\\\"], \"c\": null}";
        let rebuilt: String = tokens(code).iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, code);
    }
}
