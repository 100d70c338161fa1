//! Shell script tokenizer.

use super::{Scanner, SyntaxToken, TokenKind, Tokenizer};

const KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "case", "esac", "for", "while", "until", "do", "done",
    "in", "function", "select", "time", "return", "break", "continue", "exit", "local",
    "readonly", "declare", "typeset", "export", "unset",
];

const BUILTINS: &[&str] = &[
    "echo", "printf", "read", "cd", "pwd", "pushd", "popd", "dirs", "let", "eval", "exec",
    "source", "test", "alias", "unalias", "bg", "fg", "jobs", "wait", "suspend", "kill", "trap",
    "true", "false", "shift", "getopts", "umask", "ulimit",
];

/// Tokenizer for `bash`/`sh`/`shell` code.
pub struct ShellTokenizer;

impl Tokenizer for ShellTokenizer {
    fn supports_language(&self, language: &str) -> bool {
        ["bash", "sh", "shell"]
            .iter()
            .any(|l| language.eq_ignore_ascii_case(l))
    }

    fn tokenize<'a>(&self, code: &'a str) -> Box<dyn Iterator<Item = SyntaxToken<'a>> + 'a> {
        Box::new(ShellScanner {
            cur: Scanner::new(code),
        })
    }
}

struct ShellScanner<'a> {
    cur: Scanner<'a>,
}

impl<'a> Iterator for ShellScanner<'a> {
    type Item = SyntaxToken<'a>;

    fn next(&mut self) -> Option<SyntaxToken<'a>> {
        let start = self.cur.pos();
        let c = self.cur.peek()?;

        if c.is_whitespace() {
            self.cur.eat_while(char::is_whitespace);
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Default));
        }

        if c == '#' {
            self.cur.eat_while(|c| c != '\n' && c != '\r');
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Comment));
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
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::String));
        }

        if c == '\'' {
            self.cur.bump();
            while let Some(c) = self.cur.bump() {
                if c == '\'' {
                    break;
                }
            }
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::String));
        }

        if c == '$' {
            self.cur.bump();
            if self.cur.peek() == Some('{') {
                self.cur.bump();
                self.cur.eat_while(|c| c != '}');
                self.cur.bump();
            } else {
                self.cur.eat_while(|c| c.is_alphanumeric() || c == '_');
            }
            return Some(SyntaxToken::new(
                self.cur.slice_from(start),
                TokenKind::Identifier,
            ));
        }

        if c.is_ascii_digit()
            || (c == '-' && self.cur.peek_second().is_some_and(|c| c.is_ascii_digit()))
        {
            if c == '-' {
                self.cur.bump();
            }
            self.cur.eat_while(|c| c.is_ascii_digit() || c == '.');
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Number));
        }

        if c.is_alphabetic() || c == '_' {
            self.cur
                .eat_while(|c| c.is_alphanumeric() || c == '_' || c == '-');
            let word = self.cur.slice_from(start);
            let lower = word.to_ascii_lowercase();
            let kind = if KEYWORDS.contains(&lower.as_str()) {
                TokenKind::Keyword
            } else if BUILTINS.contains(&lower.as_str()) {
                TokenKind::Function
            } else {
                TokenKind::Identifier
            };
            return Some(SyntaxToken::new(word, kind));
        }

        if "|&;<>()[]{}!".contains(c) {
            self.cur.bump();
            // Two-character operators: ||, &&, >>, <<
            if let Some(next) = self.cur.peek() {
                if matches!((c, next), ('|', '|') | ('&', '&') | ('>', '>') | ('<', '<')) {
                    self.cur.bump();
                }
            }
            return Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Operator));
        }

        self.cur.bump();
        Some(SyntaxToken::new(self.cur.slice_from(start), TokenKind::Default))
    }
}
