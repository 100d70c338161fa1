//! HTTP request/response tokenizer.
//!
//! Recognizes request and status lines, header fields, and the message
//! body. A body whose `Content-Type` is JSON is delegated to the JSON
//! scanner. Anything that does not start with a request or status line is
//! emitted as a single default token.

use super::json::JsonScanner;
use super::{SyntaxToken, TokenKind, Tokenizer};

const METHODS: &[&str] = &[
    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "TRACE", "CONNECT",
];

/// Tokenizer for `http`/`https`/`request`/`response` code blocks.
#[derive(Default)]
pub struct HttpTokenizer;

impl HttpTokenizer {
    /// Create a new HTTP tokenizer.
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for HttpTokenizer {
    fn supports_language(&self, language: &str) -> bool {
        ["http", "https", "request", "response"]
            .iter()
            .any(|l| language.eq_ignore_ascii_case(l))
    }

    fn tokenize<'a>(&self, code: &'a str) -> Box<dyn Iterator<Item = SyntaxToken<'a>> + 'a> {
        Box::new(scan(code).into_iter())
    }
}

fn scan(code: &str) -> Vec<SyntaxToken<'_>> {
    let mut out = Vec::new();

    let (first, term, mut rest) = split_line(code);
    let start_line = first.trim();
    if is_request_line(start_line) {
        // METHOD url HTTP/version
        emit_line_words(
            &mut out,
            first,
            &[TokenKind::Keyword, TokenKind::String, TokenKind::Type],
        );
    } else if is_status_line(start_line) {
        // HTTP/version code reason...
        emit_line_words(&mut out, first, &[TokenKind::Type, TokenKind::Number]);
    } else {
        return vec![SyntaxToken::new(code, TokenKind::Default)];
    }
    push_nonempty(&mut out, term, TokenKind::Default);

    // Header fields until the blank separator line.
    let mut json_body = false;
    loop {
        if rest.is_empty() {
            return out;
        }
        let (line, term, next) = split_line(rest);
        rest = next;

        if line.trim().is_empty() {
            push_nonempty(&mut out, line, TokenKind::Default);
            push_nonempty(&mut out, term, TokenKind::Default);
            break;
        }

        match line.find(':') {
            Some(colon) if colon > 0 => {
                let name = &line[..colon];
                let value = &line[colon + 1..];
                out.push(SyntaxToken::new(name, TokenKind::Property));
                out.push(SyntaxToken::new(&line[colon..colon + 1], TokenKind::Operator));
                let ws = value.len() - value.trim_start().len();
                push_nonempty(&mut out, &value[..ws], TokenKind::Default);
                push_nonempty(&mut out, &value[ws..], TokenKind::Default);

                if name.trim().eq_ignore_ascii_case("content-type") && is_json_media_type(value) {
                    json_body = true;
                }
            }
            _ => out.push(SyntaxToken::new(line, TokenKind::Default)),
        }
        push_nonempty(&mut out, term, TokenKind::Default);
    }

    // Body.
    if !rest.is_empty() {
        if json_body {
            out.extend(JsonScanner::new(rest));
        } else {
            out.push(SyntaxToken::new(rest, TokenKind::Default));
        }
    }
    out
}

// Split off the first line: (line, terminator, remainder). The terminator
// is "\n", "\r", "\r\n", or empty at end of input.
fn split_line(s: &str) -> (&str, &str, &str) {
    for (i, c) in s.char_indices() {
        match c {
            '\n' => return (&s[..i], &s[i..i + 1], &s[i + 1..]),
            '\r' => {
                let end = if s.as_bytes().get(i + 1) == Some(&b'\n') {
                    i + 2
                } else {
                    i + 1
                };
                return (&s[..i], &s[i..end], &s[end..]);
            }
            _ => {}
        }
    }
    (s, "", "")
}

// Emit the words of a line with positional kinds, preserving whitespace
// runs as default tokens. Words past the kind list are default.
fn emit_line_words<'a>(out: &mut Vec<SyntaxToken<'a>>, line: &'a str, kinds: &[TokenKind]) {
    let mut word_index = 0;
    let mut rest = line;
    while !rest.is_empty() {
        let ws = rest.len() - rest.trim_start().len();
        if ws > 0 {
            out.push(SyntaxToken::new(&rest[..ws], TokenKind::Default));
            rest = &rest[ws..];
            continue;
        }
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let kind = kinds.get(word_index).copied().unwrap_or(TokenKind::Default);
        out.push(SyntaxToken::new(&rest[..end], kind));
        word_index += 1;
        rest = &rest[end..];
    }
}

fn push_nonempty<'a>(out: &mut Vec<SyntaxToken<'a>>, text: &'a str, kind: TokenKind) {
    if !text.is_empty() {
        out.push(SyntaxToken::new(text, kind));
    }
}

fn is_request_line(line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let (Some(method), Some(_url), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    METHODS.iter().any(|m| method.eq_ignore_ascii_case(m))
        && version
            .get(..5)
            .is_some_and(|v| v.eq_ignore_ascii_case("HTTP/"))
}

fn is_status_line(line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let (Some(version), Some(code)) = (parts.next(), parts.next()) else {
        return false;
    };
    version
        .get(..5)
        .is_some_and(|v| v.eq_ignore_ascii_case("HTTP/"))
        && code.starts_with(|c: char| c.is_ascii_digit())
}

// "application/json; charset=utf-8" and friends.
fn is_json_media_type(value: &str) -> bool {
    let media = value.split(';').next().unwrap_or("").trim();
    media.eq_ignore_ascii_case("application/json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(code: &str) -> Vec<SyntaxToken<'_>> {
        HttpTokenizer::new().tokenize(code).collect()
    }

    #[test]
    fn test_supports_language() {
        assert!(HttpTokenizer::new().supports_language("http"));
        assert!(HttpTokenizer::new().supports_language("Response"));
        assert!(!HttpTokenizer::new().supports_language("ftp"));
    }

    #[test]
    fn test_request_line_kinds() {
        let toks = tokens("GET /pets HTTP/1.1");
        assert_eq!(toks[0], SyntaxToken::new("GET", TokenKind::Keyword));
        assert_eq!(toks[2], SyntaxToken::new("/pets", TokenKind::String));
        assert_eq!(toks[4], SyntaxToken::new("HTTP/1.1", TokenKind::Type));
    }

    #[test]
    fn test_status_line_kinds() {
        let toks = tokens("HTTP/1.1 404 Not Found");
        assert_eq!(toks[0], SyntaxToken::new("HTTP/1.1", TokenKind::Type));
        assert_eq!(toks[2], SyntaxToken::new("404", TokenKind::Number));
        assert!(toks[4..].iter().all(|t| t.kind == TokenKind::Default));
    }

    #[test]
    fn test_header_fields() {
        let toks = tokens("GET / HTTP/1.1\nHost: example.com\n");
        let host = toks.iter().find(|t| t.text == "Host").unwrap();
        assert_eq!(host.kind, TokenKind::Property);
        let colon = toks.iter().find(|t| t.text == ":").unwrap();
        assert_eq!(colon.kind, TokenKind::Operator);
        let value = toks.iter().find(|t| t.text == "example.com").unwrap();
        assert_eq!(value.kind, TokenKind::Default);
    }

    #[test]
    fn test_json_body_delegation() {
        let msg = "HTTP/1.1 200 OK\r\nContent-Type: application/json; charset=utf-8\r\n\r\n{\"ok\": true}";
        let toks = tokens(msg);
        let key = toks.iter().find(|t| t.text == "\"ok\"").unwrap();
        assert_eq!(key.kind, TokenKind::Property);
        let lit = toks.iter().find(|t| t.text == "true").unwrap();
        assert_eq!(lit.kind, TokenKind::Keyword);
    }

    #[test]
    fn test_plain_body_single_token() {
        let msg = "HTTP/1.1 200 OK\nContent-Type: text/plain\n\nhello world";
        let toks = tokens(msg);
        assert_eq!(toks.last().unwrap().text, "hello world");
        assert_eq!(toks.last().unwrap().kind, TokenKind::Default);
    }

    #[test]
    fn test_non_http_is_single_default_token() {
        let toks = tokens("just some text\nwith lines");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Default);
    }

    #[test]
    fn test_round_trip_crlf() {
        let msg = "POST /api HTTP/1.1\r\nHost:  spaced.example\r\nX: y\r\n\r\n{\"n\": [1, 2]}";
        let rebuilt: String = tokens(msg).iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, msg);
    }

    #[test]
    fn test_round_trip_headers_without_body() {
        let msg = "GET / HTTP/1.1\nAccept: */*";
        let rebuilt: String = tokens(msg).iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, msg);
    }
}
