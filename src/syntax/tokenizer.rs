//! Single-pass scanner over a source buffer.
//!
//! Rules are tried in a fixed order at the current position and the first
//! match wins; every rule consumes at least one byte, so the scan always
//! terminates within input-length iterations. The scanner is total: no
//! input is rejected and unterminated literals simply run to end of input.

use memchr::{memchr, memmem};

use super::language::LanguageSpec;
use super::token::{Token, TokenKind};

const OPERATOR_BYTES: &[u8] = b"+-*/%=<>!&|^~?:";

/// Tokenize `text` under the rules of `lang`.
///
/// Pure function of its inputs; holds no state between calls.
pub fn tokenize<'a>(text: &'a str, lang: &LanguageSpec) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let (kind, len) = scan_token(rest, lang);
        debug_assert!(len >= 1, "scanner must always advance");
        tokens.push(Token {
            kind,
            text: &rest[..len],
        });
        pos += len;
    }

    tokens
}

fn scan_token(rest: &str, lang: &LanguageSpec) -> (TokenKind, usize) {
    let bytes = rest.as_bytes();
    let first = bytes[0];

    // Comment starts are only attempted for the C family, which is why a
    // quote inside `//` is never seen by the string rule.
    if lang.line_comments {
        if rest.starts_with("//") {
            // newline stays outside the comment token
            let len = memchr(b'\n', bytes).unwrap_or(bytes.len());
            return (TokenKind::Comment, len);
        }
        if rest.starts_with("/*") {
            // the search starts right after the `/`, so `/*/` closes itself
            let len = match memmem::find(&bytes[1..], b"*/") {
                Some(i) => 1 + i + 2,
                None => bytes.len(),
            };
            return (TokenKind::Comment, len);
        }
    }

    if matches!(first, b'"' | b'\'' | b'`') {
        return (TokenKind::String, string_len(bytes));
    }

    if first.is_ascii_digit() {
        return (TokenKind::Number, number_len(bytes));
    }

    if first.is_ascii_alphabetic() || first == b'_' || first == b'$' {
        let len = word_len(bytes);
        let word = &rest[..len];
        let kind = if lang.is_keyword(word) {
            TokenKind::Keyword
        } else if rest[len..].trim_start().starts_with('(') {
            TokenKind::Function
        } else {
            TokenKind::Identifier
        };
        return (kind, len);
    }

    if lang.markup_tags && first == b'<' {
        if let Some(len) = tag_len(bytes) {
            return (TokenKind::Tag, len);
        }
    }

    if OPERATOR_BYTES.contains(&first) {
        let len = bytes
            .iter()
            .take_while(|b| OPERATOR_BYTES.contains(b))
            .count();
        return (TokenKind::Operator, len);
    }

    // Fallback: exactly one Unicode scalar.
    let len = rest.chars().next().map_or(1, char::len_utf8);
    (TokenKind::Default, len)
}

/// Span of a string literal starting at `bytes[0]` (the quote).
///
/// The closing delimiter is the first matching quote not directly preceded
/// by a backslash; without one the literal runs to end of input.
fn string_len(bytes: &[u8]) -> usize {
    let quote = bytes[0];
    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == quote && bytes[i - 1] != b'\\' {
            break;
        }
        i += 1;
    }
    (i + 1).min(bytes.len())
}

/// `\d+(\.\d*)?`
fn number_len(bytes: &[u8]) -> usize {
    let mut i = digit_run(bytes, 0);
    if i < bytes.len() && bytes[i] == b'.' {
        i = digit_run(bytes, i + 1);
    }
    i
}

fn digit_run(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
fn word_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .take_while(|&&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
        .count()
}

/// `</?[A-Za-z][A-Za-z0-9]*`, or None when `<` opens no tag.
fn tag_len(bytes: &[u8]) -> Option<usize> {
    let mut i = 1;
    if bytes.get(1) == Some(&b'/') {
        i = 2;
    }
    if !bytes.get(i)?.is_ascii_alphabetic() {
        return None;
    }
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    Some(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::LanguageTable;

    fn concat(tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        let table = LanguageTable::new();
        assert!(tokenize("", table.get("js")).is_empty());
    }

    #[test]
    fn test_concatenation_reconstructs_input() {
        let table = LanguageTable::new();
        let samples = [
            ("js", "const x = 42; // done\nfoo(x);"),
            ("js", "let s = \"a\\\"b\" + 'c' + `d`;"),
            ("ts", "interface P { n: number }\n/* block */"),
            ("py", "def f():\n    return True  # comment-ish"),
            ("html", "<div class=\"row\"><p>héllo — ünïcode</p></div>"),
            ("css", ".cls { color: #00ff41; }"),
            ("nonexistent", "whatever ¤ 12.5 <x> ::"),
        ];
        for (lang, text) in samples {
            let tokens = tokenize(text, table.get(lang));
            assert_eq!(concat(&tokens), text, "lang={}", lang);
            assert!(tokens.iter().all(|t| !t.text.is_empty()));
        }
    }

    #[test]
    fn test_determinism() {
        let table = LanguageTable::new();
        let text = "const a = 'x'; // t\nb(1.5);";
        let first = tokenize(text, table.get("js"));
        let second = tokenize(text, table.get("js"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_keyword_classification() {
        let table = LanguageTable::new();
        let tokens = tokenize("if", table.get("js"));
        assert_eq!(
            tokens,
            vec![Token {
                kind: TokenKind::Keyword,
                text: "if"
            }]
        );
    }

    #[test]
    fn test_keyword_matching_is_case_sensitive() {
        let table = LanguageTable::new();
        let tokens = tokenize("If", table.get("js"));
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_unknown_language_fallback() {
        let table = LanguageTable::new();
        let tokens = tokenize("foo(1)", table.get("nonexistent"));
        assert_eq!(tokens[0].kind, TokenKind::Function);
        assert_eq!(tokens[0].text, "foo");
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].text, "1");
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Keyword));
    }

    #[test]
    fn test_function_detection_skips_whitespace() {
        let table = LanguageTable::new();
        let tokens = tokenize("foo  (", table.get("js"));
        assert_eq!(tokens[0].kind, TokenKind::Function);

        let tokens = tokenize("foo\n(", table.get("js"));
        assert_eq!(tokens[0].kind, TokenKind::Function);

        let tokens = tokenize("foo bar", table.get("js"));
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let table = LanguageTable::new();
        let tokens = tokenize("say \"hello", table.get("js"));
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::String);
        assert_eq!(last.text, "\"hello");
    }

    #[test]
    fn test_escaped_quote_stays_inside_string() {
        let table = LanguageTable::new();
        let tokens = tokenize(r#""a\"b" rest"#, table.get("js"));
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, r#""a\"b""#);
    }

    #[test]
    fn test_line_comment_precedes_string_rule() {
        let table = LanguageTable::new();
        let tokens = tokenize("// \"not a string\"", table.get("js"));
        assert_eq!(
            tokens,
            vec![Token {
                kind: TokenKind::Comment,
                text: "// \"not a string\""
            }]
        );
    }

    #[test]
    fn test_line_comment_excludes_newline() {
        let table = LanguageTable::new();
        let tokens = tokenize("// a\nb", table.get("js"));
        assert_eq!(tokens[0].text, "// a");
        assert_eq!(tokens[1].kind, TokenKind::Default);
        assert_eq!(tokens[1].text, "\n");
    }

    #[test]
    fn test_block_comment_terminated_and_not() {
        let table = LanguageTable::new();
        let tokens = tokenize("/* a */x", table.get("ts"));
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, "/* a */");

        let tokens = tokenize("/* open", table.get("ts"));
        assert_eq!(
            tokens,
            vec![Token {
                kind: TokenKind::Comment,
                text: "/* open"
            }]
        );

        // the opening star can pair with a following slash
        let tokens = tokenize("/*/x", table.get("ts"));
        assert_eq!(tokens[0].text, "/*/");
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_comments_disabled_outside_c_family() {
        let table = LanguageTable::new();
        let tokens = tokenize("//x", table.get("py"));
        assert_eq!(tokens[0].kind, TokenKind::Operator);
        assert_eq!(tokens[0].text, "//");
    }

    #[test]
    fn test_number_with_fraction() {
        let table = LanguageTable::new();
        let tokens = tokenize("3.14 7. 9", table.get("js"));
        assert_eq!(tokens[0].text, "3.14");
        assert_eq!(tokens[2].text, "7.");
        assert_eq!(tokens[4].text, "9");
        assert!(tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Number)
            .count() == 3);
    }

    #[test]
    fn test_markup_tags() {
        let table = LanguageTable::new();
        let tokens = tokenize("<div>", table.get("html"));
        assert_eq!(tokens[0].kind, TokenKind::Tag);
        assert_eq!(tokens[0].text, "<div");
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].text, ">");

        let tokens = tokenize("</h1>", table.get("html"));
        assert_eq!(tokens[0].kind, TokenKind::Tag);
        assert_eq!(tokens[0].text, "</h1");
    }

    #[test]
    fn test_angle_bracket_without_tag_is_operator() {
        let table = LanguageTable::new();
        // `<` not followed by a letter falls through to the operator rule.
        let tokens = tokenize("< 3", table.get("html"));
        assert_eq!(tokens[0].kind, TokenKind::Operator);

        // outside the markup family `<` is always an operator
        let tokens = tokenize("<div", table.get("js"));
        assert_eq!(tokens[0].kind, TokenKind::Operator);
        assert_eq!(tokens[0].text, "<");
    }

    #[test]
    fn test_operator_runs_are_greedy() {
        let table = LanguageTable::new();
        let tokens = tokenize("a===b", table.get("js"));
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].text, "===");
    }

    #[test]
    fn test_fallback_consumes_one_scalar() {
        let table = LanguageTable::new();
        let tokens = tokenize("héllo", table.get("nonexistent"));
        // `h` is an identifier head, `é` is not in the ASCII word class.
        assert_eq!(concat(&tokens), "héllo");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Default && t.text == "é"));
    }
}
