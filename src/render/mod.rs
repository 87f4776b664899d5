//! 着色投影：把 Token 序列映射成渲染面的 (文本, 颜色) 片段
//!
//! 顺序保持不变；调色板没有的类别用默认色。本模块不做任何布局，
//! 只产出 ratatui 的 Span/Line 供渲染面摆放。

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::syntax::{tokenize, LanguageSpec, Token, TokenKind};
use crate::theme::Palette;

/// Color of a single token under a palette.
///
/// Identifiers are refined by shape: a capitalized identifier renders with
/// the function color, everything else with the palette's variable color.
pub fn token_color(palette: &Palette, token: &Token) -> Color {
    match token.kind {
        TokenKind::Identifier => {
            let capitalized = token
                .text
                .chars()
                .next()
                .is_some_and(char::is_uppercase);
            if capitalized {
                palette.color(TokenKind::Function)
            } else {
                palette.variable_fg
            }
        }
        kind => palette.color(kind),
    }
}

/// One styled span per token, in token order.
pub fn styled_spans(tokens: &[Token], palette: &Palette) -> Vec<Span<'static>> {
    tokens
        .iter()
        .map(|token| {
            Span::styled(
                token.text.to_string(),
                Style::default().fg(token_color(palette, token)),
            )
        })
        .collect()
}

/// Tokenize and project a whole buffer into per-line spans.
///
/// A token whose text contains newlines (block comments, unterminated
/// strings) is split across lines; the split never alters the text.
pub fn highlight_lines(text: &str, lang: &LanguageSpec, palette: &Palette) -> Vec<Line<'static>> {
    let tokens = tokenize(text, lang);
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for token in &tokens {
        let style = Style::default().fg(token_color(palette, token));
        let mut pieces = token.text.split('\n');

        if let Some(first) = pieces.next() {
            if !first.is_empty() {
                current.push(Span::styled(first.to_string(), style));
            }
        }
        for piece in pieces {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_string(), style));
            }
        }
    }

    lines.push(Line::from(current));
    lines
}

/// Rendering with syntax highlighting switched off: default color only.
pub fn plain_lines(text: &str, palette: &Palette) -> Vec<Line<'static>> {
    let style = Style::default().fg(palette.default_fg);
    text.split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}
