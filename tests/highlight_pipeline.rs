//! End-to-end: file on disk -> type detection -> tokenize -> projection.

use std::fs;
use std::io::Write;

use mxcode::render::{highlight_lines, plain_lines, styled_spans, token_color};
use mxcode::store::{EditorState, FileType};
use mxcode::syntax::{tokenize, LanguageTable, TokenKind};
use mxcode::theme::ThemeTable;

const DEMO_JS: &str = "// demo\nconst greet = (name) => {\n  return `hi ${name}`; // 42\n};\ngreet(\"neo\");\n";

#[test]
fn file_to_colored_spans() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.js");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(DEMO_JS.as_bytes()).unwrap();

    let source = fs::read_to_string(&path).unwrap();
    let file_type = FileType::from_name(path.file_name().unwrap().to_str().unwrap());
    assert_eq!(file_type, FileType::Js);

    let languages = LanguageTable::new();
    let themes = ThemeTable::new();
    let spec = languages.get(file_type.tag());

    let tokens = tokenize(&source, spec);
    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, source);

    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Comment && t.text == "// demo"));
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Keyword && t.text == "const"));
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Function && t.text == "greet"));

    let palette = themes.get("cyberpunk");
    let spans = styled_spans(&tokens, palette);
    assert_eq!(spans.len(), tokens.len());
    for (token, span) in tokens.iter().zip(&spans) {
        assert_eq!(span.style.fg, Some(token_color(palette, token)));
    }
}

#[test]
fn store_drives_the_projection() {
    let languages = LanguageTable::new();
    let themes = ThemeTable::new();

    let mut state = EditorState::new();
    let id = state.open_file("game.py", "def play():\n    return 1\n".to_string());
    state.set_theme("matrix");

    let file = state.file(id).unwrap();
    let content = file.content.clone();
    let spec = languages.get(file.file_type.tag());
    let palette = themes.get(&state.settings.theme);

    let lines = highlight_lines(&content, spec, palette);
    assert_eq!(lines.len(), 3);

    // matrix renders keywords in its single green
    let keyword_color = lines[0].spans[0].style.fg.unwrap();
    assert_eq!(
        keyword_color,
        palette.color(TokenKind::Keyword)
    );

    // highlighting off falls back to plain default-colored lines
    state.set_syntax_highlighting(false);
    if !state.settings.syntax_highlighting {
        let plain = plain_lines(&content, palette);
        assert!(plain
            .iter()
            .flat_map(|l| l.spans.iter())
            .all(|s| s.style.fg == Some(palette.default_fg)));
    }
}

#[test]
fn every_theme_projects_every_kind() {
    let themes = ThemeTable::new();
    let languages = LanguageTable::new();
    let tokens = tokenize("<p>const x = 'y' // 1.5</p>", languages.get("tsx"));

    for tag in themes.tags() {
        let palette = themes.get(tag);
        for token in &tokens {
            // total: every token gets some color under every theme
            let _ = token_color(palette, token);
        }
    }
}
