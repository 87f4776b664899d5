//mxcode/src/main.rs
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crossterm::queue;
use crossterm::style::{Color as CtColor, Print, ResetColor, SetForegroundColor};

use mxcode::render::{highlight_lines, plain_lines};
use mxcode::store::FileType;
use mxcode::syntax::{tokenize, LanguageTable};
use mxcode::theme::{detect_color_support, downgrade, ThemeTable, DEFAULT_THEME};

fn main() -> io::Result<()> {
    let _logging = mxcode::logging::init();

    let mut theme_tag = String::from(DEFAULT_THEME);
    let mut dump_tokens = false;
    let mut plain = false;
    let mut path: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" => {
                if let Some(value) = args.next() {
                    theme_tag = value;
                }
            }
            "--tokens" => dump_tokens = true,
            "--plain" => plain = true,
            _ => path = Some(arg),
        }
    }

    let Some(path) = path else {
        eprintln!("usage: mxcode [--theme <tag>] [--tokens] [--plain] <file>");
        std::process::exit(2);
    };

    let source = fs::read_to_string(&path)?;
    let file_name = Path::new(&path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path.as_str());
    let file_type = FileType::from_name(file_name);
    tracing::info!(file = file_name, language = file_type.tag(), "highlighting");

    let languages = LanguageTable::new();
    let spec = languages.get(file_type.tag());

    if dump_tokens {
        let tokens = tokenize(&source, spec);
        let json = serde_json::to_string_pretty(&tokens).map_err(io::Error::other)?;
        println!("{}", json);
        return Ok(());
    }

    let themes = ThemeTable::new();
    let palette = themes.get(&theme_tag);
    let support = detect_color_support();

    let lines = if plain {
        plain_lines(&source, palette)
    } else {
        highlight_lines(&source, spec, palette)
    };

    let mut stdout = io::stdout();
    for line in &lines {
        for span in &line.spans {
            match span.style.fg {
                Some(color) => queue!(
                    stdout,
                    SetForegroundColor(to_crossterm(downgrade(color, support))),
                    Print(span.content.as_ref())
                )?,
                None => queue!(stdout, Print(span.content.as_ref()))?,
            }
        }
        queue!(stdout, ResetColor, Print("\n"))?;
    }
    stdout.flush()?;

    Ok(())
}

fn to_crossterm(color: ratatui::style::Color) -> CtColor {
    use ratatui::style::Color;
    match color {
        Color::Rgb(r, g, b) => CtColor::Rgb { r, g, b },
        Color::Indexed(i) => CtColor::AnsiValue(i),
        Color::Reset => CtColor::Reset,
        _ => CtColor::White,
    }
}
