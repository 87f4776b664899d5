//! Syntax theme palettes.
//!
//! One immutable table owns every theme; the renderer gets a `Palette` by
//! tag and never redeclares colors. A kind missing from a palette falls
//! back to that palette's default color.

pub mod color;

use ratatui::style::Color;
use rustc_hash::FxHashMap;

use crate::syntax::TokenKind;

pub use color::{detect_color_support, downgrade, ColorSupport};

/// Theme used when a tag is unknown.
pub const DEFAULT_THEME: &str = "cyberpunk";

/// Colors of one theme, keyed by token kind.
///
/// `default_fg` is the required fallback entry; `variable_fg` is the color
/// lowercase identifiers render with.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: FxHashMap<TokenKind, Color>,
    pub default_fg: Color,
    pub variable_fg: Color,
}

impl Palette {
    pub fn new(
        colors: FxHashMap<TokenKind, Color>,
        default_fg: Color,
        variable_fg: Color,
    ) -> Self {
        Self {
            colors,
            default_fg,
            variable_fg,
        }
    }

    /// Look up the color for a kind, falling back to `default_fg` for any
    /// kind the palette does not name.
    pub fn color(&self, kind: TokenKind) -> Color {
        self.colors.get(&kind).copied().unwrap_or(self.default_fg)
    }
}

/// 主题标签 -> Palette 的只读查找表。
pub struct ThemeTable {
    themes: FxHashMap<&'static str, Palette>,
}

struct PaletteSpec {
    keyword: u32,
    string: u32,
    number: u32,
    comment: u32,
    function: u32,
    tag: u32,
    operator: u32,
    variable: u32,
    default: u32,
}

fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

impl PaletteSpec {
    fn build(&self) -> Palette {
        let mut colors = FxHashMap::default();
        colors.insert(TokenKind::Keyword, rgb(self.keyword));
        colors.insert(TokenKind::String, rgb(self.string));
        colors.insert(TokenKind::Number, rgb(self.number));
        colors.insert(TokenKind::Comment, rgb(self.comment));
        colors.insert(TokenKind::Function, rgb(self.function));
        colors.insert(TokenKind::Tag, rgb(self.tag));
        colors.insert(TokenKind::Operator, rgb(self.operator));
        Palette {
            colors,
            default_fg: rgb(self.default),
            variable_fg: rgb(self.variable),
        }
    }
}

impl ThemeTable {
    pub fn new() -> Self {
        let mut themes = FxHashMap::default();
        themes.insert(
            "cyberpunk",
            PaletteSpec {
                keyword: 0xff0080,
                string: 0x00ff41,
                number: 0x00ffff,
                comment: 0x666666,
                function: 0xfffb00,
                tag: 0xff0080,
                operator: 0xff0080,
                variable: 0xfffb00,
                default: 0xffffff,
            }
            .build(),
        );
        themes.insert(
            "neon",
            PaletteSpec {
                keyword: 0xff00c8,
                string: 0xfffb00,
                number: 0x00fff7,
                comment: 0x666666,
                function: 0x39ff14,
                tag: 0xff00c8,
                operator: 0xff00c8,
                variable: 0x39ff14,
                default: 0xffffff,
            }
            .build(),
        );
        themes.insert(
            "matrix",
            PaletteSpec {
                keyword: 0x00ff41,
                string: 0x00ff41,
                number: 0x00ff41,
                comment: 0x003300,
                function: 0x00ff41,
                tag: 0x00ff41,
                operator: 0x00ff41,
                variable: 0x00ff41,
                default: 0x00ff41,
            }
            .build(),
        );
        themes.insert(
            "blade runner",
            PaletteSpec {
                keyword: 0xff6600,
                string: 0xfffb00,
                number: 0xff0080,
                comment: 0x666666,
                function: 0xff6600,
                tag: 0xff6600,
                operator: 0xff6600,
                variable: 0xff6600,
                default: 0xffffff,
            }
            .build(),
        );
        themes.insert(
            "neon-orange",
            PaletteSpec {
                keyword: 0xff9500,
                string: 0xffe066,
                number: 0x4fd3ff,
                comment: 0x666666,
                function: 0x4fd3ff,
                tag: 0xff9500,
                operator: 0xff9500,
                variable: 0x4fd3ff,
                default: 0xffffff,
            }
            .build(),
        );
        themes.insert(
            "cyan-red",
            PaletteSpec {
                keyword: 0xff0040,
                string: 0x00ffff,
                number: 0x00ffff,
                comment: 0x666666,
                function: 0x00ffff,
                tag: 0xff0040,
                operator: 0xff0040,
                variable: 0x00ffff,
                default: 0xffffff,
            }
            .build(),
        );
        themes.insert(
            "gold-red",
            PaletteSpec {
                keyword: 0xff0040,
                string: 0xffd700,
                number: 0xffd700,
                comment: 0x666666,
                function: 0xffd700,
                tag: 0xff0040,
                operator: 0xff0040,
                variable: 0xffd700,
                default: 0xffffff,
            }
            .build(),
        );
        themes.insert(
            "gold-red-cyan",
            PaletteSpec {
                keyword: 0xff0040,
                string: 0xffd700,
                number: 0x00ffff,
                comment: 0x666666,
                function: 0x00ffff,
                tag: 0xff0040,
                operator: 0xff0040,
                variable: 0x00ffff,
                default: 0xffffff,
            }
            .build(),
        );
        themes.insert(
            "neon-genesis",
            PaletteSpec {
                keyword: 0xa020f0,
                string: 0x00ff00,
                number: 0xff1493,
                comment: 0x4b0082,
                function: 0xffd700,
                tag: 0xa020f0,
                operator: 0xff1493,
                variable: 0xffd700,
                default: 0xffffff,
            }
            .build(),
        );

        Self { themes }
    }

    /// Unknown tags fall back to the cyberpunk palette.
    pub fn get(&self, tag: &str) -> &Palette {
        self.themes
            .get(tag)
            .unwrap_or_else(|| &self.themes[DEFAULT_THEME])
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.themes.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.keys().copied()
    }
}

impl Default for ThemeTable {
    fn default() -> Self {
        Self::new()
    }
}
