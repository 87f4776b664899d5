//! 语言表：语言标签 -> 关键字集合 + 扫描规则开关
//!
//! 表在构造时建好，之后只读；未知标签退化为空关键字集，
//! 不产生任何错误。

use rustc_hash::{FxHashMap, FxHashSet};

const JS_KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "if", "else", "for", "while", "return", "break",
    "continue", "switch", "case", "default", "try", "catch", "finally", "throw", "new", "class",
    "extends", "import", "export", "from", "async", "await", "typeof", "instanceof", "void",
    "delete", "true", "false", "null", "undefined",
];

const TS_EXTRA_KEYWORDS: &[&str] = &[
    "interface", "type", "enum", "namespace", "module", "declare", "abstract", "implements",
    "private", "protected", "public", "static", "readonly", "as", "is", "keyof", "never", "any",
    "unknown",
];

const REACT_EXTRA_KEYWORDS: &[&str] = &[
    "React", "useState", "useEffect", "useContext", "useReducer", "useCallback", "useMemo",
    "useRef",
];

const PY_KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "else", "for", "while", "return", "break", "continue", "try",
    "except", "finally", "raise", "import", "from", "as", "pass", "lambda", "yield", "global",
    "nonlocal", "assert", "del", "with", "async", "await", "True", "False", "None", "and", "or",
    "not", "in", "is",
];

const PHP_KEYWORDS: &[&str] = &[
    "echo", "print", "if", "else", "elseif", "for", "foreach", "while", "do", "switch", "case",
    "default", "break", "continue", "function", "return", "class", "public", "private",
    "protected", "static", "new", "extends", "implements", "interface", "namespace", "use",
    "trait", "abstract", "final", "const", "var", "global", "isset", "unset", "empty", "die",
    "exit", "include", "require", "include_once", "require_once",
];

const HTML_KEYWORDS: &[&str] = &[
    "html", "head", "body", "div", "span", "p", "a", "img", "ul", "ol", "li", "table", "tr",
    "td", "th", "form", "input", "button", "select", "option", "textarea", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "footer", "nav", "main", "section", "article", "aside", "meta",
    "link", "script", "style", "title",
];

const CSS_KEYWORDS: &[&str] = &[
    "color", "background", "background-color", "font-size", "font-family", "font-weight",
    "margin", "padding", "border", "width", "height", "display", "position", "top", "left",
    "right", "bottom", "flex", "grid", "align-items", "justify-content", "text-align",
    "line-height", "overflow", "z-index", "opacity", "transform", "transition", "animation",
    "hover", "active", "focus", "before", "after",
];

/// Per-language scanning rules: the keyword set plus which optional
/// rules (C-family comments, markup tag opens) are attempted at all.
#[derive(Clone, Debug, Default)]
pub struct LanguageSpec {
    keywords: FxHashSet<&'static str>,
    pub line_comments: bool,
    pub markup_tags: bool,
}

impl LanguageSpec {
    fn new(keyword_lists: &[&[&'static str]], line_comments: bool, markup_tags: bool) -> Self {
        let mut keywords = FxHashSet::default();
        for list in keyword_lists {
            keywords.extend(list.iter().copied());
        }
        Self {
            keywords,
            line_comments,
            markup_tags,
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }
}

/// 语言标签 -> LanguageSpec 的只读查找表。
pub struct LanguageTable {
    languages: FxHashMap<&'static str, LanguageSpec>,
    unknown: LanguageSpec,
}

impl LanguageTable {
    pub fn new() -> Self {
        let mut languages = FxHashMap::default();
        languages.insert("js", LanguageSpec::new(&[JS_KEYWORDS], true, false));
        languages.insert(
            "jsx",
            LanguageSpec::new(&[JS_KEYWORDS, REACT_EXTRA_KEYWORDS], true, true),
        );
        languages.insert(
            "ts",
            LanguageSpec::new(&[JS_KEYWORDS, TS_EXTRA_KEYWORDS], true, false),
        );
        languages.insert(
            "tsx",
            LanguageSpec::new(
                &[JS_KEYWORDS, TS_EXTRA_KEYWORDS, REACT_EXTRA_KEYWORDS],
                true,
                true,
            ),
        );
        languages.insert("py", LanguageSpec::new(&[PY_KEYWORDS], false, false));
        languages.insert("php", LanguageSpec::new(&[PHP_KEYWORDS], false, false));
        languages.insert("html", LanguageSpec::new(&[HTML_KEYWORDS], false, true));
        languages.insert("css", LanguageSpec::new(&[CSS_KEYWORDS], false, false));

        Self {
            languages,
            unknown: LanguageSpec::default(),
        }
    }

    /// Unknown tags resolve to an empty spec rather than an error.
    pub fn get(&self, tag: &str) -> &LanguageSpec {
        self.languages.get(tag).unwrap_or(&self.unknown)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.languages.contains_key(tag)
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        let table = LanguageTable::new();
        for tag in ["js", "jsx", "ts", "tsx", "py", "php", "html", "css"] {
            assert!(table.contains(tag), "missing language: {}", tag);
        }
    }

    #[test]
    fn test_keyword_membership_is_exact_case() {
        let table = LanguageTable::new();
        let js = table.get("js");
        assert!(js.is_keyword("if"));
        assert!(!js.is_keyword("If"));
        let py = table.get("py");
        assert!(py.is_keyword("True"));
        assert!(!py.is_keyword("true"));
    }

    #[test]
    fn test_family_flags() {
        let table = LanguageTable::new();
        assert!(table.get("ts").line_comments);
        assert!(!table.get("py").line_comments);
        assert!(table.get("html").markup_tags);
        assert!(table.get("jsx").markup_tags);
        assert!(!table.get("js").markup_tags);
    }

    #[test]
    fn test_unknown_tag_degrades_to_empty_spec() {
        let table = LanguageTable::new();
        let spec = table.get("nonexistent");
        assert!(!spec.is_keyword("if"));
        assert!(!spec.line_comments);
        assert!(!spec.markup_tags);
    }

    #[test]
    fn test_tsx_merges_ts_and_react_keywords() {
        let table = LanguageTable::new();
        let tsx = table.get("tsx");
        assert!(tsx.is_keyword("interface"));
        assert!(tsx.is_keyword("useState"));
        assert!(tsx.is_keyword("const"));
    }
}
