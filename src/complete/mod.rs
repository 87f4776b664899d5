//! 自动补全建议
//!
//! 每种语言一组静态建议表：组键按前缀命中时整组给出，
//! 再按子串补齐，最多返回 5 条。

use rustc_hash::FxHashMap;

pub struct SuggestionGroup {
    pub key: &'static str,
    pub entries: &'static [&'static str],
}

const JS_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        key: "console",
        entries: &[
            "console.log()",
            "console.error()",
            "console.warn()",
            "console.info()",
            "console.table()",
        ],
    },
    SuggestionGroup {
        key: "document",
        entries: &[
            "document.getElementById()",
            "document.querySelector()",
            "document.querySelectorAll()",
            "document.createElement()",
        ],
    },
    SuggestionGroup {
        key: "array",
        entries: &[
            "array.map()",
            "array.filter()",
            "array.reduce()",
            "array.forEach()",
            "array.find()",
            "array.findIndex()",
        ],
    },
    SuggestionGroup {
        key: "string",
        entries: &[
            "string.length",
            "string.charAt()",
            "string.indexOf()",
            "string.slice()",
            "string.split()",
            "string.replace()",
        ],
    },
    SuggestionGroup {
        key: "math",
        entries: &[
            "Math.floor()",
            "Math.ceil()",
            "Math.round()",
            "Math.random()",
            "Math.max()",
            "Math.min()",
        ],
    },
];

const JSX_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        key: "react",
        entries: &[
            "React.useState()",
            "React.useEffect()",
            "React.useContext()",
            "React.useReducer()",
            "React.useCallback()",
            "React.useMemo()",
        ],
    },
    SuggestionGroup {
        key: "use",
        entries: &[
            "useState()",
            "useEffect()",
            "useContext()",
            "useReducer()",
            "useCallback()",
            "useMemo()",
            "useRef()",
        ],
    },
];

const TS_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        key: "interface",
        entries: &["interface Name {\n\t\n}", "interface Props {\n\t\n}"],
    },
    SuggestionGroup {
        key: "type",
        entries: &["type Name = ", "type Props = {\n\t\n}"],
    },
    SuggestionGroup {
        key: "enum",
        entries: &["enum Name {\n\t\n}"],
    },
];

const HTML_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        key: "div",
        entries: &["<div></div>", "<div class=\"\">", "<div id=\"\">"],
    },
    SuggestionGroup {
        key: "input",
        entries: &[
            "<input type=\"text\" />",
            "<input type=\"email\" />",
            "<input type=\"password\" />",
            "<input type=\"number\" />",
        ],
    },
    SuggestionGroup {
        key: "button",
        entries: &[
            "<button></button>",
            "<button type=\"submit\">",
            "<button onclick=\"\">",
        ],
    },
];

const CSS_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        key: "display",
        entries: &[
            "display: flex;",
            "display: grid;",
            "display: block;",
            "display: inline-block;",
            "display: none;",
        ],
    },
    SuggestionGroup {
        key: "position",
        entries: &[
            "position: relative;",
            "position: absolute;",
            "position: fixed;",
            "position: sticky;",
        ],
    },
    SuggestionGroup {
        key: "flex",
        entries: &[
            "flex-direction: row;",
            "flex-direction: column;",
            "justify-content: center;",
            "align-items: center;",
        ],
    },
];

const PY_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        key: "def",
        entries: &["def function_name():\n\t", "def __init__(self):\n\t"],
    },
    SuggestionGroup {
        key: "class",
        entries: &["class ClassName:\n\t", "class ClassName(object):\n\t"],
    },
    SuggestionGroup {
        key: "import",
        entries: &[
            "import ",
            "from module import ",
            "import numpy as np",
            "import pandas as pd",
        ],
    },
];

const PHP_GROUPS: &[SuggestionGroup] = &[
    SuggestionGroup {
        key: "function",
        entries: &[
            "function functionName() {\n\t\n}",
            "public function ",
            "private function ",
            "protected function ",
        ],
    },
    SuggestionGroup {
        key: "class",
        entries: &["class ClassName {\n\t\n}", "class ClassName extends "],
    },
    SuggestionGroup {
        key: "echo",
        entries: &["echo \"\";", "echo $variable;"],
    },
];

const MAX_SUGGESTIONS: usize = 5;
const MIN_WORD_LEN: usize = 2;

/// 语言标签 -> 建议组 的只读查找表。
pub struct SuggestionTable {
    languages: FxHashMap<&'static str, &'static [SuggestionGroup]>,
}

impl SuggestionTable {
    pub fn new() -> Self {
        let mut languages = FxHashMap::default();
        languages.insert("js", JS_GROUPS);
        languages.insert("jsx", JSX_GROUPS);
        languages.insert("ts", TS_GROUPS);
        languages.insert("html", HTML_GROUPS);
        languages.insert("css", CSS_GROUPS);
        languages.insert("py", PY_GROUPS);
        languages.insert("php", PHP_GROUPS);
        Self { languages }
    }

    /// Suggestions for the word under the cursor, capped at five.
    ///
    /// Group keys matched by prefix contribute their whole group first,
    /// then any entry containing the word is appended without duplicates.
    /// Matching is case-insensitive; words shorter than two characters
    /// produce nothing.
    pub fn suggest(&self, language: &str, word: &str) -> Vec<&'static str> {
        if word.chars().count() < MIN_WORD_LEN {
            return Vec::new();
        }
        let Some(groups) = self.languages.get(language) else {
            return Vec::new();
        };

        let needle = word.to_lowercase();
        let mut matches: Vec<&'static str> = Vec::new();

        for group in *groups {
            if group.key.to_lowercase().starts_with(&needle) {
                for &entry in group.entries {
                    if !matches.contains(&entry) {
                        matches.push(entry);
                    }
                }
            }
        }

        for group in *groups {
            for &entry in group.entries {
                if entry.to_lowercase().contains(&needle) && !matches.contains(&entry) {
                    matches.push(entry);
                }
            }
        }

        matches.truncate(MAX_SUGGESTIONS);
        matches
    }
}

impl Default for SuggestionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The word being typed: the run of characters before `cursor` (a byte
/// offset) up to the nearest separator.
pub fn current_word(text: &str, cursor: usize) -> &str {
    let mut end = cursor.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let before = &text[..end];

    let start = before
        .char_indices()
        .rev()
        .find(|&(_, c)| is_word_separator(c))
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    &before[start..]
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '(' | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '<'
                | '>'
                | '='
                | '+'
                | '-'
                | '*'
                | '/'
                | '&'
                | '|'
                | '!'
                | '?'
                | ':'
                | ';'
                | ','
                | '.'
                | '"'
                | '\''
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_suggest_nothing() {
        let table = SuggestionTable::new();
        assert!(table.suggest("js", "c").is_empty());
        assert!(table.suggest("js", "").is_empty());
    }

    #[test]
    fn test_prefix_match_returns_whole_group_capped() {
        let table = SuggestionTable::new();
        let suggestions = table.suggest("js", "con");
        assert_eq!(suggestions.len(), 5);
        assert!(suggestions.contains(&"console.log()"));
    }

    #[test]
    fn test_substring_match_fills_in() {
        let table = SuggestionTable::new();
        let suggestions = table.suggest("js", "random");
        assert_eq!(suggestions, vec!["Math.random()"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let table = SuggestionTable::new();
        let suggestions = table.suggest("js", "MATH");
        assert!(suggestions.contains(&"Math.floor()"));
    }

    #[test]
    fn test_unknown_language_suggests_nothing() {
        let table = SuggestionTable::new();
        assert!(table.suggest("nonexistent", "console").is_empty());
    }

    #[test]
    fn test_current_word_extraction() {
        assert_eq!(current_word("let count", 9), "count");
        assert_eq!(current_word("foo.ba", 6), "ba");
        assert_eq!(current_word("a(b", 3), "b");
        assert_eq!(current_word("word", 0), "");
        let text = "x = naïve";
        assert_eq!(current_word(text, text.len()), "naïve");
    }
}
