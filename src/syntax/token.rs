use serde::{Deserialize, Serialize};

/// 词法单元类别
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    String,
    Number,
    Comment,
    Function,
    Tag,
    Operator,
    Identifier,
    Default,
}

/// A classified span of source text, borrowing from the input buffer.
///
/// Tokens are emitted left to right and cover the input exactly once:
/// concatenating `text` over a token sequence reconstructs the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}
