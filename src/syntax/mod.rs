//! 语法着色核心：单遍扫描词法器 + 语言表
//!
//! 职责：
//! - 把源文本切成带分类的连续 Token（按序拼接可还原原文）
//! - 按语言标签选择关键字表和注释/标签规则

pub mod language;
pub mod token;
pub mod tokenizer;

pub use language::{LanguageSpec, LanguageTable};
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
