//! mxcode - Matrix 风格代码编辑器核心库
//!
//! 模块结构：
//! - syntax: 词法扫描核心（Token, LanguageTable, tokenize）
//! - theme: 语法主题调色板（ThemeTable, Palette）
//! - render: 着色投影（Token -> 带颜色的 Span/Line）
//! - store: 编辑器状态（打开文件、编辑器设置、声音偏好）
//! - complete: 自动补全建议表
//! - snippets: 代码片段注册表

pub mod complete;
pub mod logging;
pub mod render;
pub mod snippets;
pub mod store;
pub mod syntax;
pub mod theme;
