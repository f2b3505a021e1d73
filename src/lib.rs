//! Guide Localizer - Markdown指南中文本地化工具库
//!
//! 这个库提供了文档加载、标题结构分析、章节切分、术语词典翻译、
//! 文件名生成、目录骨架创建和分析清单输出等核心功能。

pub mod code_protector;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod filename;
pub mod manifest;
pub mod pipeline;
pub mod skeleton;
pub mod stats;
pub mod structure;
pub mod terminology;
pub mod translator;
pub mod utils;
