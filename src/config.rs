//! 配置管理模块
//!
//! 提供CLI参数解析和本地化输出配置管理功能

// 标准库导入
use std::path::{Path, PathBuf};

// 第三方crate导入
use clap::Parser;

// 本地模块导入
use crate::constants::output_config;

/// 本地化输出配置结构体
///
/// 默认值即为固定的输出布局，命令行不提供修改入口。
/// 支持Builder模式，供库调用方和测试重定向输出位置。
///
/// # Examples
///
/// ```rust
/// use guide_localizer::config::LocalizerConfig;
///
/// let config = LocalizerConfig::new().with_base_dir("/tmp/out");
/// assert!(config.guide_root().ends_with("claude-code-guide-zh"));
/// ```
#[derive(Debug, Clone)]
pub struct LocalizerConfig {
    /// 输出根目录
    base_dir: PathBuf,
    /// 中文指南主目录名
    guide_dir_name: String,
    /// 章节占位目录
    chapter_dirs: Vec<String>,
    /// 分析清单文件名
    manifest_file_name: String,
}

impl LocalizerConfig {
    /// 创建新的配置实例
    ///
    /// 返回固定布局：
    /// - 根目录: `docs`
    /// - 主目录: `claude-code-guide-zh`
    /// - 六个编号章节目录
    /// - 清单: `docs/claude-guide-analysis.json`
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from(output_config::DEFAULT_BASE_DIR),
            guide_dir_name: output_config::GUIDE_DIR_NAME.to_string(),
            chapter_dirs: output_config::CHAPTER_DIRS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            manifest_file_name: output_config::MANIFEST_FILE_NAME.to_string(),
        }
    }

    /// 获取输出根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 获取指南主目录完整路径
    pub fn guide_root(&self) -> PathBuf {
        self.base_dir.join(&self.guide_dir_name)
    }

    /// 获取章节目录名
    pub fn chapter_dirs(&self) -> &[String] {
        &self.chapter_dirs
    }

    /// 获取清单文件完整路径
    pub fn manifest_path(&self) -> PathBuf {
        self.base_dir.join(&self.manifest_file_name)
    }

    /// 设置输出根目录
    pub fn with_base_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// 设置指南主目录名
    pub fn with_guide_dir_name(mut self, name: &str) -> Self {
        self.guide_dir_name = name.to_string();
        self
    }

    /// 设置清单文件名
    pub fn with_manifest_file_name(mut self, name: &str) -> Self {
        self.manifest_file_name = name.to_string();
        self
    }
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// CLI参数结构
#[derive(Parser, Debug)]
#[command(author, version, about = "Markdown指南中文本地化工具 - 解析结构、术语翻译、生成目录与分析清单", long_about = None)]
pub struct Cli {
    /// 原始Markdown文件路径
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 静默模式 (仅输出错误)
    #[arg(short, long)]
    pub quiet: bool,

    /// 显示运行统计
    #[arg(long)]
    pub stats: bool,
}
