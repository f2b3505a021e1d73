/// 本地化输出常量
///
/// 该文件定义了输出目录布局、文件命名规则等固定配置，方便统一管理和维护

/// 输出目录布局配置
pub mod output_config {
    /// 输出根目录（相对于当前工作目录）
    pub const DEFAULT_BASE_DIR: &str = "docs";

    /// 中文指南主目录名
    pub const GUIDE_DIR_NAME: &str = "claude-code-guide-zh";

    /// 章节占位目录，按编号顺序创建
    pub const CHAPTER_DIRS: &[&str] = &[
        "01-introduction",
        "02-core-features",
        "03-advanced-features",
        "04-best-practices",
        "05-practical-examples",
        "06-reference",
    ];

    /// 分析清单文件名，与主目录同级
    pub const MANIFEST_FILE_NAME: &str = "claude-guide-analysis.json";
}

/// 文件命名配置
pub mod filename_config {
    /// 一级标题文件前缀
    pub const CHAPTER_PREFIX: &str = "chapter-";

    /// 二级标题文件前缀
    pub const SECTION_PREFIX: &str = "section-";

    /// 三级及以下标题文件前缀
    pub const SUBSECTION_PREFIX: &str = "subsection-";

    /// 输出文件扩展名
    pub const FILE_SUFFIX: &str = ".md";
}

/// 输入文件配置
pub mod input_config {
    /// 被视为Markdown的扩展名
    pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

    /// 标题标记字符
    pub const HEADER_MARKER: char = '#';
}

/// 提示消息常量
pub mod messages {
    /// 参数错误时的使用说明
    pub const USAGE: &str = "使用方法：guide-localizer <原始markdown文件>";

    /// 文件不存在
    pub const FILE_NOT_FOUND: &str = "文件不存在";

    /// 文件读取失败
    pub const FILE_READ_ERROR: &str = "加载文件失败";
}

/// 获取章节前缀
pub fn prefix_for_level(level: usize) -> &'static str {
    match level {
        1 => filename_config::CHAPTER_PREFIX,
        2 => filename_config::SECTION_PREFIX,
        _ => filename_config::SUBSECTION_PREFIX,
    }
}

/// 判断扩展名是否为Markdown
pub fn is_markdown_extension(ext: &str) -> bool {
    input_config::MARKDOWN_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}
