//! 文档加载模块

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::localize_error;

/// 已加载的源文档
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// 命令行给出的原始路径
    pub path: PathBuf,
    /// 完整文本内容
    pub content: String,
}

impl SourceDocument {
    /// 直接从内存文本构建，主要用于测试和库调用
    pub fn from_text<P: Into<PathBuf>>(path: P, content: &str) -> Self {
        Self {
            path: path.into(),
            content: content.to_string(),
        }
    }

    /// 字符数（非字节数）
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// 按换行切分后的行，末尾换行会产生一个空行
    pub fn lines(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }

    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// 写入清单时使用的文件名
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// 加载UTF-8文本文件
///
/// 路径不存在返回 `FileNotFound`，其余读取或解码失败返回 `FileRead`。
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<SourceDocument> {
    let path = path.as_ref();
    debug!("读取文件: {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => localize_error!(not_found, path.display()),
        _ => localize_error!(file_read, path.display(), e),
    })?;

    let document = SourceDocument {
        path: path.to_path_buf(),
        content,
    };
    info!("成功加载内容：{} 字符", document.char_count());

    Ok(document)
}
