//! 分析清单模块
//!
//! 将一次运行的标题结构、中文结构和术语表写成单个JSON文件。
//! 缩进两格，非ASCII字符原样写出。

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::localize_error;
use crate::structure::HeaderRecord;
use crate::terminology::Dictionary;

/// 中文结构记录，与标题记录一一对应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChineseStructureRecord {
    pub level: usize,
    pub original_title: String,
    pub chinese_title: String,
    pub filename: String,
}

/// 清单内容
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub original_file: String,
    pub total_headers: usize,
    pub structure: &'a [HeaderRecord],
    pub chinese_structure: &'a [ChineseStructureRecord],
    pub terminology: &'a Dictionary,
}

impl<'a> Manifest<'a> {
    pub fn new(
        original_file: String,
        structure: &'a [HeaderRecord],
        chinese_structure: &'a [ChineseStructureRecord],
        terminology: &'a Dictionary,
    ) -> Self {
        Self {
            original_file,
            total_headers: structure.len(),
            structure,
            chinese_structure,
            terminology,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 写入清单，已存在的文件直接覆盖
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| localize_error!(file_op, parent.display(), "创建目录", e))?;
        }
        fs::write(path, &json).map_err(|e| localize_error!(file_op, path.display(), "写入", e))?;

        debug!("写入清单: {} ({} 字节)", path.display(), json.len());
        Ok(())
    }
}
