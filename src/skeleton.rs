//! 目录骨架模块
//!
//! 此模块负责：
//! - 创建中文指南主目录
//! - 在主目录下创建编号章节目录
//! - 已存在的目录保持原样，不清空也不重建

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::LocalizerConfig;
use crate::error::Result;
use crate::localize_error;

/// 骨架创建结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkeletonReport {
    /// 指南主目录
    pub root: PathBuf,
    /// 本次新建的目录
    pub created: Vec<PathBuf>,
    /// 已存在而跳过的目录
    pub existing: Vec<PathBuf>,
}

/// 目录骨架构建器
pub struct SkeletonBuilder<'a> {
    config: &'a LocalizerConfig,
}

impl<'a> SkeletonBuilder<'a> {
    pub fn new(config: &'a LocalizerConfig) -> Self {
        Self { config }
    }

    /// 将要创建的全部目录，主目录在前
    pub fn planned_dirs(&self) -> Vec<PathBuf> {
        let root = self.config.guide_root();
        let mut dirs = vec![root.clone()];
        dirs.extend(self.config.chapter_dirs().iter().map(|name| root.join(name)));
        dirs
    }

    /// 创建目录骨架，可重复执行
    pub fn build(&self) -> Result<SkeletonReport> {
        let mut report = SkeletonReport {
            root: self.config.guide_root(),
            ..Default::default()
        };

        for dir in self.planned_dirs() {
            if ensure_dir(&dir)? {
                report.created.push(dir);
            } else {
                report.existing.push(dir);
            }
        }

        info!(
            "创建目录结构：{}/（新建 {} 个，已存在 {} 个）",
            report.root.display(),
            report.created.len(),
            report.existing.len()
        );
        Ok(report)
    }
}

/// 确保目录存在，返回是否为新建
fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        debug!("目录已存在: {}", dir.display());
        return Ok(false);
    }

    fs::create_dir_all(dir)
        .map_err(|e| localize_error!(file_op, dir.display(), "创建目录", e))?;
    debug!("创建目录: {}", dir.display());
    Ok(true)
}
