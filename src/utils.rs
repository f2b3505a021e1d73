use std::path::Path;

use tracing::warn;

use crate::constants::is_markdown_extension;
use crate::error::Result;
use crate::localize_error;

/// 初始化日志系统
pub fn init_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// 验证输入文件
pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(localize_error!(not_found, path.display()));
    }

    if !path.is_file() {
        return Err(localize_error!(file_read, path.display(), "输入路径不是文件"));
    }

    match path.extension() {
        Some(ext) if is_markdown_extension(&ext.to_string_lossy()) => {}
        Some(ext) => warn!("⚠️  文件扩展名不是Markdown: {}", ext.to_string_lossy()),
        None => warn!("⚠️  文件没有扩展名: {}", path.display()),
    }

    Ok(())
}
