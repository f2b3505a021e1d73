//! 统一错误处理模块
//!
//! 提供Guide Localizer项目的统一错误类型定义和处理机制

// 标准库导入
use std::fmt;

// 本地模块导入
use crate::constants::messages;

/// Guide Localizer 统一错误类型
///
/// 所有错误对本次运行都是终止性的，不做重试
#[derive(Debug)]
pub enum LocalizeError {
    /// 命令行参数数量或格式错误
    Usage {
        /// 使用说明或解析器给出的提示
        message: String,
    },

    /// 输入文件不存在
    FileNotFound {
        /// 文件路径
        path: String,
    },

    /// 文件存在但无法读取或解码
    FileRead {
        /// 文件路径
        path: String,
        /// 底层错误信息
        source: String,
    },

    /// 目录创建、清单写入等文件操作错误
    FileOperation {
        /// 文件路径
        path: String,
        /// 操作类型（创建目录、写入等）
        operation: String,
        /// 底层错误信息
        source: String,
    },

    /// 清单序列化错误
    Serialization {
        /// 具体错误信息
        details: String,
    },

    /// 术语规则编译错误
    Pattern {
        /// 出错的术语
        term: String,
        /// 错误详情
        details: String,
    },
}

impl LocalizeError {
    /// 进程退出码
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for LocalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizeError::Usage { message } => {
                write!(f, "{}", message)
            }
            LocalizeError::FileNotFound { path } => {
                write!(f, "{}：{}", messages::FILE_NOT_FOUND, path)
            }
            LocalizeError::FileRead { path, source } => {
                write!(f, "{} [{}]: {}", messages::FILE_READ_ERROR, path, source)
            }
            LocalizeError::FileOperation { path, operation, source } => {
                write!(f, "文件{}操作失败 [{}]: {}", operation, path, source)
            }
            LocalizeError::Serialization { details } => {
                write!(f, "清单序列化失败: {}", details)
            }
            LocalizeError::Pattern { term, details } => {
                write!(f, "术语规则编译失败 [{}]: {}", term, details)
            }
        }
    }
}

impl std::error::Error for LocalizeError {}

/// Guide Localizer 结果类型别名
pub type Result<T> = std::result::Result<T, LocalizeError>;

/// 便捷的错误创建宏
#[macro_export]
macro_rules! localize_error {
    (usage, $msg:expr) => {
        $crate::error::LocalizeError::Usage {
            message: $msg.to_string(),
        }
    };
    (not_found, $path:expr) => {
        $crate::error::LocalizeError::FileNotFound {
            path: $path.to_string(),
        }
    };
    (file_read, $path:expr, $source:expr) => {
        $crate::error::LocalizeError::FileRead {
            path: $path.to_string(),
            source: $source.to_string(),
        }
    };
    (file_op, $path:expr, $op:expr, $source:expr) => {
        $crate::error::LocalizeError::FileOperation {
            path: $path.to_string(),
            operation: $op.to_string(),
            source: $source.to_string(),
        }
    };
    (pattern, $term:expr, $details:expr) => {
        $crate::error::LocalizeError::Pattern {
            term: $term.to_string(),
            details: $details.to_string(),
        }
    };
}

/// 从serde_json::Error转换为LocalizeError
impl From<serde_json::Error> for LocalizeError {
    fn from(error: serde_json::Error) -> Self {
        LocalizeError::Serialization {
            details: error.to_string(),
        }
    }
}

/// 从regex::Error转换为LocalizeError
impl From<regex::Error> for LocalizeError {
    fn from(error: regex::Error) -> Self {
        LocalizeError::Pattern {
            term: "unknown".to_string(),
            details: error.to_string(),
        }
    }
}
