//! # 统一错误处理模块
//!
//! 定义 txt2corpus 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// txt2corpus 统一错误类型
#[derive(Error, Debug)]
pub enum CorpusError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Source directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 序列化错误
    // ─────────────────────────────────────────────────────────────
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数与运行时错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(String),

    #[error("{failed} of {total} batches could not be written")]
    WriteFailures { failed: usize, total: usize },
}

impl CorpusError {
    /// 构造读取错误
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        CorpusError::FileReadError {
            path: path.display().to_string(),
            source,
        }
    }

    /// 构造写入错误
    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        CorpusError::WriteError {
            path: path.display().to_string(),
            source,
        }
    }

    /// 错误描述及其完整 source 链，用于终端报告
    pub fn report(&self) -> String {
        let mut msg = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            msg.push_str(&format!("\n  caused by: {}", err));
            cause = err.source();
        }
        msg
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_report_includes_cause() {
        let err = CorpusError::read(
            Path::new("docs/a.txt"),
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        let report = err.report();
        assert!(report.starts_with("Failed to read file: docs/a.txt"));
        assert!(report.contains("caused by: stream did not contain valid UTF-8"));
    }

    #[test]
    fn test_write_failures_message() {
        let err = CorpusError::WriteFailures { failed: 1, total: 3 };
        assert_eq!(err.to_string(), "1 of 3 batches could not be written");
    }
}
