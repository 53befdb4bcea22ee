//! # 数据模型模块
//!
//! 定义带行号文档、输出记录以及运行统计的数据模型。
//!
//! ## 依赖关系
//! - 被 `text/`, `batch/` 和 `commands/` 使用
//! - 子模块: record, summary

pub mod record;
pub mod summary;

pub use record::{NumberedDocument, OutputRecord};
pub use summary::{BatchReport, BatchStatus, RunSummary};
