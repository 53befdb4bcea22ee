//! # 运行结果统计数据模型
//!
//! 记录每个批次的输出文件与写入状态，以及整次运行的汇总。
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 生成
//! - 被 `commands/build.rs`, `batch/manifest.rs` 使用

use std::path::PathBuf;

/// 单个批次的写入状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchStatus {
    /// 写入成功
    Written,
    /// 写入失败（错误描述）
    Failed(String),
}

/// 单个批次的处理报告
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// 批次编号
    pub index: usize,
    /// 输出文件路径
    pub output: PathBuf,
    /// 批次内源文件（保持批内顺序）
    pub sources: Vec<PathBuf>,
    /// 写入状态
    pub status: BatchStatus,
}

impl BatchReport {
    pub fn is_written(&self) -> bool {
        self.status == BatchStatus::Written
    }
}

/// 整次运行的汇总
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 枚举到的源文件总数
    pub total_files: usize,
    /// 已读取并转换的文件数
    pub processed_files: usize,
    /// 每个批次的报告（按批次顺序）
    pub batches: Vec<BatchReport>,
}

impl RunSummary {
    /// 成功写入的批次数
    pub fn written(&self) -> usize {
        self.batches.iter().filter(|b| b.is_written()).count()
    }

    /// 写入失败的批次
    pub fn failures(&self) -> impl Iterator<Item = &BatchReport> {
        self.batches.iter().filter(|b| !b.is_written())
    }

    /// 成功写入文件中的记录总数
    pub fn records_written(&self) -> usize {
        self.batches
            .iter()
            .filter(|b| b.is_written())
            .map(|b| b.sources.len())
            .sum()
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
