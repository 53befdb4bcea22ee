//! # 流水线配置
//!
//! 显式传入流水线入口的配置结构，由命令行参数构造。
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 使用
//! - 由 `commands/build.rs`, `commands/plan.rs` 构造

use crate::batch::collector::{FileCollector, FileOrder};
use crate::batch::partition::DEFAULT_START_INDEX;
use crate::batch::writer::{BatchWriter, RecordFormat, DEFAULT_PREFIX};
use crate::error::{CorpusError, Result};
use crate::text::Decoding;

use std::num::NonZeroUsize;
use std::path::PathBuf;

/// 默认每批文件数
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// 语料批处理配置
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// 源文本目录
    pub source_dir: PathBuf,
    /// 输出目录
    pub output_dir: PathBuf,
    /// 每批文件数
    pub batch_size: NonZeroUsize,
    /// 并行作业数（0 = 自动）
    pub jobs: usize,
    /// 输出格式
    pub format: RecordFormat,
    /// 数组格式是否缩进
    pub pretty: bool,
    /// 输出文件名前缀
    pub prefix: String,
    /// 起始批次编号
    pub start_index: usize,
    /// 文件名匹配模式（逗号分隔）
    pub pattern: String,
    /// 处理顺序
    pub order: FileOrder,
    /// 源文件解码方式
    pub decoding: Decoding,
}

impl CorpusConfig {
    /// 使用默认值创建配置
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: PathBuf::from("."),
            batch_size: NonZeroUsize::new(DEFAULT_BATCH_SIZE).unwrap_or(NonZeroUsize::MIN),
            jobs: 0,
            format: RecordFormat::default(),
            pretty: true,
            prefix: DEFAULT_PREFIX.to_string(),
            start_index: DEFAULT_START_INDEX,
            pattern: "*".to_string(),
            order: FileOrder::default(),
            decoding: Decoding::default(),
        }
    }

    /// 文件收集器
    pub fn collector(&self) -> Result<FileCollector> {
        Ok(FileCollector::new(self.source_dir.clone())
            .with_pattern(&self.pattern)?
            .order(self.order))
    }

    /// 批次写入器
    pub fn writer(&self) -> BatchWriter {
        BatchWriter::new(self.output_dir.clone())
            .with_prefix(&self.prefix)
            .with_format(self.format)
            .pretty(self.pretty)
    }
}

/// 校验批次大小
pub fn parse_batch_size(n: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(n)
        .ok_or_else(|| CorpusError::InvalidArgument("batch size must be at least 1".to_string()))
}

/// 由 `--seed` / `--no-shuffle` 确定处理顺序
pub fn file_order(seed: Option<u64>, no_shuffle: bool) -> FileOrder {
    if no_shuffle {
        FileOrder::Sorted
    } else {
        FileOrder::Shuffled { seed }
    }
}
