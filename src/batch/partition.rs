//! # 批次划分
//!
//! 将（已打乱的）文件列表按固定大小切分为带编号的批次。
//!
//! ## 功能
//! - 惰性迭代，从位置 0 起每次前进 `batch_size`，不丢弃任何文件
//! - 批次编号从 `start_index`（默认 1）开始逐一递增
//! - 除最后一批外每批恰好 `batch_size` 个文件
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 与 `commands/plan.rs` 调用

use std::num::NonZeroUsize;
use std::path::PathBuf;

/// 默认起始批次编号
pub const DEFAULT_START_INDEX: usize = 1;

/// 一个批次：编号 + 批内文件（保持输入顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    pub index: usize,
    pub files: &'a [PathBuf],
}

impl Batch<'_> {
    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// 批次划分迭代器
#[derive(Debug, Clone)]
pub struct Partitioner<'a> {
    files: &'a [PathBuf],
    batch_size: usize,
    cursor: usize,
    next_index: usize,
}

impl<'a> Partitioner<'a> {
    pub fn new(files: &'a [PathBuf], batch_size: NonZeroUsize, start_index: usize) -> Self {
        Self {
            files,
            batch_size: batch_size.get(),
            cursor: 0,
            next_index: start_index,
        }
    }
}

impl<'a> Iterator for Partitioner<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.files.len() {
            return None;
        }

        let end = (self.cursor + self.batch_size).min(self.files.len());
        let batch = Batch {
            index: self.next_index,
            files: &self.files[self.cursor..end],
        };

        self.cursor = end;
        self.next_index += 1;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.files.len() - self.cursor;
        let n = remaining.div_ceil(self.batch_size);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Partitioner<'_> {}
