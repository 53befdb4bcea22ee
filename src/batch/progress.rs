//! # 进度报告
//!
//! 以观察者接口报告流水线进度，与线程池实现解耦。
//! 所有回调都在协调线程上调用，且不会失败。
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条, `utils/output.rs` 打印消息

use crate::error::CorpusError;
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::path::Path;

/// 进度观察者
pub trait ProgressObserver {
    /// 流水线开始
    fn on_start(&mut self, _total_files: usize, _total_batches: usize) {}

    /// 已完成文件数更新（单调递增）
    fn on_progress(&mut self, completed: usize, total: usize);

    /// 批次写入成功
    fn on_batch_written(&mut self, _index: usize, _path: &Path, _records: usize) {}

    /// 批次写入失败
    fn on_batch_failed(&mut self, _index: usize, _error: &CorpusError) {}

    /// 流水线结束（成功或失败都会调用）
    fn on_finish(&mut self) {}
}

/// 静默观察者
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressObserver for SilentProgress {
    fn on_progress(&mut self, _completed: usize, _total: usize) {}
}

/// 终端进度条观察者
#[derive(Default)]
pub struct BarProgress {
    pb: Option<ProgressBar>,
    total_batches: usize,
    /// 已结束（写入或失败）的批次数
    finished_batches: usize,
}

impl BarProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// 一个批次结束后，消息切换到下一批次
    fn advance_batch(&mut self) {
        self.finished_batches += 1;
        if let Some(pb) = &self.pb {
            let current = (self.finished_batches + 1).min(self.total_batches);
            pb.set_message(format!("batch {}/{}", current, self.total_batches));
        }
    }
}

impl ProgressObserver for BarProgress {
    fn on_start(&mut self, total_files: usize, total_batches: usize) {
        let pb = progress::create_progress_bar(total_files as u64, "Processing files");
        if total_batches > 0 {
            pb.set_message(format!("batch 1/{}", total_batches));
        }
        self.pb = Some(pb);
        self.total_batches = total_batches;
        self.finished_batches = 0;
    }

    fn on_progress(&mut self, completed: usize, _total: usize) {
        if let Some(pb) = &self.pb {
            pb.set_position(completed as u64);
        }
    }

    fn on_batch_written(&mut self, index: usize, path: &Path, records: usize) {
        tracing::debug!(batch = index, records, path = %path.display(), "batch written");
        self.advance_batch();
    }

    fn on_batch_failed(&mut self, index: usize, error: &CorpusError) {
        let msg = format!("Batch {:02} not written: {}", index, error.report());
        match &self.pb {
            Some(pb) => pb.suspend(|| output::print_warning(&msg)),
            None => output::print_warning(&msg),
        }
        self.advance_batch();
    }

    fn on_finish(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }
}

/// 根据终端状态与 `--quiet` 选择观察者
pub fn observer_for(quiet: bool) -> Box<dyn ProgressObserver> {
    if quiet || !progress::stderr_is_attended() {
        Box::new(SilentProgress)
    } else {
        Box::new(BarProgress::new())
    }
}
