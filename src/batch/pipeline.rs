//! # 批处理流水线
//!
//! 协调 文件收集 → 批次划分 → 并行编号 → 批次写入，并向观察者报告进度。
//!
//! ## 功能
//! - 批次严格顺序处理：上一批写入完成后才读取下一批
//! - 批内文件在线程池上并行处理，结果保持批内顺序
//! - 读取失败终止整次运行（已写入的批次保留）
//! - 写入失败只记录该批次，继续处理后续批次
//! - 线程池与进度条在所有退出路径上释放
//!
//! ## 依赖关系
//! - 被 `commands/build.rs` 调用
//! - 使用 `batch/` 各子模块, `text/`, `config.rs`

use super::partition::Partitioner;
use super::progress::ProgressObserver;
use super::runner::WorkerPool;
use super::writer::BatchWriter;
use crate::config::CorpusConfig;
use crate::error::Result;
use crate::models::{BatchReport, BatchStatus, OutputRecord, RunSummary};
use crate::text;

use std::path::{Path, PathBuf};

/// 按配置运行完整流水线
pub fn run(config: &CorpusConfig, observer: &mut dyn ProgressObserver) -> Result<RunSummary> {
    let decoding = config.decoding;
    run_with(config, observer, move |path| text::load_record(path, decoding))
}

/// 使用自定义文件任务运行流水线
pub fn run_with<F>(
    config: &CorpusConfig,
    observer: &mut dyn ProgressObserver,
    task: F,
) -> Result<RunSummary>
where
    F: Fn(&Path) -> Result<OutputRecord> + Sync,
{
    let files = config.collector()?.collect()?;
    tracing::info!(
        files = files.len(),
        source = %config.source_dir.display(),
        "enumerated source files"
    );
    run_files(config, &files, observer, task)
}

/// 对给定（已排序或已打乱的）文件列表运行流水线
pub fn run_files<F>(
    config: &CorpusConfig,
    files: &[PathBuf],
    observer: &mut dyn ProgressObserver,
    task: F,
) -> Result<RunSummary>
where
    F: Fn(&Path) -> Result<OutputRecord> + Sync,
{
    let mut summary = RunSummary {
        total_files: files.len(),
        ..RunSummary::default()
    };

    if files.is_empty() {
        return Ok(summary);
    }

    let writer = config.writer();
    writer.ensure_output_dir()?;

    let pool = WorkerPool::new(config.jobs)?;
    tracing::debug!(jobs = pool.jobs(), "worker pool started");

    let batches = Partitioner::new(files, config.batch_size, config.start_index);
    observer.on_start(files.len(), batches.len());

    let result = process_batches(&pool, &writer, batches, &task, observer, &mut summary);

    observer.on_finish();
    pool.shutdown();

    result.map(|()| summary)
}

fn process_batches<F>(
    pool: &WorkerPool,
    writer: &BatchWriter,
    batches: Partitioner<'_>,
    task: &F,
    observer: &mut dyn ProgressObserver,
    summary: &mut RunSummary,
) -> Result<()>
where
    F: Fn(&Path) -> Result<OutputRecord> + Sync,
{
    let total = summary.total_files;

    for batch in batches {
        let base = summary.processed_files;
        let records = pool
            .execute(batch.files, task, |done| observer.on_progress(base + done, total))
            .inspect_err(|e| {
                tracing::debug!(batch = batch.index, error = %e, "batch aborted");
            })?;
        summary.processed_files += records.len();

        let output = writer.path_for(batch.index);
        let status = match writer.write(batch.index, &records) {
            Ok(path) => {
                observer.on_batch_written(batch.index, &path, records.len());
                BatchStatus::Written
            }
            Err(e) => {
                tracing::debug!(batch = batch.index, error = %e, "batch write failed");
                observer.on_batch_failed(batch.index, &e);
                BatchStatus::Failed(e.report())
            }
        };

        summary.batches.push(BatchReport {
            index: batch.index,
            output,
            sources: batch.files.to_vec(),
            status,
        });
    }

    Ok(())
}
