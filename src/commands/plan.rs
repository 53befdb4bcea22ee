//! # plan 命令实现
//!
//! 收集源文件并按批次划分，打印每个批次将写入的文件名与文件数。
//! 不读取文档内容，不写入任何文件。
//!
//! ## 依赖关系
//! - 使用 `cli/plan.rs` 定义的参数
//! - 使用 `batch/collector.rs`, `batch/partition.rs`

use super::source_config;
use crate::batch::Partitioner;
use crate::cli::plan::PlanArgs;
use crate::config::CorpusConfig;
use crate::error::Result;
use crate::utils::output;

use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 批次计划行
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
struct PlanRow {
    #[tabled(rename = "Batch")]
    index: usize,
    #[tabled(rename = "Output")]
    output: String,
    #[tabled(rename = "Files")]
    files: usize,
    #[tabled(rename = "First file")]
    first: String,
}

/// 执行 plan 命令
pub fn execute(args: PlanArgs) -> Result<()> {
    output::print_header("Batch Plan");

    let config = source_config(&args.source)?;
    let files = config.collector()?.collect()?;
    let rows = plan_rows(&config, &files);

    output::print_info(&format!(
        "{} files in '{}' -> {} batches of up to {}",
        files.len(),
        config.source_dir.display(),
        rows.len(),
        config.batch_size
    ));

    if rows.is_empty() {
        output::print_warning("Nothing to write.");
        return Ok(());
    }

    let shown = if args.limit == 0 {
        rows.len()
    } else {
        args.limit.min(rows.len())
    };
    println!("{}", Table::new(&rows[..shown]));
    if shown < rows.len() {
        output::print_info(&format!("... and {} more batches", rows.len() - shown));
    }

    Ok(())
}

fn plan_rows(config: &CorpusConfig, files: &[PathBuf]) -> Vec<PlanRow> {
    let writer = config.writer();
    Partitioner::new(files, config.batch_size, config.start_index)
        .map(|batch| PlanRow {
            index: batch.index,
            output: writer.file_name(batch.index),
            files: batch.len(),
            first: batch
                .files
                .first()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })
        .collect()
}
