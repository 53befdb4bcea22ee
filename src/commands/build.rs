//! # build 命令实现
//!
//! 将源目录中的文本文件分批转换为编号 JSON 语料文件。
//!
//! ## 功能
//! - 收集、打乱并分批源文件
//! - 并行行号标注（rayon）
//! - 每批写出一个 `{prefix}{index:02}.json`
//! - 进度条、批次汇总表、可选 CSV 清单
//!
//! ## 依赖关系
//! - 使用 `cli/build.rs` 定义的参数
//! - 使用 `batch/` 模块执行流水线
//! - 使用 `utils/output.rs` 打印结果

use super::source_config;
use crate::batch::{manifest, pipeline, progress};
use crate::cli::build::BuildArgs;
use crate::config::CorpusConfig;
use crate::error::{CorpusError, Result};
use crate::models::{BatchStatus, RunSummary};
use crate::text::Decoding;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 汇总表最多显示的批次数
const TABLE_LIMIT: usize = 20;

/// 批次汇总行
#[derive(Debug, Clone, Tabled)]
struct BatchRow {
    #[tabled(rename = "Batch")]
    index: usize,
    #[tabled(rename = "Output")]
    output: String,
    #[tabled(rename = "Records")]
    records: usize,
    #[tabled(rename = "Status")]
    status: String,
}

/// 执行 build 命令
pub fn execute(args: BuildArgs, quiet: bool) -> Result<()> {
    let config = corpus_config(&args)?;

    if !quiet {
        output::print_header("Building Text Corpus");
        print_settings(&config);
    }

    let mut observer = progress::observer_for(quiet);
    let summary = pipeline::run(&config, observer.as_mut())?;

    if summary.total_files == 0 {
        output::print_warning(&format!(
            "No source files matched '{}' in '{}'",
            config.pattern,
            config.source_dir.display()
        ));
        output::print_done("0 files processed");
        return Ok(());
    }

    if !quiet {
        print_batch_table(&summary);
    }

    if let Some(path) = &args.manifest {
        let rows = manifest::write_manifest(path, &summary)?;
        if !quiet {
            output::print_info(&format!(
                "Manifest with {} rows written to '{}'",
                rows,
                path.display()
            ));
        }
    }

    if summary.has_failures() {
        output::print_separator();
        for batch in summary.failures() {
            if let BatchStatus::Failed(err) = &batch.status {
                output::print_error(&format!("Batch {:02}: {}", batch.index, err));
            }
        }
        return Err(CorpusError::WriteFailures {
            failed: summary.batches.len() - summary.written(),
            total: summary.batches.len(),
        });
    }

    output::print_done(&format!(
        "{} files processed into {} files ({} records) in '{}'",
        summary.processed_files,
        summary.written(),
        summary.records_written(),
        config.output_dir.display()
    ));

    Ok(())
}

/// 由命令行参数构造流水线配置
fn corpus_config(args: &BuildArgs) -> Result<CorpusConfig> {
    let mut config = source_config(&args.source)?;
    config.output_dir = args.output.clone();
    config.jobs = args.jobs;
    config.format = args.format.into();
    config.pretty = !args.compact;
    config.decoding = if args.lossy {
        Decoding::Lossy
    } else {
        Decoding::Strict
    };
    Ok(config)
}

fn print_settings(config: &CorpusConfig) {
    let jobs = if config.jobs == 0 {
        format!("auto ({})", num_cpus::get())
    } else {
        config.jobs.to_string()
    };

    output::print_info("Settings");
    output::print_setting("source", &config.source_dir.display());
    output::print_setting("output", &config.output_dir.display());
    output::print_setting("batch size", &config.batch_size);
    output::print_setting("jobs", &jobs);
    output::print_setting("format", &config.format);
    output::print_setting("first file", &config.writer().file_name(config.start_index));
    println!();
}

fn print_batch_table(summary: &RunSummary) {
    let rows: Vec<BatchRow> = summary
        .batches
        .iter()
        .take(TABLE_LIMIT)
        .map(|b| BatchRow {
            index: b.index,
            output: b.output.display().to_string(),
            records: b.sources.len(),
            status: match &b.status {
                BatchStatus::Written => "written".to_string(),
                BatchStatus::Failed(_) => "FAILED".to_string(),
            },
        })
        .collect();

    println!("{}", Table::new(&rows));
    if summary.batches.len() > TABLE_LIMIT {
        output::print_info(&format!(
            "... and {} more batches",
            summary.batches.len() - TABLE_LIMIT
        ));
    }
}
