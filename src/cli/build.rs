//! # build 子命令 CLI 定义
//!
//! 将源目录中的文本文件分批转换为编号 JSON 语料文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `SourceArgs` 同时被 `cli/plan.rs` 复用
//! - 参数传递给 `commands/build.rs`

use crate::batch::RecordFormat;
use crate::config::DEFAULT_BATCH_SIZE;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 支持的输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON array per output file
    Array,
    /// One JSON object per line (newline-delimited JSON)
    Ndjson,
}

impl From<OutputFormat> for RecordFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Array => RecordFormat::Array,
            OutputFormat::Ndjson => RecordFormat::Ndjson,
        }
    }
}

/// 源目录与分批参数（build / plan 共用）
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory containing the source text files
    #[arg(env = "TXT2CORPUS_SOURCE")]
    pub input: PathBuf,

    /// Number of source files per output file
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Glob pattern(s) for source file names, comma separated
    #[arg(short, long, default_value = "*")]
    pub pattern: String,

    /// Seed for the random file order (reproducible batches)
    #[arg(long, conflicts_with = "no_shuffle")]
    pub seed: Option<u64>,

    /// Keep files in sorted path order instead of shuffling
    #[arg(long, default_value_t = false)]
    pub no_shuffle: bool,

    /// Number of the first output file
    #[arg(long, default_value_t = 1)]
    pub start_index: usize,

    /// Output file name prefix
    #[arg(long, default_value = "data")]
    pub prefix: String,
}

/// build 子命令参数
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output directory for the corpus files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Output file format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Array)]
    pub format: OutputFormat,

    /// Write JSON arrays without indentation
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Replace invalid UTF-8 instead of failing the batch
    #[arg(long, default_value_t = false)]
    pub lossy: bool,

    /// Write a CSV manifest mapping source files to batches
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}
