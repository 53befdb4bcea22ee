//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `build`: 分批生成 JSON 语料文件
//! - `plan`: 预览批次划分
//! - `number`: 单文件行号标注
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: build, plan, number

pub mod build;
pub mod number;
pub mod plan;

use clap::{Parser, Subcommand};

/// txt2corpus - 文本目录批量转换为训练语料
#[derive(Parser)]
#[command(name = "txt2corpus")]
#[command(version)]
#[command(
    about = "Batch a directory of plain-text documents into numbered-line JSON corpus files",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Only print warnings, errors and the final result
    #[arg(short, long, global = true, default_value_t = false)]
    pub quiet: bool,

    /// Print diagnostic events
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a directory of text files into batched JSON corpus files
    Build(build::BuildArgs),

    /// Show how files would be batched without reading or writing them
    Plan(plan::PlanArgs),

    /// Print the numbered-line form of a single file
    Number(number::NumberArgs),
}
