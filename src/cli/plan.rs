//! # plan 子命令 CLI 定义
//!
//! 只收集和划分批次，打印批次计划，不读取也不写入任何文档。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plan.rs`

use super::build::SourceArgs;
use clap::Args;

/// plan 子命令参数
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Maximum number of batches to list (0 = all)
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}
