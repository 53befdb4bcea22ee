//! # number 子命令 CLI 定义
//!
//! 对单个文件做行号标注并输出到 stdout。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/number.rs`

use clap::Args;
use std::path::PathBuf;

/// number 子命令参数
#[derive(Args, Debug)]
pub struct NumberArgs {
    /// Text file to number
    pub file: PathBuf,

    /// Replace invalid UTF-8 instead of failing
    #[arg(long, default_value_t = false)]
    pub lossy: bool,

    /// Print the output record as JSON instead of plain text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
