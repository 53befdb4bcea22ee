//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `text/`, `utils/`
//! - 子模块: build, plan, number

pub mod build;
pub mod number;
pub mod plan;

use crate::cli::build::SourceArgs;
use crate::cli::Commands;
use crate::config::{self, CorpusConfig};
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands, quiet: bool) -> Result<()> {
    match cmd {
        Commands::Build(args) => build::execute(args, quiet),
        Commands::Plan(args) => plan::execute(args),
        Commands::Number(args) => number::execute(args),
    }
}

/// 由源目录参数构造配置（其余字段取默认值）
pub(crate) fn source_config(args: &SourceArgs) -> Result<CorpusConfig> {
    let mut config = CorpusConfig::new(args.input.clone());
    config.batch_size = config::parse_batch_size(args.batch_size)?;
    config.pattern = args.pattern.clone();
    config.order = config::file_order(args.seed, args.no_shuffle);
    config.start_index = args.start_index;
    config.prefix = args.prefix.clone();
    Ok(config)
}
