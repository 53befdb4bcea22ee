//! # txt2corpus - 文本目录批量转换为训练语料
//!
//! 将大量无序纯文本文件随机打乱、分批，并行为每个文件添加行号，
//! 每批写出一个 `data{NN}.json` 语料文件。
//!
//! ## 子命令
//! - `build`  - 分批生成 JSON 语料文件
//! - `plan`   - 预览批次划分（不读写文档）
//! - `number` - 单文件行号标注
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (收集、分批、线程池、写入、进度)
//!   │     ├── text/      (读取与行号标注)
//!   │     └── models/    (数据模型)
//!   ├── config.rs   (流水线配置)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod text;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::logging::{self, Verbosity};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose));

    if let Err(e) = commands::run(cli.command, cli.quiet) {
        utils::output::print_error(&e.report());
        std::process::exit(1);
    }
}
