//! # 诊断日志
//!
//! 初始化 `tracing` 订阅者，诊断事件写入 stderr。
//! 用户可见的进度信息由 `utils/output.rs` 打印，这里只输出诊断事件：
//! 默认 `info`，`--verbose` 为 `debug`，`--quiet` 只保留错误；
//! 设置 `RUST_LOG` 时以其为准。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `tracing-subscriber`

use tracing_subscriber::EnvFilter;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (_, true) => Verbosity::Verbose,
            (true, false) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        }
    }

    fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "txt2corpus=info,warn",
            Verbosity::Verbose => "txt2corpus=debug,warn",
        }
    }
}

/// 初始化全局订阅者（重复调用时忽略）
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
