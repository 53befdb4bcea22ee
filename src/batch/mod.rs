//! # 批量处理模块
//!
//! 将源目录中的文本文件分批并行转换为编号 JSON 语料文件。
//!
//! ## 功能
//! - 收集并随机打乱源文件
//! - 按固定大小划分批次
//! - 线程池并行编号，保持批内顺序
//! - 按批次编号写出输出文件与可选清单
//! - 观察者式进度反馈
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod manifest;
pub mod partition;
pub mod pipeline;
pub mod progress;
pub mod runner;
pub mod writer;

pub use partition::Partitioner;
pub use writer::RecordFormat;
