//! # 文本模块
//!
//! 读取源文本文件并转换为带行号的文档。
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 与 `commands/number.rs` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: numberer

pub mod numberer;

use crate::error::{CorpusError, Result};
use crate::models::{NumberedDocument, OutputRecord};
use std::fs;
use std::path::Path;

/// 源文件解码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decoding {
    /// 严格 UTF-8，非法字节序列视为读取失败
    #[default]
    Strict,
    /// 非法字节序列替换为 U+FFFD
    Lossy,
}

/// 读取源文件全文
pub fn read_source_file(path: &Path, decoding: Decoding) -> Result<String> {
    match decoding {
        Decoding::Strict => fs::read_to_string(path).map_err(|e| CorpusError::read(path, e)),
        Decoding::Lossy => {
            let bytes = fs::read(path).map_err(|e| CorpusError::read(path, e))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

/// 读取并编号单个文件
pub fn load_document(path: &Path, decoding: Decoding) -> Result<NumberedDocument> {
    let raw = read_source_file(path, decoding)?;
    Ok(NumberedDocument::from_raw(&raw))
}

/// 读取单个文件并生成输出记录（工作线程任务）
pub fn load_record(path: &Path, decoding: Decoding) -> Result<OutputRecord> {
    load_document(path, decoding).map(OutputRecord::from)
}
