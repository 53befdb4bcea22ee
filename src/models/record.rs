//! # 文档与输出记录数据模型
//!
//! ## 依赖关系
//! - 被 `text/`, `batch/writer.rs` 使用

use crate::text::numberer;
use serde::{Deserialize, Serialize};

/// 带行号的文档
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberedDocument {
    pub text: String,
}

impl NumberedDocument {
    /// 由原始文本生成
    pub fn from_raw(raw: &str) -> Self {
        Self {
            text: numberer::number_lines(raw),
        }
    }

    /// 编号行数
    pub fn line_count(&self) -> usize {
        if self.text.is_empty() {
            0
        } else {
            self.text.lines().count()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// 输出记录：`{"text": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub text: String,
}

impl From<NumberedDocument> for OutputRecord {
    fn from(doc: NumberedDocument) -> Self {
        Self { text: doc.text }
    }
}
