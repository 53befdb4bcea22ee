//! # 批次写入器
//!
//! 将一个批次的输出记录序列化为单个按编号命名的 JSON 文件。
//!
//! ## 功能
//! - 文件名 `{prefix}{index:02}.json`
//! - JSON 数组（默认 4 空格缩进）或 NDJSON
//! - UTF-8 输出，非 ASCII 字符原样写出
//! - 先写入输出目录中的临时文件再原子重命名，失败时保留原有文件
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 调用
//! - 使用 `serde_json` 序列化

use crate::error::{CorpusError, Result};
use crate::models::OutputRecord;

use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// 默认输出文件名前缀
pub const DEFAULT_PREFIX: &str = "data";

/// 输出文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFormat {
    /// 每个文件一个 JSON 数组
    #[default]
    Array,
    /// 每行一个 JSON 对象
    Ndjson,
}

impl std::fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFormat::Array => write!(f, "array"),
            RecordFormat::Ndjson => write!(f, "ndjson"),
        }
    }
}

/// 批次写入器
#[derive(Debug, Clone)]
pub struct BatchWriter {
    output_dir: PathBuf,
    prefix: String,
    format: RecordFormat,
    /// 数组格式是否缩进
    pretty: bool,
}

impl BatchWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: DEFAULT_PREFIX.to_string(),
            format: RecordFormat::default(),
            pretty: true,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// 批次编号对应的文件名（至少两位数字）
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{:02}.json", self.prefix, index)
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.output_dir.join(self.file_name(index))
    }

    /// 确保输出目录存在
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| CorpusError::write(&self.output_dir, e))
    }

    /// 序列化批次记录
    pub fn render(&self, records: &[OutputRecord]) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(records.iter().map(|r| r.text.len() + 16).sum());

        match self.format {
            RecordFormat::Array if self.pretty => {
                let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
                records.serialize(&mut ser)?;
            }
            RecordFormat::Array => {
                serde_json::to_writer(&mut buf, records)?;
            }
            RecordFormat::Ndjson => {
                for record in records {
                    serde_json::to_writer(&mut buf, record)?;
                    buf.push(b'\n');
                }
            }
        }

        Ok(buf)
    }

    /// 写入一个批次，返回输出文件路径
    pub fn write(&self, index: usize, records: &[OutputRecord]) -> Result<PathBuf> {
        let path = self.path_for(index);
        let bytes = self.render(records)?;
        self.replace_file(&path, |tmp| tmp.write_all(&bytes))?;
        Ok(path)
    }

    /// 经由同目录临时文件替换 `path`
    ///
    /// 目标文件要么保持原样，要么是完整的新内容；失败时临时文件随 drop 删除。
    fn replace_file<F>(&self, path: &Path, fill: F) -> Result<()>
    where
        F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
    {
        let mut tmp = tempfile::Builder::new()
            .prefix(".txt2corpus-")
            .suffix(".tmp")
            .tempfile_in(&self.output_dir)
            .map_err(|e| CorpusError::write(path, e))?;

        fill(&mut tmp)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| CorpusError::write(path, e))?;

        tmp.persist(path)
            .map_err(|e| CorpusError::write(path, e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(text: &str) -> OutputRecord {
        OutputRecord {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_file_name_padding() {
        let writer = BatchWriter::new("out");
        assert_eq!(writer.file_name(1), "data01.json");
        assert_eq!(writer.file_name(10), "data10.json");
        assert_eq!(writer.file_name(123), "data123.json");
        assert_eq!(writer.with_prefix("zh_").file_name(7), "zh_07.json");
    }

    #[test]
    fn test_pretty_array() {
        let writer = BatchWriter::new("out");
        let bytes = writer.render(&[record("1:x")]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "[\n    {\n        \"text\": \"1:x\"\n    }\n]"
        );
    }

    #[test]
    fn test_non_ascii_is_literal() {
        let writer = BatchWriter::new("out").pretty(false);
        let bytes = writer.render(&[record("1:你好"), record("2:café")]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"[{"text":"1:你好"},{"text":"2:café"}]"#
        );
    }

    #[test]
    fn test_ndjson() {
        let writer = BatchWriter::new("out").with_format(RecordFormat::Ndjson);
        let bytes = writer.render(&[record("1:a\n2:b"), record("")]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "{\"text\":\"1:a\\n2:b\"}\n{\"text\":\"\"}\n"
        );
    }

    #[test]
    fn test_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let writer = BatchWriter::new(dir.path()).pretty(false);

        fs::write(dir.path().join("data01.json"), "stale content that is longer").unwrap();
        let path = writer.write(1, &[record("1:x")]).unwrap();

        assert_eq!(path, dir.path().join("data01.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"[{"text":"1:x"}]"#);
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        let writer = BatchWriter::new(dir.path());
        let path = writer.path_for(1);
        fs::write(&path, "old-good-content").unwrap();

        let err = writer
            .replace_file(&path, |tmp| {
                tmp.write_all(b"[{\"text\":\"1:trunc")?;
                Err(io::Error::other("File too large"))
            })
            .unwrap_err();

        assert!(matches!(err, CorpusError::WriteError { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old-good-content");
        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["data01.json"]);
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let writer = BatchWriter::new(dir.path());
        writer.write(1, &[record("1:x")]).unwrap();
        writer.write(2, &[record("1:y")]).unwrap();

        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["data01.json", "data02.json"]);
    }

    #[test]
    fn test_write_error_names_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("data02.json")).unwrap();

        let err = BatchWriter::new(dir.path()).write(2, &[record("1:x")]).unwrap_err();
        match err {
            CorpusError::WriteError { path, .. } => assert!(path.ends_with("data02.json")),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_round_trip_records() {
        let writer = BatchWriter::new("out");
        let records = vec![record("1:hello\n2:world"), record("1:x")];
        let parsed: Vec<OutputRecord> =
            serde_json::from_slice(&writer.render(&records).unwrap()).unwrap();
        assert_eq!(parsed, records);
    }
}
