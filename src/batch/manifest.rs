//! # 批次清单
//!
//! 将每个源文件与其所在批次、批内位置和输出文件的对应关系写入 CSV。
//! 只包含成功写入的批次。
//!
//! ## 依赖关系
//! - 被 `commands/build.rs` 调用
//! - 使用 `csv` + `serde` 写出

use crate::error::{CorpusError, Result};
use crate::models::RunSummary;

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// 清单行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRow {
    pub batch: usize,
    /// 批内位置（1 起始）
    pub position: usize,
    pub source: String,
    pub output: String,
}

/// 由运行汇总生成清单行
pub fn manifest_rows(summary: &RunSummary) -> Vec<ManifestRow> {
    summary
        .batches
        .iter()
        .filter(|b| b.is_written())
        .flat_map(|b| {
            let output = b.output.display().to_string();
            b.sources
                .iter()
                .enumerate()
                .map(move |(i, source)| ManifestRow {
                    batch: b.index,
                    position: i + 1,
                    source: source.display().to_string(),
                    output: output.clone(),
                })
        })
        .collect()
}

/// 写出清单，返回行数
pub fn write_manifest(path: &Path, summary: &RunSummary) -> Result<usize> {
    let rows = manifest_rows(summary);
    let file = File::create(path).map_err(|e| CorpusError::write(path, e))?;
    let mut wtr = csv::Writer::from_writer(file);
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush().map_err(|e| CorpusError::write(path, e))?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchReport, BatchStatus};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn summary() -> RunSummary {
        RunSummary {
            total_files: 3,
            processed_files: 3,
            batches: vec![
                BatchReport {
                    index: 1,
                    output: PathBuf::from("data01.json"),
                    sources: vec![PathBuf::from("src/b.txt"), PathBuf::from("src/a.txt")],
                    status: BatchStatus::Written,
                },
                BatchReport {
                    index: 2,
                    output: PathBuf::from("data02.json"),
                    sources: vec![PathBuf::from("src/c.txt")],
                    status: BatchStatus::Failed("disk full".to_string()),
                },
            ],
        }
    }

    #[test]
    fn test_rows_skip_failed_batches() {
        let rows = manifest_rows(&summary());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].source, "src/b.txt");
        assert_eq!(rows[1].position, 2);
        assert!(rows.iter().all(|r| r.batch == 1 && r.output == "data01.json"));
    }

    #[test]
    fn test_write_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("manifest.csv");
        assert_eq!(write_manifest(&path, &summary()).unwrap(), 2);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<ManifestRow> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, manifest_rows(&summary()));
    }

    #[test]
    fn test_unwritable_manifest_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("manifest.csv");

        match write_manifest(&path, &summary()).unwrap_err() {
            CorpusError::WriteError { path: p, .. } => assert!(p.ends_with("manifest.csv")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
