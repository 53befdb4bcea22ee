//! # 文件收集器
//!
//! 列出源目录中的文件并生成随机处理顺序。
//!
//! ## 功能
//! - 仅列出目录第一层的普通文件（不递归）
//! - glob 模式过滤（逗号分隔多模式）
//! - 排序后随机打乱，指定种子时顺序可复现
//!
//! ## 依赖关系
//! - 被 `batch/pipeline.rs` 与 `commands/plan.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名, `rand` 打乱顺序

use crate::error::{CorpusError, Result};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件处理顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrder {
    /// 均匀随机排列；`seed` 为 `None` 时使用系统随机源
    Shuffled { seed: Option<u64> },
    /// 按路径排序
    Sorted,
}

impl Default for FileOrder {
    fn default() -> Self {
        FileOrder::Shuffled { seed: None }
    }
}

/// 文件收集器
pub struct FileCollector {
    /// 源目录
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<glob::Pattern>,
    /// 处理顺序
    order: FileOrder,
}

impl FileCollector {
    /// 创建新的文件收集器（默认匹配所有文件，随机顺序）
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            patterns: Vec::new(),
            order: FileOrder::default(),
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "*")
            .map(|s| {
                glob::Pattern::new(s).map_err(|e| {
                    CorpusError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// 设置处理顺序
    pub fn order(mut self, order: FileOrder) -> Self {
        self.order = order;
        self
    }

    /// 收集文件并按设定顺序排列
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.input.is_dir() {
            return Err(CorpusError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.input.as_path()).to_path_buf();
                CorpusError::read(&path, e.into())
            })?;

            if entry.file_type().is_file() && self.matches_patterns(entry.path()) {
                files.push(entry.into_path());
            }
        }

        // 先排序，消除文件系统返回顺序的影响
        files.sort();

        match self.order {
            FileOrder::Sorted => {}
            FileOrder::Shuffled { seed: Some(seed) } => {
                files.shuffle(&mut StdRng::seed_from_u64(seed));
            }
            FileOrder::Shuffled { seed: None } => {
                files.shuffle(&mut rand::rng());
            }
        }

        Ok(files)
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        self.patterns.iter().any(|p| p.matches(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        dir
    }

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = FileCollector::new(dir.path().join("missing"))
            .collect()
            .unwrap_err();
        assert!(matches!(err, CorpusError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let dir = fixture(&["a.txt"]);
        let err = FileCollector::new(dir.path().join("a.txt"))
            .collect()
            .unwrap_err();
        assert!(matches!(err, CorpusError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_skips_subdirectories() {
        let dir = fixture(&["a.txt", "b.txt"]);
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.txt"), "x").unwrap();

        let files = FileCollector::new(dir.path())
            .order(FileOrder::Sorted)
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_pattern_filter() {
        let dir = fixture(&["a.txt", "b.md", "c.txt", "d.log"]);
        let files = FileCollector::new(dir.path())
            .with_pattern("*.txt, *.md")
            .unwrap()
            .order(FileOrder::Sorted)
            .collect()
            .unwrap();
        assert_eq!(names(&files), vec!["a.txt", "b.md", "c.txt"]);

        assert!(FileCollector::new(dir.path()).with_pattern("[").is_err());
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible_permutation() {
        let all: Vec<String> = (0..50).map(|i| format!("f{:03}.txt", i)).collect();
        let refs: Vec<&str> = all.iter().map(String::as_str).collect();
        let dir = fixture(&refs);

        let collect = |seed| {
            FileCollector::new(dir.path())
                .order(FileOrder::Shuffled { seed: Some(seed) })
                .collect()
                .unwrap()
        };

        let first = collect(7);
        assert_eq!(first, collect(7));

        let mut sorted = names(&first);
        sorted.sort();
        assert_eq!(sorted, all);
        assert_ne!(names(&first), all);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let files = FileCollector::new(dir.path()).collect().unwrap();
        assert!(files.is_empty());
    }
}
