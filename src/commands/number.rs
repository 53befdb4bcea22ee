//! # number 命令实现
//!
//! 对单个文件做行号标注，结果写到 stdout。
//!
//! ## 依赖关系
//! - 使用 `cli/number.rs` 定义的参数
//! - 使用 `text/` 读取与编号

use crate::cli::number::NumberArgs;
use crate::error::Result;
use crate::models::OutputRecord;
use crate::text::{self, Decoding};

/// 执行 number 命令
pub fn execute(args: NumberArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

fn render(args: &NumberArgs) -> Result<String> {
    let decoding = if args.lossy {
        Decoding::Lossy
    } else {
        Decoding::Strict
    };

    let doc = text::load_document(&args.file, decoding)?;
    tracing::debug!(lines = doc.line_count(), file = %args.file.display(), "numbered");
    if doc.is_empty() {
        tracing::warn!(file = %args.file.display(), "file has no non-blank lines");
    }

    if args.json {
        Ok(serde_json::to_string(&OutputRecord::from(doc))?)
    } else {
        Ok(doc.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_plain_and_json() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "hello\n\nworld\n").unwrap();

        let mut args = NumberArgs {
            file,
            lossy: false,
            json: false,
        };
        assert_eq!(render(&args).unwrap(), "1:hello\n2:world");

        args.json = true;
        assert_eq!(render(&args).unwrap(), r#"{"text":"1:hello\n2:world"}"#);
    }

    #[test]
    fn test_render_blank_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("blank.txt");
        fs::write(&file, "  \n\n").unwrap();

        let args = NumberArgs {
            file,
            lossy: false,
            json: true,
        };
        assert_eq!(render(&args).unwrap(), r#"{"text":""}"#);
    }
}
