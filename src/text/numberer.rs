//! # 行号标注
//!
//! 将原始文本转换为带行号的表示：丢弃空白行，其余行按原顺序编号 1..k，
//! 每行输出 `"{n}:{content}"`，以单个 `\n` 连接。
//!
//! ## 依赖关系
//! - 被 `text/mod.rs` 和 `batch/pipeline.rs` 使用
//! - 纯函数，无外部依赖

/// 为非空白行添加 1 起始的连续行号
///
/// 行内容原样保留（不做 trim），`\r\n` 中的 `\r` 视为换行符的一部分。
/// 全部为空白的输入返回空字符串。
pub fn number_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut n = 0usize;

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        n += 1;
        if n > 1 {
            out.push('\n');
        }
        out.push_str(&n.to_string());
        out.push(':');
        out.push_str(line);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_lines() {
        assert_eq!(number_lines("hello\n\nworld"), "1:hello\n2:world");
        assert_eq!(number_lines("x"), "1:x");
    }

    #[test]
    fn test_numbers_are_contiguous() {
        let input = "a\n   \n\tb\n\n\n c \n\t\n";
        let out = number_lines(input);
        assert_eq!(out, "1:a\n2:\tb\n3: c ");

        let numbers: Vec<usize> = out
            .lines()
            .map(|l| l.split(':').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_blank_only_input() {
        assert_eq!(number_lines(""), "");
        assert_eq!(number_lines("\n \n\t\n"), "");
    }

    #[test]
    fn test_crlf_and_unicode() {
        assert_eq!(number_lines("第一行\r\n\r\n第二行\r\n"), "1:第一行\n2:第二行");
    }

    #[test]
    fn test_renumbering_keeps_distinct_lines() {
        let once = number_lines("a\n\nb\nc");
        let twice = number_lines(&once);
        assert_eq!(twice, "1:1:a\n2:2:b\n3:3:c");
        assert_eq!(twice.lines().count(), once.lines().count());
    }
}
