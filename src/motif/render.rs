use serde::{Deserialize, Serialize};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

/// 报告中标记 motif 的方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Highlight {
    /// ANSI 红色，终端中用 `less -R` 查看
    #[default]
    Ansi,
    /// `[...]`，适合写入纯文本
    Brackets,
}

/// 在原序列 `seq` 的 `offset..offset + k` 处加上标记。
pub fn mark_motif(seq: &[u8], offset: usize, k: usize, style: Highlight) -> String {
    let (open, close) = match style {
        Highlight::Ansi => (ANSI_RED, ANSI_RESET),
        Highlight::Brackets => ("[", "]"),
    };
    let end = offset + k;
    let mut out = String::with_capacity(seq.len() + open.len() + close.len());
    out.push_str(&String::from_utf8_lossy(&seq[..offset]));
    out.push_str(open);
    out.push_str(&String::from_utf8_lossy(&seq[offset..end]));
    out.push_str(close);
    out.push_str(&String::from_utf8_lossy(&seq[end..]));
    out
}
