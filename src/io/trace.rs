use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// burn-in 占得分序列的比例
pub const BURN_IN_FRACTION: f64 = 0.1;
/// 寻找最低分时跳过的前缀比例
pub const MIN_SEARCH_FRACTION: f64 = 0.2;

/// 收敛曲线的摘要，供外部绘图工具使用：burn-in 区间与最低分位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConvergenceSummary {
    pub runs: usize,
    /// 前 `burn_in` 次采样视为 burn-in
    pub burn_in: usize,
    pub min_score: u32,
    /// 第一次达到最低分的采样序号（从 0 开始）
    pub min_run: usize,
}

impl ConvergenceSummary {
    /// 最低分在 `floor(0.2 * len)` 之后的区间内寻找；区间为空时使用整个序列。
    /// 空序列返回 `None`。
    pub fn from_scores(scores: &[u32]) -> Option<Self> {
        let len = scores.len();
        let burn_in = (len as f64 * BURN_IN_FRACTION) as usize;
        let mut start = (len as f64 * MIN_SEARCH_FRACTION) as usize;
        if start >= len {
            start = 0;
        }
        let (offset, &min_score) = scores[start..]
            .iter()
            .enumerate()
            .min_by_key(|&(i, &s)| (s, i))?;
        Some(Self {
            runs: len,
            burn_in,
            min_score,
            min_run: start + offset,
        })
    }
}

/// 以 TSV 写出每次采样的最终得分：`run  score  burn_in`
pub fn write_trace<W: Write>(out: &mut W, scores: &[u32]) -> Result<()> {
    let burn_in = (scores.len() as f64 * BURN_IN_FRACTION) as usize;
    writeln!(out, "run\tscore\tburn_in")?;
    for (i, s) in scores.iter().enumerate() {
        writeln!(out, "{}\t{}\t{}", i, s, u8::from(i < burn_in))?;
    }
    Ok(())
}

pub fn write_trace_file(path: &str, scores: &[u32]) -> Result<()> {
    let fh = std::fs::File::create(path)
        .map_err(|e| anyhow::anyhow!("cannot create score trace '{}': {}", path, e))?;
    let mut out = std::io::BufWriter::new(fh);
    write_trace(&mut out, scores)?;
    out.flush()?;
    Ok(())
}
