use crate::util::dna::{self, SIGMA};

use super::corpus::{Corpus, MotifSet};

/// k × 4 概率矩阵，每行对应 motif 的一个列位置，列顺序为 A/C/G/T。
///
/// 采用 +1 伪计数（Laplace 平滑）：`(count + 1) / (m + 4)`，
/// 因此每个格子严格为正，每行和为 1。
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    rows: Vec<[f64; SIGMA]>,
}

impl Profile {
    /// motif 长度 k
    #[inline]
    pub fn k(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn row(&self, j: usize) -> &[f64; SIGMA] {
        &self.rows[j]
    }

    /// 第 j 列生成符号 `b` 的概率；`b` 必须是 A/C/G/T。
    #[inline]
    pub fn prob(&self, j: usize, b: u8) -> f64 {
        match dna::to_index(b) {
            Some(a) => self.rows[j][a],
            None => 0.0,
        }
    }

    pub fn rows(&self) -> &[[f64; SIGMA]] {
        &self.rows
    }
}

/// 从任意一组长度为 k 的 motif 构建 profile。
pub fn build_profile<'m, I>(motifs: I, k: usize) -> Profile
where
    I: IntoIterator<Item = &'m [u8]>,
{
    let mut counts = vec![[0u32; SIGMA]; k];
    let mut m = 0u32;
    for motif in motifs {
        m += 1;
        for (col, &b) in counts.iter_mut().zip(motif) {
            if let Some(a) = dna::to_index(b) {
                col[a] += 1;
            }
        }
    }

    let denom = (m + SIGMA as u32) as f64;
    let rows = counts
        .iter()
        .map(|col| {
            let mut row = [0.0f64; SIGMA];
            for (p, &c) in row.iter_mut().zip(col) {
                *p = (c + 1) as f64 / denom;
            }
            row
        })
        .collect();
    Profile { rows }
}

/// 排除第 `skip` 条后构建 profile（Gibbs 迭代中的"移出"步骤），不修改 motif 集合。
pub fn profile_excluding(corpus: &Corpus, set: &MotifSet, skip: usize) -> Profile {
    build_profile(set.motifs_excluding(corpus, skip), corpus.k())
}
