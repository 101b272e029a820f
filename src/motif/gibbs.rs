use log::trace;
use rand::Rng;

use crate::error::Result;

use super::corpus::{Corpus, MotifSet};
use super::kmer::sample_offset;
use super::profile::profile_excluding;
use super::render::{mark_motif, Highlight};
use super::score::score_motifs;

/// 一次 Gibbs 采样的结果：迭代过程中得分最低的 motif 集合。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GibbsRun {
    pub best: MotifSet,
    pub score: u32,
    pub consensus: String,
    /// 每次迭代结束时的最优得分，长度为 N
    pub history: Vec<u32>,
}

impl GibbsRun {
    pub fn motifs<'c>(&self, corpus: &'c Corpus) -> Vec<&'c [u8]> {
        self.best.motifs(corpus)
    }

    /// 逐条序列标出最优 motif 的位置
    pub fn render(&self, corpus: &Corpus, style: Highlight) -> Vec<String> {
        corpus
            .seqs()
            .zip(self.best.offsets())
            .map(|(seq, &off)| mark_motif(seq, off, corpus.k(), style))
            .collect()
    }
}

/// 随机选取初始 motif：每条序列在 `[0, len - k]` 中均匀取一个起点。
pub fn random_motifs<R: Rng + ?Sized>(corpus: &Corpus, rng: &mut R) -> MotifSet {
    let offsets = (0..corpus.len())
        .map(|i| rng.gen_range(0..=corpus.max_offset(i)))
        .collect();
    MotifSet::new(offsets)
}

/// 执行一次 `iterations` 轮的 Gibbs 采样。
///
/// 每轮随机选一条序列 i，用其余 t-1 个 motif 构建 profile，
/// 再按 profile 似然在序列 i 上重新抽取 motif。
/// 只有得分严格下降时才整体替换最优集合（起点、得分、consensus 一起更新）。
/// `iterations == 0` 时直接返回随机初始集合。
pub fn gibbs_sampler<R: Rng + ?Sized>(corpus: &Corpus, iterations: usize, rng: &mut R) -> Result<GibbsRun> {
    let t = corpus.len();
    let mut motifs = random_motifs(corpus, rng);
    let (mut best_consensus, mut best_score) = score_motifs(&motifs.motifs(corpus));
    let mut best = motifs.clone();
    let mut history = Vec::with_capacity(iterations);

    for iter in 0..iterations {
        let i = rng.gen_range(0..t);
        let profile = profile_excluding(corpus, &motifs, i);
        let off = sample_offset(corpus.seq(i), &profile, rng)?;
        motifs.replace(i, off);

        let (consensus, score) = score_motifs(&motifs.motifs(corpus));
        if score < best_score {
            trace!("iteration {}: score {} -> {}", iter, best_score, score);
            best = motifs.clone();
            best_score = score;
            best_consensus = consensus;
        }
        history.push(best_score);
    }

    Ok(GibbsRun {
        best,
        score: best_score,
        consensus: best_consensus,
        history,
    })
}
