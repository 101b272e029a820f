use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::Result;

use super::profile::Profile;

/// profile 生成 `kmer` 的概率（各列概率连乘）。
pub fn likelihood(kmer: &[u8], profile: &Profile) -> f64 {
    kmer.iter()
        .enumerate()
        .map(|(j, &b)| profile.prob(j, b))
        .product()
}

fn log_likelihood(kmer: &[u8], profile: &Profile) -> f64 {
    kmer.iter()
        .enumerate()
        .map(|(j, &b)| profile.prob(j, b).ln())
        .sum()
}

/// `seq` 上全部 `n - k + 1` 个起点的归一化权重，和为 1。
///
/// 在对数空间累加并减去最大值后再取指数，k 很大时也不会全部下溢为 0；
/// 归一化后的分布与直接连乘相同。
pub fn kmer_weights(seq: &[u8], profile: &Profile) -> Vec<f64> {
    let k = profile.k();
    debug_assert!(k >= 1 && seq.len() >= k);
    let logs: Vec<f64> = seq.windows(k).map(|w| log_likelihood(w, profile)).collect();
    let max = logs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut weights: Vec<f64> = logs.iter().map(|&l| (l - max).exp()).collect();
    let total: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    weights
}

/// 按 profile 似然加权随机抽取一个起点（不是取最大值）。
pub fn sample_offset<R: Rng + ?Sized>(seq: &[u8], profile: &Profile, rng: &mut R) -> Result<usize> {
    let n_offsets = seq.len() + 1 - profile.k();
    if n_offsets == 1 {
        return Ok(0);
    }
    let dist = WeightedIndex::new(kmer_weights(seq, profile))?;
    Ok(dist.sample(rng))
}

/// 同 [`sample_offset`]，直接返回抽中的子串。
pub fn sample_kmer<'s, R: Rng + ?Sized>(seq: &'s [u8], profile: &Profile, rng: &mut R) -> Result<&'s [u8]> {
    let off = sample_offset(seq, profile, rng)?;
    Ok(&seq[off..off + profile.k()])
}
