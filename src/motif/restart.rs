use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{MotifError, Result};

use super::corpus::Corpus;
use super::gibbs::{gibbs_sampler, GibbsRun};
use super::GibbsOpt;

/// 一个外层块内得分最低的那次采样。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBest {
    /// 外层块序号（从 0 开始）
    pub block: usize,
    /// 该次采样在块内的序号
    pub run_index: usize,
    pub run: GibbsRun,
}

/// 按得分稳定排序后取第一个；得分相同时保留先跑的那次。
pub fn select_best(runs: Vec<GibbsRun>) -> Option<(usize, GibbsRun)> {
    let mut ranked: Vec<(usize, GibbsRun)> = runs.into_iter().enumerate().collect();
    ranked.sort_by_key(|(_, r)| r.score);
    ranked.into_iter().next()
}

/// 每个种子对应一次独立采样，结果按种子顺序返回，与线程数无关。
fn run_block(corpus: &Corpus, iterations: usize, seeds: &[u64], pool: Option<&rayon::ThreadPool>) -> Result<Vec<GibbsRun>> {
    let one = |&seed: &u64| gibbs_sampler(corpus, iterations, &mut StdRng::seed_from_u64(seed));
    match pool {
        Some(pool) => pool.install(|| seeds.par_iter().map(one).collect()),
        None => seeds.iter().map(one).collect(),
    }
}

/// 重复 Gibbs 搜索：共 `opt.outer` 个外层块，每块 `opt.restarts` 次独立采样。
///
/// - 每块结束时把块内最优结果交给 `on_block`（通常由报告写入器消费）；
/// - 每次采样的最终得分按运行顺序追加到 `scores`，由调用方持有，
///   结束时新增 `opt.outer * opt.restarts` 个元素；
/// - 各次采样的种子按顺序从 `rng` 派生，`threads > 1` 时并行执行，输出不变。
///
/// `opt.k` 必须与 `corpus.k()` 一致。
pub fn repeat_gibbs_search<R, E, F>(
    corpus: &Corpus,
    opt: &GibbsOpt,
    rng: &mut R,
    scores: &mut Vec<u32>,
    mut on_block: F,
) -> std::result::Result<(), E>
where
    R: Rng + ?Sized,
    E: From<MotifError>,
    F: FnMut(&BlockBest) -> std::result::Result<(), E>,
{
    opt.check_corpus(corpus)?;

    let pool = if opt.threads > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(opt.threads).build() {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("cannot build thread pool ({}), running restarts sequentially", e);
                None
            }
        }
    } else {
        None
    };

    scores.reserve(opt.total_runs());
    for block in 0..opt.outer {
        let seeds: Vec<u64> = (0..opt.restarts).map(|_| rng.gen()).collect();
        let runs = run_block(corpus, opt.iterations, &seeds, pool.as_ref())?;
        for (i, r) in runs.iter().enumerate() {
            debug!("block {} run {}: score {} consensus {}", block + 1, i, r.score, r.consensus);
        }
        scores.extend(runs.iter().map(|r| r.score));

        let (run_index, run) = select_best(runs).ok_or(MotifError::ZeroParameter { name: "restarts" })?;
        info!(
            "block {}/{}: best score {} consensus {} (run {})",
            block + 1,
            opt.outer,
            run.score,
            run.consensus,
            run_index
        );
        on_block(&BlockBest { block, run_index, run })?;
    }
    Ok(())
}

/// 同 [`repeat_gibbs_search`]，收集所有块的最优结果。
pub fn collect_blocks<R: Rng + ?Sized>(
    corpus: &Corpus,
    opt: &GibbsOpt,
    rng: &mut R,
    scores: &mut Vec<u32>,
) -> Result<Vec<BlockBest>> {
    let mut blocks = Vec::with_capacity(opt.outer);
    repeat_gibbs_search(corpus, opt, rng, scores, |b: &BlockBest| -> Result<()> {
        blocks.push(b.clone());
        Ok(())
    })?;
    Ok(blocks)
}
