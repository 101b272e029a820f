pub mod corpus;
pub mod gibbs;
pub mod kmer;
pub mod profile;
pub mod render;
pub mod restart;
pub mod score;

use serde::{Deserialize, Serialize};

use crate::error::{MotifError, Result};

pub use corpus::{default_sequences, Corpus, MotifSet, DEFAULT_DNA};
pub use gibbs::{gibbs_sampler, GibbsRun};
pub use kmer::{kmer_weights, sample_kmer, sample_offset};
pub use profile::{build_profile, profile_excluding, Profile};
pub use render::{mark_motif, Highlight};
pub use restart::{repeat_gibbs_search, BlockBest};
pub use score::score_motifs;

/// 搜索参数。默认值：k=4, N=30, n_times=60，外层次数见 [`GibbsOpt::default_outer`]。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GibbsOpt {
    /// motif 长度 k
    pub k: usize,
    /// 单次采样的迭代次数 N
    pub iterations: usize,
    /// 每个外层块内的重启次数 n_times
    pub restarts: usize,
    /// 外层块数 N_outer
    pub outer: usize,
    /// 主随机种子，各次重启的种子由它派生
    pub seed: u64,
    pub threads: usize,
}

impl Default for GibbsOpt {
    fn default() -> Self {
        Self {
            k: 4,
            iterations: 30,
            restarts: 60,
            outer: Self::default_outer(30),
            seed: 0,
            threads: 1,
        }
    }
}

impl GibbsOpt {
    /// 未指定外层块数时取 N；N = 0 时仍至少输出一块（随机初始集合即结果）。
    pub fn default_outer(iterations: usize) -> usize {
        iterations.max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(MotifError::ZeroMotifLength);
        }
        if self.restarts == 0 {
            return Err(MotifError::ZeroParameter { name: "restarts" });
        }
        if self.outer == 0 {
            return Err(MotifError::ZeroParameter { name: "outer" });
        }
        if self.threads == 0 {
            return Err(MotifError::ZeroParameter { name: "threads" });
        }
        Ok(())
    }

    /// 参数自身合法，且 k 与语料一致
    pub fn check_corpus(&self, corpus: &Corpus) -> Result<()> {
        self.validate()?;
        if self.k != corpus.k() {
            return Err(MotifError::MotifLengthMismatch { opt: self.k, corpus: corpus.k() });
        }
        Ok(())
    }

    /// 总采样次数 N_outer × n_times，即得分序列的长度
    pub fn total_runs(&self) -> usize {
        self.outer * self.restarts
    }
}
