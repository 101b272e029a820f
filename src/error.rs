use rand::distributions::WeightedError;
use thiserror::Error;

/// 采样核心的前置条件错误。
///
/// 语料在 [`crate::motif::Corpus::new`] 处一次性校验，之后的采样过程不再失败。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MotifError {
    #[error("corpus contains no sequences")]
    EmptyCorpus,

    #[error("motif length k must be at least 1")]
    ZeroMotifLength,

    #[error("sequence {index} has length {len}, shorter than motif length {k}")]
    SequenceTooShort { index: usize, len: usize, k: usize },

    #[error("t = {expected} does not match corpus size {actual}")]
    CorpusSizeMismatch { expected: usize, actual: usize },

    #[error("sequence {index} has symbol '{symbol}' at position {pos}, expected one of A/C/G/T")]
    InvalidSymbol { index: usize, pos: usize, symbol: char },

    #[error("options ask for motif length {opt} but the corpus was built for {corpus}")]
    MotifLengthMismatch { opt: usize, corpus: usize },

    #[error("{name} must be at least 1")]
    ZeroParameter { name: &'static str },

    #[error("invalid k-mer weights: {0}")]
    Weights(#[from] WeightedError),
}

pub type Result<T> = std::result::Result<T, MotifError>;
