use crate::error::{MotifError, Result};
use crate::util::dna;

/// 内置的默认数据集：5 条长度为 10 的序列。
pub const DEFAULT_DNA: [&str; 5] = [
    "TTACCTTAAC",
    "GATGTCTGTC",
    "CCGGCGTTAG",
    "CACTAACGAG",
    "CGTCAGAGGT",
];

pub fn default_sequences() -> Vec<Vec<u8>> {
    DEFAULT_DNA.iter().map(|s| s.as_bytes().to_vec()).collect()
}

/// 已校验的序列集合与 motif 长度 k。
///
/// 构造时一次性检查所有前置条件（非空、k >= 1、每条序列长度 >= k、
/// 仅含 A/C/G/T、t 与序列条数一致），之后采样过程可以假定输入合法。
#[derive(Debug, Clone)]
pub struct Corpus {
    seqs: Vec<Vec<u8>>,
    k: usize,
}

impl Corpus {
    /// `t` 为调用方声明的序列条数；为 `None` 时取实际条数。
    pub fn new(seqs: Vec<Vec<u8>>, k: usize, t: Option<usize>) -> Result<Self> {
        if seqs.is_empty() {
            return Err(MotifError::EmptyCorpus);
        }
        if k == 0 {
            return Err(MotifError::ZeroMotifLength);
        }
        if let Some(t) = t {
            if t != seqs.len() {
                return Err(MotifError::CorpusSizeMismatch { expected: t, actual: seqs.len() });
            }
        }
        for (index, seq) in seqs.iter().enumerate() {
            if let Some((pos, b)) = dna::first_invalid(seq) {
                return Err(MotifError::InvalidSymbol { index, pos, symbol: char::from(b) });
            }
            if seq.len() < k {
                return Err(MotifError::SequenceTooShort { index, len: seq.len(), k });
            }
        }
        Ok(Self { seqs, k })
    }

    pub fn from_strs<S: AsRef<str>>(seqs: &[S], k: usize) -> Result<Self> {
        let seqs = seqs
            .iter()
            .map(|s| dna::normalize_seq(s.as_ref().as_bytes()))
            .collect();
        Self::new(seqs, k, None)
    }

    /// 默认数据集，k 由调用方指定。
    pub fn default_dataset(k: usize) -> Result<Self> {
        Self::new(default_sequences(), k, None)
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// 序列条数 t
    #[inline]
    pub fn len(&self) -> usize {
        self.seqs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty()
    }

    #[inline]
    pub fn seq(&self, i: usize) -> &[u8] {
        &self.seqs[i]
    }

    pub fn seqs(&self) -> impl Iterator<Item = &[u8]> {
        self.seqs.iter().map(Vec::as_slice)
    }

    /// 第 i 条序列上最后一个合法起点 `len - k`
    #[inline]
    pub fn max_offset(&self, i: usize) -> usize {
        self.seqs[i].len() - self.k
    }

    #[inline]
    pub fn motif(&self, i: usize, offset: usize) -> &[u8] {
        &self.seqs[i][offset..offset + self.k]
    }
}

/// 每条序列一个 motif，按序列下标对齐，仅保存起点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifSet {
    offsets: Vec<usize>,
}

impl MotifSet {
    pub fn new(offsets: Vec<usize>) -> Self {
        Self { offsets }
    }

    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// 单下标替换，对应一次 Gibbs 迭代的重采样。
    #[inline]
    pub fn replace(&mut self, i: usize, offset: usize) {
        self.offsets[i] = offset;
    }

    pub fn motifs<'c>(&self, corpus: &'c Corpus) -> Vec<&'c [u8]> {
        self.offsets
            .iter()
            .enumerate()
            .map(|(i, &off)| corpus.motif(i, off))
            .collect()
    }

    /// 除第 `skip` 条以外的全部 motif
    pub fn motifs_excluding<'a, 'c: 'a>(&'a self, corpus: &'c Corpus, skip: usize) -> impl Iterator<Item = &'c [u8]> + 'a {
        self.offsets
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != skip)
            .map(move |(i, &off)| corpus.motif(i, off))
    }
}
