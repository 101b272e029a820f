//! # gibbs-motif
//!
//! 基于 Gibbs 采样的 DNA motif 查找。
//!
//! 给定 t 条序列与 motif 长度 k，在每条序列中各找一个长度为 k 的子串，
//! 使这组子串尽量一致（与 consensus 的错配数最少）。单次采样容易陷入局部最优，
//! 因此通过多次随机重启取最优结果。
//!
//! - **Profile**：由 t-1 个 motif 统计的 k × 4 概率矩阵（+1 伪计数）
//! - **k-mer 抽样**：按 profile 似然加权随机抽取新的 motif 起点
//! - **打分**：consensus 与错配数，平局按 A > C > G > T
//! - **重启**：多次独立采样，每块取最低分，得分序列交给调用方
//!
//! ## 快速示例
//!
//! ```rust,no_run
//! use gibbs_motif::motif::{gibbs_sampler, Corpus};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let corpus = Corpus::default_dataset(4).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let run = gibbs_sampler(&corpus, 30, &mut rng).unwrap();
//! println!("score={} consensus={}", run.score, run.consensus);
//! ```
//!
//! ## 模块说明
//!
//! - [`motif`] — 语料、profile、k-mer 抽样、打分、Gibbs 采样与重启
//! - [`io`] — FASTA 读取、文本报告、得分序列
//! - [`search`] — 串联采样与输出的完整搜索流程
//! - [`util`] — 核苷酸字母表

pub mod error;
pub mod io;
pub mod motif;
pub mod search;
pub mod util;

pub use error::{MotifError, Result};
