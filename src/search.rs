use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::Write;

use crate::io::report::ReportWriter;
use crate::io::trace::{write_trace_file, ConvergenceSummary};
use crate::motif::{repeat_gibbs_search, BlockBest, Corpus, GibbsOpt, Highlight};

/// 输出文件位置；`None` 表示不写该文件。
#[derive(Debug, Clone, Default)]
pub struct SearchOutput {
    pub report: Option<String>,
    pub scores: Option<String>,
    pub json: Option<String>,
    pub style: Highlight,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockSummary {
    pub block: usize,
    pub run_index: usize,
    pub score: u32,
    pub consensus: String,
    pub offsets: Vec<usize>,
}

impl From<&BlockBest> for BlockSummary {
    fn from(b: &BlockBest) -> Self {
        Self {
            block: b.block,
            run_index: b.run_index,
            score: b.run.score,
            consensus: b.run.consensus.clone(),
            offsets: b.run.best.offsets().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    pub options: GibbsOpt,
    pub blocks: Vec<BlockSummary>,
    /// 每次采样的最终得分，长度为 N_outer × n_times
    pub scores: Vec<u32>,
    pub convergence: Option<ConvergenceSummary>,
}

impl SearchSummary {
    /// 所有块中得分最低的一个（相同得分取最早的块）
    pub fn best_block(&self) -> Option<&BlockSummary> {
        self.blocks.iter().min_by_key(|b| (b.score, b.block))
    }
}

fn create_file(path: &str, what: &str) -> Result<std::io::BufWriter<std::fs::File>> {
    let fh = std::fs::File::create(path).map_err(|e| anyhow!("cannot create {} '{}': {}", what, path, e))?;
    Ok(std::io::BufWriter::new(fh))
}

/// 运行完整搜索并写出报告、得分序列与 JSON 摘要。
///
/// 报告文件只打开一次，逐块顺序写入，全部外层块结束后关闭。
pub fn search_with_opt(corpus: &Corpus, opt: &GibbsOpt, output: &SearchOutput) -> Result<SearchSummary> {
    opt.check_corpus(corpus)?;
    let mut rng = StdRng::seed_from_u64(opt.seed);
    let mut scores = Vec::with_capacity(opt.total_runs());
    let mut blocks = Vec::with_capacity(opt.outer);

    let mut report = match &output.report {
        Some(p) => {
            let mut w = ReportWriter::new(create_file(p, "report")?, output.style, opt.outer);
            w.write_header(opt, corpus)?;
            Some(w)
        }
        None => None,
    };

    repeat_gibbs_search(corpus, opt, &mut rng, &mut scores, |b: &BlockBest| -> Result<()> {
        if let Some(w) = report.as_mut() {
            w.write_block(b, corpus)?;
        }
        blocks.push(BlockSummary::from(b));
        Ok(())
    })?;

    if let Some(w) = report {
        w.finish()?;
    }

    let summary = SearchSummary {
        options: *opt,
        blocks,
        convergence: ConvergenceSummary::from_scores(&scores),
        scores,
    };

    if let Some(p) = &output.scores {
        write_trace_file(p, &summary.scores)?;
    }
    if let Some(p) = &output.json {
        let mut out = create_file(p, "JSON summary")?;
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
        out.flush()?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("gibbs_motif_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    fn small_opt(seed: u64) -> GibbsOpt {
        GibbsOpt { k: 4, iterations: 30, restarts: 10, outer: 3, seed, threads: 1 }
    }

    #[test]
    fn search_without_files() {
        let corpus = Corpus::default_dataset(4).unwrap();
        let summary = search_with_opt(&corpus, &small_opt(1), &SearchOutput::default()).unwrap();
        assert_eq!(summary.blocks.len(), 3);
        assert_eq!(summary.scores.len(), 30);
        let conv = summary.convergence.unwrap();
        assert_eq!(conv.runs, 30);
        assert_eq!(conv.burn_in, 3);
        let best = summary.best_block().unwrap();
        assert_eq!(best.score, summary.blocks.iter().map(|b| b.score).min().unwrap());
        assert_eq!(best.offsets.len(), 5);
    }

    #[test]
    fn seed_makes_search_reproducible() {
        let corpus = Corpus::default_dataset(4).unwrap();
        let a = search_with_opt(&corpus, &small_opt(8), &SearchOutput::default()).unwrap();
        let b = search_with_opt(&corpus, &small_opt(8), &SearchOutput::default()).unwrap();
        assert_eq!(a.scores, b.scores);
        let key = |s: &SearchSummary| s.blocks.iter().map(|b| (b.score, b.consensus.clone())).collect::<Vec<_>>();
        assert_eq!(key(&a), key(&b));
    }

    #[test]
    fn writes_all_artifacts() {
        let corpus = Corpus::default_dataset(4).unwrap();
        let output = SearchOutput {
            report: Some(tmp("report.txt")),
            scores: Some(tmp("scores.tsv")),
            json: Some(tmp("summary.json")),
            style: Highlight::Brackets,
        };
        let summary = search_with_opt(&corpus, &small_opt(3), &output).unwrap();

        let report = std::fs::read_to_string(output.report.as_ref().unwrap()).unwrap();
        assert_eq!(report.matches("Consensus: ").count(), 3);
        assert!(report.contains("N = 3 of 3"));
        assert_eq!(report.matches('[').count(), 15);

        let trace = std::fs::read_to_string(output.scores.as_ref().unwrap()).unwrap();
        assert_eq!(trace.lines().count(), 31);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output.json.as_ref().unwrap()).unwrap()).unwrap();
        assert_eq!(json["scores"].as_array().unwrap().len(), 30);
        assert_eq!(json["options"]["restarts"], 10);
        assert_eq!(json["blocks"][0]["score"], summary.blocks[0].score);

        for p in [&output.report, &output.scores, &output.json] {
            std::fs::remove_file(p.as_ref().unwrap()).unwrap();
        }
    }

    #[test]
    fn unwritable_report_is_an_error() {
        let corpus = Corpus::default_dataset(4).unwrap();
        let output = SearchOutput {
            report: Some("/nonexistent-dir/report.txt".to_string()),
            ..SearchOutput::default()
        };
        let err = search_with_opt(&corpus, &small_opt(1), &output).unwrap_err();
        assert!(err.to_string().contains("cannot create report"));
    }

    #[test]
    fn k_mismatch_fails_before_report_is_created() {
        let corpus = Corpus::default_dataset(5).unwrap();
        let output = SearchOutput { report: Some(tmp("mismatch_report.txt")), ..SearchOutput::default() };
        let err = search_with_opt(&corpus, &small_opt(1), &output).unwrap_err();
        assert!(err.to_string().contains("motif length 4"));
        assert!(!std::path::Path::new(output.report.as_ref().unwrap()).exists());
    }
}
