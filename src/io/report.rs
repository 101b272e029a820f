use anyhow::Result;
use std::io::Write;

use crate::motif::{BlockBest, Corpus, GibbsOpt, Highlight};

pub const BLOCK_SEPARATOR: &str = "**********************************************";

/// 文本报告：每个外层块写一段（得分、consensus、标出 motif 的原序列）。
///
/// ANSI 高亮的报告可用 `less -R` 查看。
pub struct ReportWriter<W: Write> {
    out: W,
    style: Highlight,
    outer: usize,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, style: Highlight, outer: usize) -> Self {
        Self { out, style, outer }
    }

    /// 报告头：生成时间与参数
    pub fn write_header(&mut self, opt: &GibbsOpt, corpus: &Corpus) -> Result<()> {
        writeln!(self.out, "# gibbs-motif {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.out, "# generated: {}", chrono::Utc::now().to_rfc3339())?;
        writeln!(
            self.out,
            "# k={} t={} N={} n_times={} N_outer={} seed={}",
            corpus.k(),
            corpus.len(),
            opt.iterations,
            opt.restarts,
            opt.outer,
            opt.seed
        )?;
        Ok(())
    }

    pub fn write_block(&mut self, block: &BlockBest, corpus: &Corpus) -> Result<()> {
        writeln!(self.out, "N = {} of {}", block.block + 1, self.outer)?;
        writeln!(self.out, "Consensus: {}", block.run.consensus)?;
        writeln!(self.out, "Score = {}", block.run.score)?;
        writeln!(self.out, "Motifs found after iterations:")?;
        for line in block.run.render(corpus, self.style) {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out, "{}", BLOCK_SEPARATOR)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motif::{GibbsRun, MotifSet};

    #[test]
    fn block_layout() {
        let corpus = Corpus::from_strs(&["TTACGA", "ACGTTT"], 3).unwrap();
        let block = BlockBest {
            block: 1,
            run_index: 4,
            run: GibbsRun {
                best: MotifSet::new(vec![2, 0]),
                score: 0,
                consensus: "ACG".to_string(),
                history: Vec::new(),
            },
        };
        let mut w = ReportWriter::new(Vec::new(), Highlight::Brackets, 3);
        w.write_block(&block, &corpus).unwrap();
        let text = String::from_utf8(w.finish().unwrap()).unwrap();
        let expected = "N = 2 of 3\n\
                        Consensus: ACG\n\
                        Score = 0\n\
                        Motifs found after iterations:\n\
                        TT[ACG]A\n\
                        [ACG]TTT\n";
        assert_eq!(text, format!("{}{}\n", expected, BLOCK_SEPARATOR));
    }

    #[test]
    fn header_lists_parameters() {
        let corpus = Corpus::default_dataset(4).unwrap();
        let opt = GibbsOpt { seed: 42, ..GibbsOpt::default() };
        let mut w = ReportWriter::new(Vec::new(), Highlight::Ansi, opt.outer);
        w.write_header(&opt, &corpus).unwrap();
        let text = String::from_utf8(w.finish().unwrap()).unwrap();
        assert!(text.contains("# k=4 t=5 N=30 n_times=60 N_outer=30 seed=42"));
        assert!(text.contains("# generated: "));
    }
}
