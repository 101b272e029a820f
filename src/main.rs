use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use rand::Rng;

use gibbs_motif::io::fasta;
use gibbs_motif::motif::{default_sequences, Corpus, GibbsOpt, Highlight};
use gibbs_motif::search::{search_with_opt, SearchOutput};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "gibbs-motif", author, version, about = "Motif finding in DNA sequences with a Gibbs sampler", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for a shared motif with repeated Gibbs sampling
    Search {
        /// Input FASTA (built-in 5 x 10 dataset if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Motif length
        #[arg(short = 'k', long = "kmer", default_value_t = 4)]
        k: usize,
        /// Expected number of sequences; must match the input when given
        #[arg(short = 't', long = "num-seqs")]
        t: Option<usize>,
        /// Iterations inside one sampler run
        #[arg(short = 'N', long = "iterations", default_value_t = 30)]
        iterations: usize,
        /// Sampler runs per report block
        #[arg(short = 'r', long = "restarts", default_value_t = 60)]
        restarts: usize,
        /// Number of report blocks (defaults to the iteration count)
        #[arg(long = "outer")]
        outer: Option<usize>,
        /// Master random seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(long = "threads", default_value_t = 1)]
        threads: usize,
        /// Text report path
        #[arg(short, long, default_value = "gibbs_sampling_results.txt")]
        out: String,
        /// Score trace (TSV) path
        #[arg(long = "scores", default_value = "gibbs_sampler_scores.tsv")]
        scores: String,
        /// Optional JSON summary path
        #[arg(long = "json")]
        json: Option<String>,
        /// Mark motifs with [ ] instead of ANSI colors
        #[arg(long = "no-color")]
        no_color: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            input,
            k,
            t,
            iterations,
            restarts,
            outer,
            seed,
            threads,
            out,
            scores,
            json,
            no_color,
        } => {
            let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
            info!("master seed: {}", seed);
            let opt = GibbsOpt {
                k,
                iterations,
                restarts,
                outer: outer.unwrap_or_else(|| GibbsOpt::default_outer(iterations)),
                seed,
                threads,
            };
            let output = SearchOutput {
                report: Some(out),
                scores: Some(scores),
                json,
                style: if no_color { Highlight::Brackets } else { Highlight::Ansi },
            };
            run_search(input.as_deref(), t, opt, &output)
        }
    }
}

fn run_search(input: Option<&str>, t: Option<usize>, opt: GibbsOpt, output: &SearchOutput) -> Result<()> {
    opt.validate()?;
    let corpus = match input {
        Some(path) => Corpus::new(fasta::read_sequences(path)?, opt.k, t)?,
        None => Corpus::new(default_sequences(), opt.k, t)?,
    };

    println!(
        "Running Gibbs Sampler {} times in {} blocks, {} iterations each",
        opt.restarts, opt.outer, opt.iterations
    );
    let summary = search_with_opt(&corpus, &opt, output)?;

    if let Some(best) = summary.best_block() {
        println!("best score: {} (block {})", best.score, best.block + 1);
        println!("consensus: {}", best.consensus);
    }
    if let Some(c) = &summary.convergence {
        println!(
            "runs: {}  burn-in: {}  min score {} after run {}",
            c.runs, c.burn_in, c.min_score, c.min_run
        );
    }
    if let Some(p) = &output.report {
        println!("report: {}", p);
    }
    if let Some(p) = &output.scores {
        println!("score trace: {}", p);
    }
    println!("Done");
    Ok(())
}
