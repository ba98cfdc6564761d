use anyhow::Result;
use clap::Parser;
use dreamchain::storage::{load_common_words, load_config, load_corpus};
use dreamchain::{DreamConfig, DreamEngine};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Builds a word graph from a corpus and dreams new sentences out of it
#[derive(Parser, Debug)]
#[command(name = "dreamchain", version)]
struct Cli {
    /// Corpus to learn sentences from
    #[arg(long, env = "DREAMCHAIN_CORPUS", default_value = "./sawyer.txt")]
    corpus: PathBuf,

    /// Newline-delimited list of common words
    #[arg(long, env = "DREAMCHAIN_WORDS", default_value = "./top_1000.txt")]
    words: PathBuf,

    /// TOML file with dream settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    iterations: Option<usize>,

    /// Maximum words per generated sentence
    #[arg(long)]
    step_budget: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DreamConfig::default(),
    };
    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    if let Some(step_budget) = cli.step_budget {
        config.step_budget = step_budget;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sentences = load_corpus(&cli.corpus);
    let common_words = load_common_words(&cli.words);
    info!(
        "{} sentences from {}, {} common words from {}",
        sentences.len(),
        cli.corpus.display(),
        common_words.len(),
        cli.words.display()
    );

    let mut engine = DreamEngine::new(common_words, config);
    engine.load_corpus(&sentences, &mut rng);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    engine.dream(&mut out, &mut rng)?;
    out.flush()?;
    Ok(())
}
