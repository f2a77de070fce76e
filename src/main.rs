//! Wordle Deducer - CLI
//!
//! Builds pattern indexes from word lists and deduces daily answers from
//! shared results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wordle_deducer::{
    commands::{
        BuildConfig, analyze_index, discriminate_words, find_impossible, narrow, run_build,
        run_deduce,
    },
    config::{DeductionConfig, RetryPolicy},
    core::Pattern,
    index::{PatternIndex, load_index},
    output::{
        print_analysis_result, print_build_result, print_deduce_report, print_discriminate_result,
        print_impossible_result, print_narrow_result,
    },
    session::{JsonFileStore, MemoryStore, PuzzleId, ReplayFeed},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_deducer",
    about = "Deduce the daily Wordle answer from shared feedback patterns",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a pattern index from answer and guess lists
    Build {
        /// File with one possible answer per line
        #[arg(short, long)]
        answers: PathBuf,

        /// File with one allowed guess per line
        #[arg(short, long)]
        guesses: PathBuf,

        /// Where to write the index
        #[arg(short, long, default_value = "index.json")]
        out: PathBuf,

        /// Answers scored per parallel task
        #[arg(long, default_value = "64")]
        chunk_size: usize,
    },

    /// Summarize an index
    Analyze {
        #[arg(short, long)]
        index: PathBuf,

        /// Number of largest buckets to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// List answer pairs no pattern can tell apart
    Impossible {
        #[arg(short, long)]
        index: PathBuf,

        #[arg(short, long)]
        answers: PathBuf,
    },

    /// Show the patterns that separate two words
    Discriminate {
        #[arg(short, long)]
        index: PathBuf,
        first: String,
        second: String,
    },

    /// Narrow the answers with patterns like `..X.O`
    Narrow {
        #[arg(short, long)]
        index: PathBuf,

        #[arg(required = true)]
        patterns: Vec<String>,
    },

    /// Deduce a puzzle's answer from saved posts
    Deduce {
        #[arg(short, long)]
        index: PathBuf,

        #[arg(short, long)]
        answers: PathBuf,

        /// JSON array of `{"source", "text"}` posts
        #[arg(long)]
        posts: PathBuf,

        /// Puzzle number (default: today's)
        #[arg(short, long)]
        puzzle: Option<u32>,

        /// Solution store; answers found are remembered here
        #[arg(short, long)]
        state: Option<PathBuf>,

        #[arg(long, default_value = "60")]
        max_pages: usize,

        #[arg(long, default_value = "100")]
        page_size: usize,

        /// Randomly keep at most this many posts per page
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        sample: Option<u64>,

        /// Retries per page after a transient failure
        #[arg(long, default_value = "3")]
        retries: u32,

        /// Do not record the answer in the store
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build {
            answers,
            guesses,
            out,
            chunk_size,
        } => {
            let config = BuildConfig {
                answers,
                guesses,
                output: out,
                chunk_size,
                progress: true,
            };
            let result = run_build(&config).context("Failed to build index")?;
            print_build_result(&result);
        }
        Commands::Analyze { index, top } => {
            let index = open_index(&index)?;
            print_analysis_result(&analyze_index(&index, top));
        }
        Commands::Impossible { index, answers } => {
            let index = open_index(&index)?;
            let answers = open_answers(&answers, &index)?;
            print_impossible_result(&find_impossible(&index, &answers, true));
        }
        Commands::Discriminate {
            index,
            first,
            second,
        } => {
            let index = open_index(&index)?;
            let result = discriminate_words(&index, &first, &second)?;
            print_discriminate_result(&result);
        }
        Commands::Narrow { index, patterns } => {
            let index = open_index(&index)?;
            let patterns = patterns
                .iter()
                .map(|p| p.parse::<Pattern>())
                .collect::<Result<Vec<_>, _>>()?;
            print_narrow_result(&narrow(&index, &patterns)?);
        }
        Commands::Deduce {
            index,
            answers,
            posts,
            puzzle,
            state,
            max_pages,
            page_size,
            sample,
            retries,
            dry_run,
        } => {
            let index = open_index(&index)?;
            let answers = open_answers(&answers, &index)?;
            let mut feed = ReplayFeed::load(&posts)
                .with_context(|| format!("Failed to load posts from {}", posts.display()))?;

            let puzzle = match puzzle {
                Some(number) => PuzzleId::new(number),
                None => PuzzleId::today().context("System clock is before the first puzzle")?,
            };
            let config = DeductionConfig::default()
                .with_max_pages(max_pages)
                .with_page_size(page_size)
                .with_sample_per_page(sample.and_then(|n| usize::try_from(n).ok()))
                .with_retry(RetryPolicy::new(retries, Duration::from_millis(500)));

            let report = match state {
                Some(path) => {
                    let mut store = JsonFileStore::open(&path)
                        .with_context(|| format!("Failed to open {}", path.display()))?;
                    let report = run_deduce(
                        &index, &answers, puzzle, &mut feed, &mut store, &config, dry_run,
                    )?;
                    store.close()?;
                    report
                }
                None => run_deduce(
                    &index,
                    &answers,
                    puzzle,
                    &mut feed,
                    &mut MemoryStore::new(),
                    &config,
                    dry_run,
                )?,
            };
            print_deduce_report(&report);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn open_index(path: &Path) -> Result<PatternIndex> {
    load_index(path).with_context(|| format!("Failed to load index from {}", path.display()))
}

/// Load an answer list and check it matches the index
fn open_answers(path: &Path, index: &PatternIndex) -> Result<WordList> {
    let answers =
        load_from_file(path).with_context(|| format!("Failed to load {}", path.display()))?;
    anyhow::ensure!(
        answers.word_len() == index.word_len(),
        "{} has {}-letter words but the index has {}",
        path.display(),
        answers.word_len(),
        index.word_len()
    );
    Ok(answers)
}
