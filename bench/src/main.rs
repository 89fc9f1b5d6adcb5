use std::fs::File;
use std::io;
use std::path::PathBuf;

use bench::{
    DEFAULT_LENGTHS, DEFAULT_SEED, ExperimentConfig, print_summary_table, run, write_csv,
};
use clap::Parser;

/// Example:
/// cargo run --release --bin bench -- data/pride_and_prejudice.txt --lengths 5,10,50,100,200 --csv results.csv
#[derive(Debug, clap::Parser)]
#[command(
    name = "search-bench",
    about = "Time naive, KMP and Boyer–Moore search on random patterns drawn from a corpus"
)]
struct Cli {
    /// Corpus to sample patterns from and search in ("-" for stdin)
    #[arg(value_name = "CORPUS")]
    corpus: PathBuf,

    /// Pattern lengths to sample, one pattern per length
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_LENGTHS.to_vec()
    )]
    lengths: Vec<usize>,

    /// Seed for pattern sampling; equal seeds give equal patterns
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Runs per (algorithm, pattern); the fastest one is reported
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,

    /// Also write the rows as CSV to this file
    #[arg(long, value_name = "CSV")]
    csv: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    println!("--- Starting Benchmark ---");

    let config = ExperimentConfig {
        corpus: cli.corpus,
        lengths: cli.lengths,
        seed: cli.seed,
        repeat: cli.repeat,
    };
    println!(
        "> Corpus {:?}, lengths {:?}, seed {}",
        config.corpus, config.lengths, config.seed
    );

    let entries = run(&config)?;

    print_summary_table(&mut io::stdout().lock(), &entries)?;

    if let Some(path) = cli.csv {
        write_csv(File::create(&path)?, &entries)?;
        println!("> Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_the_library() {
        let cli = Cli::try_parse_from(["bench", "corpus.txt"]).unwrap();
        assert_eq!(cli.lengths, DEFAULT_LENGTHS);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.repeat, 1);
        assert!(cli.csv.is_none());
    }

    #[test]
    fn lengths_are_comma_separated() {
        let cli = Cli::try_parse_from(["bench", "corpus.txt", "--lengths", "3,7"]).unwrap();
        assert_eq!(cli.lengths, vec![3, 7]);
    }
}
