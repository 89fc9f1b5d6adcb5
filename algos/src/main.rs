use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use algos::{Algorithm, BYTE_ALPHABET, BadCharSearcher, SymbolOrigin, check_alphabet};
use clap::Parser;

/// Example:
/// time cargo run --release --bin algos -- -t data/pride_and_prejudice.txt --pattern "Darcy" -a kmp --measure-time
/// restrict Boyer–Moore to a smaller alphabet with --alphabet-size 128
#[derive(Debug, clap::Parser)]
#[command(
    name = "string-search",
    about = "Find the first occurrence of one pattern in one or more texts"
)]
struct Cli {
    #[arg(short, long, value_enum)]
    algo: Algorithm,

    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    /// Alphabet size every byte of text and pattern must fit in (1..=256).
    /// Boyer–Moore sizes its bad-character table to it.
    #[arg(
        long = "alphabet-size",
        value_name = "N",
        value_parser = clap::value_parser!(u16).range(1..=BYTE_ALPHABET as i64)
    )]
    alphabet_size: Option<u16>,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the search algorithm
    #[arg(long)]
    measure_time: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let pattern = load_pattern(&cli)?;

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={}, pattern-length={}",
        cli.algo,
        pattern.len()
    )?;
    if let Some(size) = cli.alphabet_size {
        writeln!(out, "# alphabet-size={}", size)?;
    }

    for text_path in &cli.texts {
        let text = load_text(text_path)?;
        log::debug!("loaded {:?}: {} bytes", text_path, text.len());

        let (found, duration) = run_algorithm(&cli, &text, &pattern)?;

        writeln!(out, "text={:?}", text_path)?;

        if let Some(d) = duration {
            writeln!(out, "execution_time: {}ns", d.as_nanos())?;
        }

        match found {
            Some(index) => writeln!(out, "match: {}", index)?,
            None => writeln!(out, "match: none")?,
        }
        writeln!(out)?;
    }

    Ok(())
}

fn load_pattern(cli: &Cli) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.as_bytes().to_vec())
    } else if let Some(ref path) = cli.pattern_file {
        load_text(path)
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn load_text(path: &PathBuf) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    if path.as_os_str() == "-" {
        io::stdin().read_to_end(&mut buf)?;
    } else {
        File::open(path)?.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

fn run_algorithm(
    cli: &Cli,
    text: &[u8],
    pattern: &[u8],
) -> Result<(Option<usize>, Option<Duration>), Box<dyn std::error::Error>> {
    let alphabet_size = cli.alphabet_size.map(usize::from);

    // alphabet checks stay outside the timed window for every algorithm
    if let Some(size) = alphabet_size {
        check_alphabet(pattern, size, SymbolOrigin::Pattern)?;
        check_alphabet(text, size, SymbolOrigin::Text)?;
    }

    let start = if cli.measure_time {
        Some(Instant::now())
    } else {
        None
    };

    let found = match (cli.algo, alphabet_size) {
        (Algorithm::BoyerMoore, Some(size)) => BadCharSearcher::new(pattern, size)?.find(text),
        (algo, _) => algo.search(text, pattern),
    };

    let duration = start.map(|s| s.elapsed());

    Ok((found, duration))
}
