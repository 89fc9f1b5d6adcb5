//! Timing experiment around the search algorithms: sample patterns of
//! several lengths from a corpus, time every algorithm on each of them,
//! and report the table.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use algos::Algorithm;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

pub const DEFAULT_LENGTHS: &[usize] = &[5, 10, 50, 100, 200];
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("failed to read corpus {path:?}")]
    Corpus {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corpus has {corpus_len} bytes, cannot sample a pattern of length {pattern_len}")]
    CorpusTooShort { corpus_len: usize, pattern_len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub corpus: PathBuf,
    pub lengths: Vec<usize>,
    pub seed: u64,
    pub repeat: usize,
}

impl ExperimentConfig {
    pub fn new(corpus: impl Into<PathBuf>) -> Self {
        Self {
            corpus: corpus.into(),
            lengths: DEFAULT_LENGTHS.to_vec(),
            seed: DEFAULT_SEED,
            repeat: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub algorithm: Algorithm,
    pub elapsed: Duration,
    pub result: Option<usize>,
}

/// One row of the experiment: a pattern length and what each algorithm did with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkEntry {
    pub pattern_len: usize,
    pub timings: Vec<Timing>,
}

impl BenchmarkEntry {
    pub fn timing(&self, algorithm: Algorithm) -> Option<&Timing> {
        self.timings.iter().find(|t| t.algorithm == algorithm)
    }

    /// True when every algorithm returned the same position.
    pub fn agrees(&self) -> bool {
        self.timings
            .windows(2)
            .all(|pair| pair[0].result == pair[1].result)
    }
}

pub fn load_corpus(path: &Path) -> Result<Vec<u8>, ExperimentError> {
    let mut buf = Vec::new();
    let read = if path.as_os_str() == "-" {
        io::stdin().read_to_end(&mut buf)
    } else {
        File::open(path).and_then(|mut f| f.read_to_end(&mut buf))
    };
    read.map_err(|source| ExperimentError::Corpus {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded corpus {:?} ({} bytes)", path, buf.len());
    Ok(buf)
}

/// Cut one substring of each requested length out of `text`.
/// The same seed always yields the same patterns.
pub fn sample_patterns(
    text: &[u8],
    lengths: &[usize],
    seed: u64,
) -> Result<Vec<Vec<u8>>, ExperimentError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = text.len();

    lengths
        .iter()
        .map(|&len| {
            if len > n {
                return Err(ExperimentError::CorpusTooShort {
                    corpus_len: n,
                    pattern_len: len,
                });
            }
            let start = rng.gen_range(0..=n - len);
            log::debug!("sample_patterns: len={} start={}", len, start);
            Ok(text[start..start + len].to_vec())
        })
        .collect()
}

/// Time a single search call.
pub fn time_search(algorithm: Algorithm, text: &[u8], pattern: &[u8]) -> (Option<usize>, Duration) {
    let start = Instant::now();
    let result = algorithm.search(text, pattern);
    (result, start.elapsed())
}

/// Run every algorithm on every pattern, keeping the fastest of `repeat` runs.
pub fn run_experiment(text: &[u8], patterns: &[Vec<u8>], repeat: usize) -> Vec<BenchmarkEntry> {
    let repeat = repeat.max(1);

    patterns
        .iter()
        .map(|pattern| {
            let timings = Algorithm::ALL
                .iter()
                .map(|&algorithm| {
                    let mut best = Duration::MAX;
                    let mut result = None;
                    for _ in 0..repeat {
                        let (found, elapsed) = time_search(algorithm, text, pattern);
                        best = best.min(elapsed);
                        result = found;
                    }
                    log::debug!(
                        "run_experiment: algo={} len={} elapsed={:?} result={:?}",
                        algorithm,
                        pattern.len(),
                        best,
                        result
                    );
                    Timing {
                        algorithm,
                        elapsed: best,
                        result,
                    }
                })
                .collect();

            BenchmarkEntry {
                pattern_len: pattern.len(),
                timings,
            }
        })
        .collect()
}

/// Rows where the algorithms did not return the same position.
pub fn mismatches(entries: &[BenchmarkEntry]) -> Vec<&BenchmarkEntry> {
    entries.iter().filter(|e| !e.agrees()).collect()
}

/// Load, sample and time according to `config`.
pub fn run(config: &ExperimentConfig) -> Result<Vec<BenchmarkEntry>, ExperimentError> {
    let text = load_corpus(&config.corpus)?;
    let patterns = sample_patterns(&text, &config.lengths, config.seed)?;
    let entries = run_experiment(&text, &patterns, config.repeat);

    for entry in mismatches(&entries) {
        log::warn!(
            "algorithms disagree for pattern length {}: {:?}",
            entry.pattern_len,
            entry.timings
        );
    }

    Ok(entries)
}

fn csv_column(algorithm: Algorithm) -> String {
    format!("{}_s", algorithm.name().replace('-', "_"))
}

/// Write `pattern_len,naive_s,kmp_s,boyer_moore_s` rows, durations in seconds.
pub fn write_csv<W: Write>(writer: W, entries: &[BenchmarkEntry]) -> Result<(), ExperimentError> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["pattern_len".to_string()];
    header.extend(Algorithm::ALL.iter().map(|&a| csv_column(a)));
    wtr.write_record(&header)?;

    for entry in entries {
        let mut record = vec![entry.pattern_len.to_string()];
        for algorithm in Algorithm::ALL {
            let secs = entry
                .timing(algorithm)
                .map(|t| t.elapsed.as_secs_f64().to_string())
                .unwrap_or_default();
            record.push(secs);
        }
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn print_summary_table<W: Write>(out: &mut W, entries: &[BenchmarkEntry]) -> io::Result<()> {
    writeln!(out, "\n\n{:=^80}", " RESULTS SUMMARY ")?;
    write!(out, "{:>12}", "Pattern len")?;
    for algorithm in Algorithm::ALL {
        write!(out, " | {:>18}", format!("{} (µs)", algorithm))?;
    }
    writeln!(out, " | {:>8}", "Match")?;
    writeln!(out, "{:-^80}", "")?;

    for entry in entries {
        write!(out, "{:>12}", entry.pattern_len)?;
        for algorithm in Algorithm::ALL {
            let micros = entry
                .timing(algorithm)
                .map(|t| t.elapsed.as_nanos() as f64 / 1000.0)
                .unwrap_or(f64::NAN);
            write!(out, " | {:>18.2}", micros)?;
        }
        let matched = match entry.timings.first().and_then(|t| t.result) {
            Some(index) if entry.agrees() => index.to_string(),
            None if entry.agrees() => "none".to_string(),
            _ => "MISMATCH".to_string(),
        };
        writeln!(out, " | {:>8}", matched)?;
    }
    writeln!(out, "{:=^80}", " END ")
}
