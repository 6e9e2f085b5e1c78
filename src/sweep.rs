//!
//! Parameter sweep
//!
//! For every (target length, number of reads, k) combination: generate a
//! random target, sample reads from it, assemble and compare with the target.
//! Combinations are independent and run in parallel.
//!
use crate::assembler::{assemble, AssemblyConfig, AssemblyKind};
use crate::error::{AssemblyError, IoError, SampleError};
use crate::kmer::CountMode;
use crate::random_seq::generate_with_rng;
use crate::reads::sample_reads;
use indicatif::{ParallelProgressIterator, ProgressBar};
use itertools::iproduct;
use log::info;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

///
/// Grid of the sweep
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub target_lengths: Vec<usize>,
    pub n_reads: Vec<usize>,
    pub read_length: usize,
    pub ks: Vec<usize>,
    pub seed: u64,
    /// passed to every assembly
    pub max_edges: Option<usize>,
    /// `Distinct` unless specified
    pub count_mode: CountMode,
    /// draw a progress bar on stderr
    #[serde(skip)]
    pub show_progress: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            target_lengths: vec![200, 500, 1000],
            n_reads: vec![500, 1000, 5000],
            read_length: 50,
            ks: vec![10, 20, 30],
            seed: 123,
            max_edges: None,
            count_mode: CountMode::Distinct,
            show_progress: false,
        }
    }
}

impl SweepConfig {
    /// Load from a JSON file. Missing fields take the default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, IoError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| IoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(|source| IoError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
    /// assembly parameters of one grid point
    pub fn assembly_config(&self, k: usize) -> AssemblyConfig {
        AssemblyConfig {
            k,
            max_edges: self.max_edges,
            count_mode: self.count_mode,
        }
    }
    /// every (target_length, n_reads, k) in the grid
    pub fn combinations(&self) -> Vec<(usize, usize, usize)> {
        iproduct!(
            self.target_lengths.iter().copied(),
            self.n_reads.iter().copied(),
            self.ks.iter().copied()
        )
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    /// assembled sequence equals the target
    Matched,
    /// k is longer than every read; no k-mer to assemble
    Empty { skipped_reads: usize },
    /// assembly succeeded but spelled another sequence
    Mismatched { assembled_len: usize },
    /// reads could not be sampled
    SampleFailed(SampleError),
    /// assembly failed
    Failed(AssemblyError),
}

impl SweepOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, SweepOutcome::Matched)
    }
}

impl std::fmt::Display for SweepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SweepOutcome::Matched => write!(f, "matched"),
            SweepOutcome::Empty { skipped_reads } => {
                write!(f, "empty\tskipped_reads={}", skipped_reads)
            }
            SweepOutcome::Mismatched { assembled_len } => {
                write!(f, "mismatched\tassembled_len={}", assembled_len)
            }
            SweepOutcome::SampleFailed(e) => write!(f, "sample_failed\t{}", e),
            SweepOutcome::Failed(e) => write!(f, "{}\t{}", e.kind(), e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepRecord {
    pub target_length: usize,
    pub n_reads: usize,
    pub k: usize,
    pub outcome: SweepOutcome,
}

impl std::fmt::Display for SweepRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.target_length, self.n_reads, self.k, self.outcome
        )
    }
}

///
/// Run one combination with its own generator seeded from `seed`.
///
pub fn run_one(
    target_length: usize,
    n_reads: usize,
    read_length: usize,
    seed: u64,
    config: &AssemblyConfig,
) -> SweepRecord {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let target = generate_with_rng(&mut rng, target_length);
    let outcome = match sample_reads(&mut rng, &target, n_reads, read_length) {
        Err(e) => SweepOutcome::SampleFailed(e),
        Ok(reads) => match assemble(&reads, config) {
            Ok(assembly) if assembly.kind == AssemblyKind::Empty => SweepOutcome::Empty {
                skipped_reads: assembly.skipped_reads.len(),
            },
            Ok(assembly) if assembly.sequence == target => SweepOutcome::Matched,
            Ok(assembly) => SweepOutcome::Mismatched {
                assembled_len: assembly.len(),
            },
            Err(e) => SweepOutcome::Failed(e),
        },
    };
    SweepRecord {
        target_length,
        n_reads,
        k: config.k,
        outcome,
    }
}

///
/// Run every combination of the grid in parallel.
/// Records are returned in grid order.
///
pub fn run_sweep(config: &SweepConfig) -> Vec<SweepRecord> {
    let combinations = config.combinations();
    info!("sweep over {} combinations", combinations.len());
    let progress = if config.show_progress {
        ProgressBar::new(combinations.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    let records: Vec<SweepRecord> = combinations
        .par_iter()
        .progress_with(progress)
        .map(|&(target_length, n_reads, k)| {
            run_one(
                target_length,
                n_reads,
                config.read_length,
                config.seed,
                &config.assembly_config(k),
            )
        })
        .collect();
    let (matched, total) = summary(&records);
    info!("sweep finished: {}/{} matched", matched, total);
    records
}

///
/// (number of matched records, number of records)
///
pub fn summary(records: &[SweepRecord]) -> (usize, usize) {
    let matched = records.iter().filter(|r| r.outcome.is_matched()).count();
    (matched, records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid() {
        let c = SweepConfig::default();
        let combs = c.combinations();
        assert_eq!(combs.len(), 27);
        assert_eq!(combs[0], (200, 500, 10));
        assert_eq!(combs[26], (1000, 5000, 30));
    }

    #[test]
    fn config_json_defaults() {
        let c: SweepConfig = serde_json::from_str(r#"{"ks": [5], "seed": 1}"#).unwrap();
        assert_eq!(c.ks, vec![5]);
        assert_eq!(c.seed, 1);
        assert_eq!(c.read_length, 50);
        assert_eq!(c.target_lengths, vec![200, 500, 1000]);
    }

    #[test]
    fn run_one_is_deterministic() {
        let config = SweepConfig::default().assembly_config(12);
        let a = run_one(100, 200, 30, 7, &config);
        let b = run_one(100, 200, 30, 7, &config);
        assert_eq!(a, b);
        println!("{}", a);
    }

    #[test]
    fn read_longer_than_target() {
        let r = run_one(20, 10, 50, 0, &AssemblyConfig::new(10));
        assert_eq!(
            r.outcome,
            SweepOutcome::SampleFailed(SampleError::ReadTooLong {
                read_len: 50,
                source_len: 20
            })
        );
        assert!(!r.outcome.is_matched());
    }

    #[test]
    fn invalid_k_is_reported() {
        let r = run_one(100, 10, 20, 0, &AssemblyConfig::new(1));
        assert_eq!(
            r.outcome,
            SweepOutcome::Failed(AssemblyError::InvalidK { k: 1 })
        );
        assert!(r.to_string().starts_with("100\t10\t1\tinvalid_k"));
    }

    #[test]
    fn k_longer_than_reads_is_empty() {
        let r = run_one(100, 50, 20, 0, &AssemblyConfig::new(30));
        assert_eq!(r.outcome, SweepOutcome::Empty { skipped_reads: 50 });
        assert!(!r.outcome.is_matched());
        assert_eq!(r.to_string(), "100\t50\t30\tempty\tskipped_reads=50");
    }

    #[test]
    fn small_sweep() {
        let c = SweepConfig {
            target_lengths: vec![60, 80],
            n_reads: vec![300],
            read_length: 20,
            ks: vec![8, 40],
            seed: 5,
            max_edges: None,
            count_mode: CountMode::Distinct,
            show_progress: false,
        };
        let records = run_sweep(&c);
        assert_eq!(records.len(), 4);
        let combs: Vec<(usize, usize, usize)> = records
            .iter()
            .map(|r| (r.target_length, r.n_reads, r.k))
            .collect();
        assert_eq!(combs, c.combinations());
        // k larger than the reads: every read is skipped
        for r in records.iter().filter(|r| r.k == 40) {
            assert_eq!(r.outcome, SweepOutcome::Empty { skipped_reads: 300 });
        }
        let (matched, total) = summary(&records);
        assert_eq!(total, 4);
        assert!(matched <= 2);
    }
}
