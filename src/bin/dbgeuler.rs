use clap::{Parser, Subcommand};
use dbgeuler::{assembler::AssemblyConfig, cli, kmer::CountMode, sweep::SweepConfig};

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random sequence as FASTA
    Generate {
        /// Length of the sequence
        #[clap(short = 'l')]
        length: usize,
        /// Seed of the random generator
        #[clap(short = 's', default_value_t = 0)]
        seed: u64,
    },
    /// Sample reads from the first sequence of a FASTA
    Sample {
        /// Source sequence FASTA filename
        #[clap(short = 'i')]
        source_fasta: std::path::PathBuf,
        /// Number of reads
        #[clap(short = 'n')]
        n_reads: usize,
        /// Length of each read
        #[clap(short = 'l')]
        read_length: usize,
        /// Seed of the random generator
        #[clap(short = 's', default_value_t = 0)]
        seed: u64,
    },
    /// Assemble reads into a single sequence
    Assemble {
        /// k of DBG
        #[clap(short = 'k')]
        k: usize,
        /// Refuse graphs with more edges than this
        #[clap(short = 'B')]
        max_edges: Option<usize>,
        /// Count every distinct k-mer once instead of summing occurrences
        #[clap(short = 'd', long)]
        distinct: bool,
        /// Input read FASTA filename
        read_fasta: std::path::PathBuf,
    },
    /// Print the overlap graph of reads
    Graph {
        /// k of DBG
        #[clap(short = 'k')]
        k: usize,
        /// Output Cytoscape JSON instead of dot
        #[clap(long)]
        cytoscape: bool,
        /// Write into the file instead of stdout
        #[clap(short = 'o')]
        output: Option<std::path::PathBuf>,
        /// Input read FASTA filename
        read_fasta: std::path::PathBuf,
    },
    /// Assemble random targets over a grid of parameters
    Sweep {
        /// JSON file of the sweep grid. Default grid if not specified.
        #[clap(short = 'c', long)]
        config: Option<std::path::PathBuf>,
        /// Override the seed of the grid
        #[clap(short = 's')]
        seed: Option<u64>,
        /// Show a progress bar
        #[clap(short = 'p', long)]
        progress: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();
    eprintln!("# started_at={}", chrono::Local::now());
    eprintln!("# opts={:?}", opts);
    match opts.command {
        Commands::Generate { length, seed } => cli::generate(length, seed)?,
        Commands::Sample {
            source_fasta,
            n_reads,
            read_length,
            seed,
        } => cli::sample(&source_fasta, n_reads, read_length, seed)?,
        Commands::Assemble {
            k,
            max_edges,
            distinct,
            read_fasta,
        } => {
            let count_mode = if distinct {
                CountMode::Distinct
            } else {
                CountMode::Summed
            };
            let config = AssemblyConfig {
                k,
                max_edges,
                count_mode,
            };
            cli::assemble_reads(&read_fasta, &config)?
        }
        Commands::Graph {
            k,
            cytoscape,
            output,
            read_fasta,
        } => cli::graph(&read_fasta, k, cytoscape, output.as_deref())?,
        Commands::Sweep {
            config,
            seed,
            progress,
        } => {
            let mut config = match config {
                Some(path) => SweepConfig::from_json_file(path)?,
                None => SweepConfig::default(),
            };
            if let Some(seed) = seed {
                config.seed = seed;
            }
            config.show_progress = progress;
            cli::sweep(&config)?
        }
    }
    eprintln!("# finished_at={}", chrono::Local::now());
    Ok(())
}
