//!
//! Subcommand bodies of the `dbgeuler` binary
//!
use crate::assembler::{assemble, AssemblyConfig};
use crate::graph::OverlapGraph;
use crate::io;
use crate::kmer::KmerMultiset;
use crate::random_seq;
use crate::reads::sample_reads;
use crate::sweep::{run_sweep, summary, SweepConfig};
use anyhow::{bail, Context};
use log::{info, warn};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::path::Path;

pub fn generate(length: usize, seed: u64) -> anyhow::Result<()> {
    let v = random_seq::generate(length, seed);
    let desc = format!("length={} seed={}", length, seed);
    io::fasta::dump_seq(std::io::stdout().lock(), "randseq", &v, Some(&desc))?;
    Ok(())
}

pub fn sample(
    source_fa: &Path,
    n_reads: usize,
    read_length: usize,
    seed: u64,
) -> anyhow::Result<()> {
    let sources = io::fasta::parse_reads(source_fa)?;
    let source = match sources.reads.first() {
        Some(source) => source,
        None => bail!("no sequence in {:?}", source_fa),
    };
    if sources.len() > 1 {
        warn!("using the first of {} sequences", sources.len());
    }
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let reads = sample_reads(&mut rng, source, n_reads, read_length)?;
    info!("sampled {} reads ({} bases)", reads.len(), reads.total_bases());
    io::fasta::write_seqs(std::io::stdout().lock(), "read", &reads.reads)?;
    Ok(())
}

pub fn assemble_reads(reads_fa: &Path, config: &AssemblyConfig) -> anyhow::Result<()> {
    let reads = io::fasta::parse_reads(reads_fa)?;
    info!("n_reads={}", reads.len());
    let assembly = assemble(&reads, config)
        .with_context(|| format!("assembly of {:?} with k={} failed", reads_fa, config.k))?;
    if !assembly.skipped_reads.is_empty() {
        warn!(
            "{} reads were shorter than k={}",
            assembly.skipped_reads.len(),
            config.k
        );
    }
    let desc = assembly.to_string();
    io::fasta::dump_seq(
        std::io::stdout().lock(),
        "assembly",
        &assembly.sequence,
        Some(&desc),
    )?;
    Ok(())
}

pub fn graph(
    reads_fa: &Path,
    k: usize,
    cytoscape: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let reads = io::fasta::parse_reads(reads_fa)?;
    let kmers = KmerMultiset::from_seqs(k, &reads)?;
    let graph = OverlapGraph::from_kmers(&kmers);
    info!(
        "n_nodes={} n_kmers={} n_edges={}",
        graph.node_count(),
        graph.kmer_count(),
        graph.edge_count()
    );
    let text = if cytoscape {
        io::cytoscape::to_json(&graph)? + "\n"
    } else {
        graph.to_dot()
    };
    match output {
        Some(path) => io::write_string(path, &text)?,
        None => print!("{}", text),
    }
    Ok(())
}

pub fn sweep(config: &SweepConfig) -> anyhow::Result<()> {
    let records = run_sweep(config);
    println!("# target_length\tn_reads\tk\toutcome");
    for record in records.iter() {
        println!("{}", record);
    }
    let (matched, total) = summary(&records);
    println!("# matched={}/{}", matched, total);
    Ok(())
}
