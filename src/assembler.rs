//!
//! Assembly pipeline
//!
//! reads -> `KmerMultiset` -> `OverlapGraph` -> `Traversal` -> `Assembly`
//!
use crate::common::{sequence_to_string, Seq, Sequence};
use crate::error::AssemblyError;
use crate::graph::degree::EulerKind;
use crate::graph::euler::{euler_traversal, TraversalConfig};
use crate::graph::OverlapGraph;
use crate::kmer::{CountMode, KmerMultiset};
use crate::reconstruct::reconstruct;
use derive_new::new;
use log::info;
use serde::{Deserialize, Serialize};

///
/// Parameters of a single assembly
///
#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// k-mer size (edge length of the graph)
    pub k: usize,
    /// refuse graphs with more edges than this
    #[new(default)]
    #[serde(default)]
    pub max_edges: Option<usize>,
    /// summed copy numbers, or one copy per distinct k-mer
    #[new(default)]
    #[serde(default)]
    pub count_mode: CountMode,
}

impl AssemblyConfig {
    pub fn traversal_config(&self) -> TraversalConfig {
        TraversalConfig {
            max_edges: self.max_edges,
        }
    }
}

///
/// Shape of the traversal the sequence was spelled from
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssemblyKind {
    /// no k-mers at all; the sequence is empty
    Empty,
    /// Eulerian circuit. The sequence ends with its first k-1 bases.
    Circuit,
    /// Eulerian path
    Path,
}

impl std::fmt::Display for AssemblyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AssemblyKind::Empty => write!(f, "empty"),
            AssemblyKind::Circuit => write!(f, "circuit"),
            AssemblyKind::Path => write!(f, "path"),
        }
    }
}

///
/// Successful result of `assemble`
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub sequence: Sequence,
    pub kind: AssemblyKind,
    pub k: usize,
    /// distinct k-mers
    pub n_kmers: usize,
    /// edges counting multiplicity
    pub n_edges: usize,
    /// detours spliced during the traversal
    pub n_splices: usize,
    /// indices of the reads shorter than k
    pub skipped_reads: Vec<usize>,
}

impl Assembly {
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
    pub fn len(&self) -> usize {
        self.sequence.len()
    }
    pub fn to_str(&self) -> std::borrow::Cow<'_, str> {
        sequence_to_string(&self.sequence)
    }
}

impl std::fmt::Display for Assembly {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "kind={} k={} len={} n_kmers={} n_edges={} n_splices={} n_skipped_reads={}",
            self.kind,
            self.k,
            self.len(),
            self.n_kmers,
            self.n_edges,
            self.n_splices,
            self.skipped_reads.len()
        )
    }
}

///
/// Assemble reads into a single sequence.
///
/// Each call builds its own graph; nothing is shared between calls.
///
pub fn assemble<T>(reads: T, config: &AssemblyConfig) -> Result<Assembly, AssemblyError>
where
    T: IntoIterator,
    T::Item: Seq,
{
    let kmers = KmerMultiset::from_seqs(config.k, reads)?.with_mode(config.count_mode);
    let graph = OverlapGraph::from_kmers(&kmers);
    assemble_graph(&graph, kmers.skipped_reads().to_vec(), config)
}

///
/// Traverse an already built graph and spell the sequence.
///
pub fn assemble_graph(
    graph: &OverlapGraph,
    skipped_reads: Vec<usize>,
    config: &AssemblyConfig,
) -> Result<Assembly, AssemblyError> {
    let traversal = euler_traversal(graph, &config.traversal_config())?;
    let kind = match traversal.kind() {
        None => AssemblyKind::Empty,
        Some(EulerKind::Circuit { .. }) => AssemblyKind::Circuit,
        Some(EulerKind::Path { .. }) => AssemblyKind::Path,
    };
    let assembly = Assembly {
        sequence: reconstruct(graph, &traversal),
        kind,
        k: graph.k(),
        n_kmers: graph.kmer_count(),
        n_edges: graph.edge_count(),
        n_splices: traversal.n_splices(),
        skipped_reads,
    };
    info!("assembled {}", assembly);
    Ok(assembly)
}
