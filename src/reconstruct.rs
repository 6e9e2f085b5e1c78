//!
//! Spell the sequence of a traversal
//!
use crate::common::Sequence;
use crate::graph::euler::Traversal;
use crate::graph::OverlapGraph;
use crate::kmer::Kmer;

///
/// First k-mer in full, then the last base of each following k-mer.
///
/// The result has `(k - 1) + len(traversal)` bases; an empty traversal
/// gives an empty sequence.
///
pub fn reconstruct(graph: &OverlapGraph, traversal: &Traversal) -> Sequence {
    let mut edges = traversal.edges().iter().map(|&e| &graph.edge(e).kmer);
    let mut seq: Sequence = match edges.next() {
        Some(first) => first.as_bases().to_vec(),
        None => return Sequence::new(),
    };
    seq.reserve(traversal.len());
    seq.extend(edges.filter_map(|kmer| kmer.last()));
    seq
}

///
/// Same as `reconstruct` but spelled from the node sequence:
/// first node in full, then the last base of each following node.
///
pub fn reconstruct_from_nodes<'a, I>(nodes: I) -> Sequence
where
    I: IntoIterator<Item = &'a Kmer>,
{
    let mut nodes = nodes.into_iter();
    let mut seq: Sequence = match nodes.next() {
        Some(first) => first.as_bases().to_vec(),
        None => return Sequence::new(),
    };
    seq.extend(nodes.filter_map(|node| node.last()));
    seq
}
