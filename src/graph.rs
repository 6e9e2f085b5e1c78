//!
//! Overlap (de Bruijn) graph
//!
//! Node: (k-1)-mer
//! Edge: k-mer from its prefix to its suffix, with its copy number as multiplicity
//!
pub mod degree;
pub mod euler;

use crate::common::{CopyNum, EdgeIndex, NodeIndex};
use crate::kmer::{Kmer, KmerMultiset};
use fnv::FnvHashMap as HashMap;
use log::debug;
use petgraph::dot::Dot;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

///
/// Edge of the overlap graph.
///
/// One `OverlapEdge` with `copy_num = c` stands for `c` parallel edges that
/// must all be traversed.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapEdge {
    pub kmer: Kmer,
    pub copy_num: CopyNum,
}

impl std::fmt::Display for OverlapEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (x{})", self.kmer, self.copy_num)
    }
}

///
/// De Bruijn graph of a `KmerMultiset`
///
#[derive(Debug, Clone)]
pub struct OverlapGraph {
    k: usize,
    graph: DiGraph<Kmer, OverlapEdge>,
    nodes: HashMap<Kmer, NodeIndex>,
}

impl OverlapGraph {
    ///
    /// Build the graph from counted k-mers.
    ///
    /// k-mers are inserted in sorted order, so the node and edge indices
    /// only depend on the content of the multiset.
    ///
    pub fn from_kmers(kmers: &KmerMultiset) -> Self {
        let mut g = OverlapGraph {
            k: kmers.k(),
            graph: DiGraph::new(),
            nodes: HashMap::default(),
        };
        for (kmer, copy_num) in kmers.to_sorted_vec() {
            let source = g.intern(kmer.prefix());
            let target = g.intern(kmer.suffix());
            g.graph
                .add_edge(source, target, OverlapEdge { kmer, copy_num });
        }
        debug!(
            "overlap graph k={} n_nodes={} n_kmers={} n_edges={}",
            g.k,
            g.node_count(),
            g.kmer_count(),
            g.edge_count()
        );
        g
    }
    fn intern(&mut self, km1mer: Kmer) -> NodeIndex {
        if let Some(&node) = self.nodes.get(&km1mer) {
            return node;
        }
        let node = self.graph.add_node(km1mer.clone());
        self.nodes.insert(km1mer, node);
        node
    }
    /// Size of k-mer (edge)
    pub fn k(&self) -> usize {
        self.k
    }
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }
    /// the number of (k-1)-mer nodes
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
    /// the number of distinct k-mers (edges without multiplicity)
    pub fn kmer_count(&self) -> usize {
        self.graph.edge_count()
    }
    /// the number of edges counting multiplicity, i.e. the sum of k-mer counts
    pub fn edge_count(&self) -> usize {
        self.graph.edge_weights().map(|e| e.copy_num).sum()
    }
    pub fn node(&self, node: NodeIndex) -> &Kmer {
        &self.graph[node]
    }
    pub fn edge(&self, edge: EdgeIndex) -> &OverlapEdge {
        &self.graph[edge]
    }
    pub fn find_node(&self, km1mer: &Kmer) -> Option<NodeIndex> {
        self.nodes.get(km1mer).copied()
    }
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }
    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> {
        self.graph.edge_indices()
    }
    pub fn source(&self, edge: EdgeIndex) -> NodeIndex {
        self.endpoints(edge).0
    }
    pub fn target(&self, edge: EdgeIndex) -> NodeIndex {
        self.endpoints(edge).1
    }
    fn endpoints(&self, edge: EdgeIndex) -> (NodeIndex, NodeIndex) {
        // every EdgeIndex handed out by this graph is valid as edges are never removed
        self.graph
            .edge_endpoints(edge)
            .unwrap_or_else(|| panic!("edge {:?} is not in the graph", edge))
    }
    /// outgoing edges of the node
    pub fn out_edges(&self, node: NodeIndex) -> impl Iterator<Item = EdgeIndex> + '_ {
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .map(|e| e.id())
    }
    /// out-degree counting multiplicity
    pub fn out_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .map(|e| e.weight().copy_num)
            .sum()
    }
    /// in-degree counting multiplicity
    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .map(|e| e.weight().copy_num)
            .sum()
    }
    /// Reference to the underlying petgraph graph
    pub fn as_digraph(&self) -> &DiGraph<Kmer, OverlapEdge> {
        &self.graph
    }
    ///
    /// `(source, target, k-mer, copy_num)` of every edge, in edge index order.
    ///
    pub fn edge_list(&self) -> Vec<(Kmer, Kmer, Kmer, CopyNum)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].clone(),
                    self.graph[e.target()].clone(),
                    e.weight().kmer.clone(),
                    e.weight().copy_num,
                )
            })
            .collect()
    }
    /// Graphviz dot representation
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }
}

impl std::fmt::Display for OverlapGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (source, target, kmer, copy_num) in self.edge_list() {
            writeln!(f, "{} -> {} {} x{}", source, target, kmer, copy_num)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn km(s: &str) -> Kmer {
        Kmer::from_bases(s.as_bytes())
    }

    #[test]
    fn cycle_graph() {
        let m = KmerMultiset::from_seqs(3, &[b"ACGTAC"]).unwrap();
        let g = OverlapGraph::from_kmers(&m);
        assert_eq!(g.k(), 3);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.kmer_count(), 4);
        assert_eq!(g.edge_count(), 4);
        println!("{}", g);
        let edges: Vec<(String, String)> = g
            .edge_list()
            .into_iter()
            .map(|(s, t, _, _)| (s.to_string(), t.to_string()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("AC".to_string(), "CG".to_string()),
                ("CG".to_string(), "GT".to_string()),
                ("GT".to_string(), "TA".to_string()),
                ("TA".to_string(), "AC".to_string()),
            ]
        );
        for v in g.node_indices() {
            assert_eq!(g.in_degree(v), 1);
            assert_eq!(g.out_degree(v), 1);
        }
    }

    #[test]
    fn multiplicity_is_preserved() {
        let reads = vec!["AAGA", "AGAG", "GAGA"];
        let m = KmerMultiset::from_seqs(3, &reads).unwrap();
        let g = OverlapGraph::from_kmers(&m);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.kmer_count(), 3);
        assert_eq!(g.edge_count(), m.total());
        assert_eq!(g.edge_count(), 6);

        let aa = g.find_node(&km("AA")).unwrap();
        let ag = g.find_node(&km("AG")).unwrap();
        let ga = g.find_node(&km("GA")).unwrap();
        assert_eq!((g.out_degree(aa), g.in_degree(aa)), (1, 0));
        assert_eq!((g.out_degree(ag), g.in_degree(ag)), (3, 3));
        assert_eq!((g.out_degree(ga), g.in_degree(ga)), (2, 3));
        assert_eq!(g.find_node(&km("TT")), None);
    }

    #[test]
    fn empty_graph() {
        let m = KmerMultiset::from_seqs(5, &[b"ACG"]).unwrap();
        let g = OverlapGraph::from_kmers(&m);
        assert!(g.is_empty());
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.edge_list().is_empty());
    }

    #[test]
    fn build_is_idempotent() {
        let reads = vec!["ACGTTGCA", "TTGCAAC", "GGGTTT"];
        let m = KmerMultiset::from_seqs(4, &reads).unwrap();
        let g1 = OverlapGraph::from_kmers(&m);
        let g2 = OverlapGraph::from_kmers(&m);
        assert_eq!(g1.edge_list(), g2.edge_list());
        assert_eq!(g1.to_dot(), g2.to_dot());
    }

    #[test]
    fn self_loop() {
        let m = KmerMultiset::from_seqs(3, &[b"AAAA"]).unwrap();
        let g = OverlapGraph::from_kmers(&m);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 2);
        let aa = g.find_node(&km("AA")).unwrap();
        assert_eq!(g.source(ei0()), aa);
        assert_eq!(g.target(ei0()), aa);
        assert_eq!(g.edge(ei0()).to_string(), "AAA (x2)");
        assert!(g.to_dot().contains("AAA (x2)"));
    }

    fn ei0() -> EdgeIndex {
        crate::common::ei(0)
    }
}
