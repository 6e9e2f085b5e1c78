//!
//! Degree balance and connectivity of the overlap graph
//!
//! An Eulerian path exists iff the edge-bearing nodes form a single weakly
//! connected component and
//! * every node is balanced (circuit), or
//! * exactly one node has `out - in = +1` and one has `out - in = -1` (path).
//!
use super::OverlapGraph;
use crate::common::NodeIndex;
use crate::error::{Imbalance, Infeasibility};
use petgraph::algo::connected_components;

///
/// Kind of Eulerian traversal that the graph admits
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EulerKind {
    /// every node is balanced; the traversal returns to `start`
    Circuit { start: NodeIndex },
    /// the traversal goes from `start` to `end`
    Path { start: NodeIndex, end: NodeIndex },
}

impl EulerKind {
    pub fn start(&self) -> NodeIndex {
        match self {
            EulerKind::Circuit { start } => *start,
            EulerKind::Path { start, .. } => *start,
        }
    }
    pub fn is_circuit(&self) -> bool {
        matches!(self, EulerKind::Circuit { .. })
    }
}

///
/// `out_degree - in_degree` of the node
///
pub fn balance(graph: &OverlapGraph, node: NodeIndex) -> isize {
    graph.out_degree(node) as isize - graph.in_degree(node) as isize
}

///
/// List all nodes whose in-degree differs from their out-degree
///
pub fn imbalanced_nodes(graph: &OverlapGraph) -> Vec<(NodeIndex, isize)> {
    graph
        .node_indices()
        .map(|node| (node, balance(graph, node)))
        .filter(|&(_, b)| b != 0)
        .collect()
}

///
/// Decide whether the (non-empty) graph has an Eulerian circuit or path.
///
/// Returns `None` for the graph without edges.
///
pub fn classify(graph: &OverlapGraph) -> Result<Option<EulerKind>, Infeasibility> {
    if graph.is_empty() {
        return Ok(None);
    }

    // every node is created from an edge, so all nodes are edge-bearing
    let n_components = connected_components(graph.as_digraph());
    if n_components > 1 {
        return Err(Infeasibility::Disconnected { n_components });
    }

    let imbalanced = imbalanced_nodes(graph);
    match imbalanced.as_slice() {
        [] => {
            let start = graph
                .node_indices()
                .find(|&node| graph.out_degree(node) > 0)
                .ok_or(Infeasibility::Disconnected { n_components: 0 })?;
            Ok(Some(EulerKind::Circuit { start }))
        }
        &[(a, ba), (b, bb)] if ba == 1 && bb == -1 => Ok(Some(EulerKind::Path { start: a, end: b })),
        &[(a, ba), (b, bb)] if ba == -1 && bb == 1 => Ok(Some(EulerKind::Path { start: b, end: a })),
        _ => Err(Infeasibility::Unbalanced {
            imbalances: imbalanced
                .iter()
                .map(|&(node, out_minus_in)| Imbalance {
                    node: graph.node(node).to_string(),
                    out_minus_in,
                })
                .collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::{Kmer, KmerMultiset};

    fn graph_of(k: usize, reads: &[&str]) -> OverlapGraph {
        OverlapGraph::from_kmers(&KmerMultiset::from_seqs(k, reads).unwrap())
    }

    #[test]
    fn circuit() {
        let g = graph_of(3, &["ACGTAC"]);
        let kind = classify(&g).unwrap().unwrap();
        assert!(kind.is_circuit());
        assert!(imbalanced_nodes(&g).is_empty());
        assert!(g.out_degree(kind.start()) > 0);
    }

    #[test]
    fn path() {
        let g = graph_of(3, &["AAGA", "AGAG", "GAGA"]);
        let kind = classify(&g).unwrap().unwrap();
        let aa = g.find_node(&Kmer::from_bases(b"AA")).unwrap();
        let ga = g.find_node(&Kmer::from_bases(b"GA")).unwrap();
        assert_eq!(kind, EulerKind::Path { start: aa, end: ga });
        assert_eq!(kind.start(), aa);
        assert_eq!(balance(&g, aa), 1);
        assert_eq!(balance(&g, ga), -1);
    }

    #[test]
    fn empty() {
        let g = graph_of(4, &["ACG"]);
        assert_eq!(classify(&g), Ok(None));
    }

    #[test]
    fn disconnected() {
        // two separate cycles
        let g = graph_of(3, &["ACAC", "GTGT"]);
        assert_eq!(
            classify(&g),
            Err(Infeasibility::Disconnected { n_components: 2 })
        );
    }

    #[test]
    fn unbalanced() {
        // star: AC -> CG, AC -> CT, TC -> CG
        let g = graph_of(3, &["ACG", "ACT", "TCG"]);
        match classify(&g) {
            Err(Infeasibility::Unbalanced { imbalances }) => {
                let mut nodes: Vec<(String, isize)> = imbalances
                    .into_iter()
                    .map(|i| (i.node, i.out_minus_in))
                    .collect();
                nodes.sort();
                assert_eq!(
                    nodes,
                    vec![
                        ("AC".to_string(), 2),
                        ("CG".to_string(), -2),
                        ("CT".to_string(), -1),
                        ("TC".to_string(), 1),
                    ]
                );
            }
            other => panic!("expected unbalanced, got {:?}", other),
        }
    }

    #[test]
    fn two_plus_one_is_not_a_path() {
        // AA -> AC twice, AC -> CC once: AA(+2) AC(+1 - 2 = -1) CC(-1)
        let g = graph_of(3, &["AAC", "AAC", "ACC"]);
        assert!(matches!(
            classify(&g),
            Err(Infeasibility::Unbalanced { .. })
        ));
    }
}
