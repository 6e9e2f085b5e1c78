//!
//! Cytoscape.js elements of the overlap graph
//!
use crate::common::CopyNum;
use crate::graph::OverlapGraph;
use crate::kmer::Kmer;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use serde_with::{serde_as, DisplayFromStr};

#[serde_as]
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "group", content = "data")]
pub enum Element {
    #[serde(rename = "nodes")]
    Node {
        id: usize,
        #[serde_as(as = "DisplayFromStr")]
        label: Kmer,
    },
    #[serde(rename = "edges")]
    Edge {
        id: usize,
        source: usize,
        target: usize,
        #[serde_as(as = "DisplayFromStr")]
        label: Kmer,
        copy_num: CopyNum,
    },
}

///
/// nodes first, then edges. Edge ids are offset by the number of nodes
/// so that all ids are unique.
///
pub fn to_elements(graph: &OverlapGraph) -> Vec<Element> {
    let g = graph.as_digraph();
    let n_nodes = g.node_count();
    let nodes = g.node_indices().map(|v| Element::Node {
        id: v.index(),
        label: g[v].clone(),
    });
    let edges = g.edge_references().map(|e| Element::Edge {
        id: n_nodes + e.id().index(),
        source: e.source().index(),
        target: e.target().index(),
        label: e.weight().kmer.clone(),
        copy_num: e.weight().copy_num,
    });
    nodes.chain(edges).collect()
}

pub fn to_json(graph: &OverlapGraph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_elements(graph))
}
