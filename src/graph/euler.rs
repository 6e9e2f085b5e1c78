//!
//! Eulerian path/circuit on the overlap graph
//!
//! Hierholzer-style: walk greedily from the start node until stuck, then
//! repeatedly walk a detour from the earliest node on the current path that
//! still has unused edges and splice it into the path.
//!
use super::degree::{classify, EulerKind};
use super::OverlapGraph;
use crate::common::{EdgeIndex, NodeIndex};
use crate::error::{AssemblyError, Infeasibility};
use log::debug;
use serde::{Deserialize, Serialize};

///
/// Limits of the traversal
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// refuse graphs with more edges (counting multiplicity) than this
    pub max_edges: Option<usize>,
}

///
/// Walk that uses every edge of the graph exactly as many times as its copy number.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    kind: Option<EulerKind>,
    edges: Vec<EdgeIndex>,
    n_splices: usize,
}

impl Traversal {
    /// traversal of the graph without edges
    pub fn empty() -> Self {
        Traversal {
            kind: None,
            edges: Vec::new(),
            n_splices: 0,
        }
    }
    /// `None` if empty
    pub fn kind(&self) -> Option<EulerKind> {
        self.kind
    }
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }
    /// the number of edges in the traversal
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    /// how many detours were spliced into the first walk
    pub fn n_splices(&self) -> usize {
        self.n_splices
    }
    ///
    /// Node sequence of the traversal (`len() + 1` nodes, or none if empty)
    ///
    pub fn nodes(&self, graph: &OverlapGraph) -> Vec<NodeIndex> {
        match self.kind {
            None => Vec::new(),
            Some(kind) => std::iter::once(kind.start())
                .chain(self.edges.iter().map(|&e| graph.target(e)))
                .collect(),
        }
    }
}

///
/// remain[edge] = (how many multiplicity remains in the edge?)
///
struct Remaining<'a> {
    graph: &'a OverlapGraph,
    remain: Vec<usize>,
    total: usize,
}

impl<'a> Remaining<'a> {
    fn new(graph: &'a OverlapGraph) -> Self {
        let remain: Vec<usize> = graph
            .edge_indices()
            .map(|e| graph.edge(e).copy_num)
            .collect();
        let total = remain.iter().sum();
        Remaining {
            graph,
            remain,
            total,
        }
    }
    fn next_edge(&self, node: NodeIndex) -> Option<EdgeIndex> {
        self.graph
            .out_edges(node)
            .find(|e| self.remain[e.index()] > 0)
    }
    fn has_out(&self, node: NodeIndex) -> bool {
        self.next_edge(node).is_some()
    }
    ///
    /// consume edges greedily from `from` until the current node has no
    /// remaining outgoing edge. Returns the walk and its end node.
    ///
    fn walk(&mut self, from: NodeIndex) -> (Vec<EdgeIndex>, NodeIndex) {
        let mut walk = Vec::new();
        let mut node = from;
        while let Some(edge) = self.next_edge(node) {
            self.remain[edge.index()] -= 1;
            self.total -= 1;
            walk.push(edge);
            node = self.graph.target(edge);
        }
        (walk, node)
    }
}

///
/// i-th node on the path starting at `start`
///
fn node_at(graph: &OverlapGraph, start: NodeIndex, path: &[EdgeIndex], i: usize) -> NodeIndex {
    if i == 0 {
        start
    } else {
        graph.target(path[i - 1])
    }
}

///
/// insert `detour` (a closed walk from the i-th node of `path`) at position i
///
/// path       detour     path
/// 0 .. i-1   --------   i .. n
/// ------> v  -> .. -> v ------>
///
fn splice(path: &mut Vec<EdgeIndex>, i: usize, detour: Vec<EdgeIndex>) {
    let tail = path.split_off(i);
    path.extend(detour);
    path.extend(tail);
}

///
/// Edge sequence that starts from `start` and consumes every edge.
///
/// `start` should be the start node chosen by `classify`, otherwise the
/// detours are not closed walks.
///
fn euler_walk(
    graph: &OverlapGraph,
    start: NodeIndex,
) -> Result<(Vec<EdgeIndex>, usize), Infeasibility> {
    let n_edges = graph.edge_count();
    let mut remaining = Remaining::new(graph);
    let (mut path, end) = remaining.walk(start);
    debug!("first walk: {} edges, ended at {}", path.len(), graph.node(end));

    let mut n_splices = 0;
    // nodes before `cursor` on the path have no remaining edges
    let mut cursor = 0;
    while remaining.total > 0 {
        let found =
            (cursor..=path.len()).find(|&i| remaining.has_out(node_at(graph, start, &path, i)));
        match found {
            Some(i) => {
                let node = node_at(graph, start, &path, i);
                let (detour, end) = remaining.walk(node);
                debug_assert_eq!(node, end, "detour is not a closed walk");
                debug!(
                    "splicing detour of {} edges at position {} ({})",
                    detour.len(),
                    i,
                    graph.node(node)
                );
                splice(&mut path, i, detour);
                n_splices += 1;
                cursor = i;
            }
            None => {
                return Err(Infeasibility::Unreachable {
                    n_unused: remaining.total,
                    n_edges,
                });
            }
        }
    }

    debug_assert_eq!(path.len(), n_edges);
    Ok((path, n_splices))
}

///
/// Find an Eulerian path or circuit of the overlap graph.
///
/// * empty graph -> empty traversal
/// * disconnected or unbalanced graph -> `AssemblyError::Infeasible`
/// * more edges than `config.max_edges` -> `AssemblyError::BudgetExceeded`
///
pub fn euler_traversal(
    graph: &OverlapGraph,
    config: &TraversalConfig,
) -> Result<Traversal, AssemblyError> {
    let kind = match classify(graph)? {
        Some(kind) => kind,
        None => return Ok(Traversal::empty()),
    };

    let n_edges = graph.edge_count();
    if let Some(budget) = config.max_edges {
        if n_edges > budget {
            return Err(AssemblyError::BudgetExceeded { n_edges, budget });
        }
    }

    let (edges, n_splices) = euler_walk(graph, kind.start())?;
    debug!(
        "traversal {:?}: {} edges, {} splices",
        kind,
        edges.len(),
        n_splices
    );
    Ok(Traversal {
        kind: Some(kind),
        edges,
        n_splices,
    })
}

//
// tests
//
