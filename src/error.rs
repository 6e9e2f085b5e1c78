//!
//! Error types
//!
use itertools::Itertools;
use std::path::PathBuf;

///
/// Signed degree imbalance `out_degree - in_degree` of a (k-1)-mer node.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imbalance {
    pub node: String,
    pub out_minus_in: isize,
}

impl std::fmt::Display for Imbalance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({:+})", self.node, self.out_minus_in)
    }
}

///
/// Reasons why an overlap graph has no Eulerian path
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Infeasibility {
    #[error("graph has {n_components} weakly connected components")]
    Disconnected { n_components: usize },

    #[error(
        "unbalanced nodes [{}]; at most one +1 start and one -1 end node are allowed",
        .imbalances.iter().join(", ")
    )]
    Unbalanced { imbalances: Vec<Imbalance> },

    #[error("{n_unused} of {n_edges} edges are unreachable from the traversal")]
    Unreachable { n_unused: usize, n_edges: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    #[error("k must be at least 2, but k={k} was given")]
    InvalidK { k: usize },

    #[error("no Eulerian path: {0}")]
    Infeasible(#[from] Infeasibility),

    #[error("graph has {n_edges} edges which exceeds the traversal budget of {budget}")]
    BudgetExceeded { n_edges: usize, budget: usize },
}

impl AssemblyError {
    /// short tag used in tables
    pub fn kind(&self) -> &'static str {
        match self {
            AssemblyError::InvalidK { .. } => "invalid_k",
            AssemblyError::Infeasible(Infeasibility::Disconnected { .. }) => "disconnected",
            AssemblyError::Infeasible(Infeasibility::Unbalanced { .. }) => "unbalanced",
            AssemblyError::Infeasible(Infeasibility::Unreachable { .. }) => "unreachable",
            AssemblyError::BudgetExceeded { .. } => "budget_exceeded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    #[error("read length {read_len} exceeds the source length {source_len}")]
    ReadTooLong { read_len: usize, source_len: usize },

    #[error("read length must be positive")]
    EmptyRead,
}

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("could not access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse JSON in {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbalanced_message() {
        let e = AssemblyError::from(Infeasibility::Unbalanced {
            imbalances: vec![
                Imbalance {
                    node: "AA".to_string(),
                    out_minus_in: 1,
                },
                Imbalance {
                    node: "GG".to_string(),
                    out_minus_in: -2,
                },
            ],
        });
        let message = e.to_string();
        println!("{}", message);
        assert!(message.starts_with("no Eulerian path: unbalanced nodes [AA(+1), GG(-2)]"));
        assert_eq!(e.kind(), "unbalanced");
    }

    #[test]
    fn kind_tags() {
        assert_eq!(AssemblyError::InvalidK { k: 1 }.kind(), "invalid_k");
        assert_eq!(
            AssemblyError::from(Infeasibility::Disconnected { n_components: 2 }).kind(),
            "disconnected"
        );
        assert_eq!(
            AssemblyError::BudgetExceeded {
                n_edges: 10,
                budget: 5
            }
            .to_string(),
            "graph has 10 edges which exceeds the traversal budget of 5"
        );
    }
}
