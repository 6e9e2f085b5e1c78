//!
//! De Bruijn graph assembly by Eulerian traversal
//!
//! reads -> `kmer::KmerMultiset` -> `graph::OverlapGraph` -> `graph::euler::Traversal`
//! -> `assembler::Assembly`
//!
pub mod assembler;
pub mod cli;
pub mod common;
pub mod error;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod random_seq;
pub mod reads;
pub mod reconstruct;
pub mod sweep;

pub use assembler::{assemble, Assembly, AssemblyConfig, AssemblyKind};
pub use error::{AssemblyError, Infeasibility};
