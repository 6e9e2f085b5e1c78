//!
//! kmer base struct definitions
//!
pub mod counter;

pub use counter::{CountMode, KmerMultiset};

///
/// Kmer for any k, stored as a plain byte vector.
///
/// The same type is used for (k-1)-mer nodes of the overlap graph.
///
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Hash, Clone)]
pub struct Kmer(Vec<u8>);

impl Kmer {
    pub fn from_bases(bases: &[u8]) -> Kmer {
        Kmer(bases.to_vec())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn k(&self) -> usize {
        self.len()
    }
    pub fn as_bases(&self) -> &[u8] {
        &self.0
    }
    /// first k-1 bases
    pub fn prefix(&self) -> Kmer {
        match self.0.split_last() {
            Some((_, prefix)) => Kmer(prefix.to_vec()),
            None => Kmer(Vec::new()),
        }
    }
    /// last k-1 bases
    pub fn suffix(&self) -> Kmer {
        match self.0.split_first() {
            Some((_, suffix)) => Kmer(suffix.to_vec()),
            None => Kmer(Vec::new()),
        }
    }
    pub fn last(&self) -> Option<u8> {
        self.0.last().copied()
    }
}

impl AsRef<[u8]> for Kmer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Kmer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for &b in self.0.iter() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

///
/// All k-mers of a linear sequence from left to right.
/// Sequences shorter than k yield nothing.
///
/// k must be positive.
///
pub fn sequence_to_kmers(seq: &[u8], k: usize) -> impl Iterator<Item = Kmer> + '_ {
    assert!(k > 0, "k should be positive");
    seq.windows(k).map(Kmer::from_bases)
}
