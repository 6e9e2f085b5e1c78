//!
//! Common types shared by every stage
//!
//! ## Single Sequence
//!
//! * `Sequence`
//! * `Bases`
//!
//! ## Sequences
//!
//! * `Reads`: read collections
//!
pub use petgraph::graph::{EdgeIndex, NodeIndex};
use std::borrow::Cow;

/// integer copy number (= occurrence of a k-mer in the reads)
pub type CopyNum = usize;

/// Type of DNA sequence
pub type Sequence = Vec<u8>;

/// Type of Bases as array
///
/// It is used in `AsRef<Bases>` or `&Bases`
pub type Bases = [u8];

/// Seq trait
/// It can be converted into &Bases with `as_ref()`.
///
pub trait Seq: AsRef<Bases> {
    fn to_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_ref())
    }
}
impl<T: AsRef<Bases>> Seq for T {}

/// Convert Sequence(Vec<u8>) into str
/// useful in displaying
pub fn sequence_to_string<T: AsRef<Bases>>(seq: &T) -> Cow<'_, str> {
    String::from_utf8_lossy(seq.as_ref())
}

/// Struct for storing multiple reads.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reads {
    pub reads: Vec<Sequence>,
}

impl Reads {
    /// Constructor of reads
    pub fn from(reads: Vec<Sequence>) -> Self {
        Reads { reads }
    }
    /// get an iterator over the reads
    pub fn iter(&self) -> impl Iterator<Item = &Sequence> + '_ {
        self.reads.iter()
    }
    /// the number of reads.
    pub fn len(&self) -> usize {
        self.reads.len()
    }
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }
    /// total number of bases
    pub fn total_bases(&self) -> usize {
        self.reads.iter().map(|read| read.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Reads {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;
    fn into_iter(self) -> std::slice::Iter<'a, Sequence> {
        self.reads.iter()
    }
}

///
/// Array of valid DNA bases
///
pub const VALID_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

///
/// short-hand of `EdgeIndex::new`
///
pub fn ei(index: usize) -> EdgeIndex {
    EdgeIndex::new(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_collection() {
        let reads = Reads::from(vec![b"ATCG".to_vec(), b"GG".to_vec()]);
        assert_eq!(reads.len(), 2);
        assert!(!reads.is_empty());
        assert_eq!(reads.total_bases(), 6);
        let strs: Vec<String> = reads.iter().map(|r| r.to_str().into_owned()).collect();
        assert_eq!(strs, vec!["ATCG".to_string(), "GG".to_string()]);
        assert!(Reads::default().is_empty());
    }

    #[test]
    fn sequence_display() {
        let s: Sequence = b"ACGT".to_vec();
        assert_eq!(sequence_to_string(&s), "ACGT");
        assert_eq!(ei(5).index(), 5);
    }
}
