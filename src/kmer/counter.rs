//!
//! k-mer counter
//!
//! `KmerMultiset` aggregates occurrences of every k-mer over a read collection.
//!
use super::{sequence_to_kmers, Kmer};
use crate::common::{CopyNum, Seq};
use crate::error::AssemblyError;
use fnv::FnvHashMap as HashMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

///
/// How occurrences of the same k-mer are counted
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountMode {
    /// copy number is the total number of occurrences over all reads
    Summed,
    /// every observed k-mer has copy number 1
    Distinct,
}

impl Default for CountMode {
    fn default() -> Self {
        CountMode::Summed
    }
}

///
/// `Kmer -> CopyNum` mapping of a read collection.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmerMultiset {
    k: usize,
    store: HashMap<Kmer, CopyNum>,
    /// indices of the reads that were shorter than k
    skipped_reads: Vec<usize>,
}

impl KmerMultiset {
    /// Create an empty multiset.
    ///
    /// `k < 2` has no (k-1)-mer overlaps and is rejected.
    pub fn new(k: usize) -> Result<Self, AssemblyError> {
        if k < 2 {
            return Err(AssemblyError::InvalidK { k });
        }
        Ok(KmerMultiset {
            k,
            store: HashMap::default(),
            skipped_reads: Vec::new(),
        })
    }
    pub fn k(&self) -> usize {
        self.k
    }
    /// Copy number of the k-mer, zero if it was never seen.
    pub fn get(&self, kmer: &Kmer) -> CopyNum {
        self.store.get(kmer).copied().unwrap_or(0)
    }
    /// Add k-mer count
    pub fn add(&mut self, kmer: Kmer, copy_num: CopyNum) {
        assert_eq!(kmer.k(), self.k(), "k-mer length differs from k");
        if copy_num > 0 {
            *self.store.entry(kmer).or_insert(0) += copy_num;
        }
    }
    /// the number of distinct k-mers
    pub fn len(&self) -> usize {
        self.store.len()
    }
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
    /// sum of copy numbers of all k-mers
    pub fn total(&self) -> CopyNum {
        self.store.values().sum()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Kmer, CopyNum)> + '_ {
        self.store.iter().map(|(kmer, &copy_num)| (kmer, copy_num))
    }
    /// k-mers with copy numbers in lexicographic order
    pub fn to_sorted_vec(&self) -> Vec<(Kmer, CopyNum)> {
        let mut kmers: Vec<(Kmer, CopyNum)> = self
            .store
            .iter()
            .map(|(kmer, &copy_num)| (kmer.clone(), copy_num))
            .collect();
        kmers.sort();
        kmers
    }
    ///
    /// Same k-mers with every copy number set to 1
    ///
    pub fn into_distinct(mut self) -> Self {
        for copy_num in self.store.values_mut() {
            *copy_num = 1;
        }
        self
    }
    pub fn with_mode(self, mode: CountMode) -> Self {
        match mode {
            CountMode::Summed => self,
            CountMode::Distinct => self.into_distinct(),
        }
    }
    pub fn skipped_reads(&self) -> &[usize] {
        &self.skipped_reads
    }
    ///
    /// add all kmers in a linear sequence.
    /// returns the number of k-mer occurrences added.
    ///
    pub fn add_seq(&mut self, seq: &[u8]) -> usize {
        let mut n = 0;
        for kmer in sequence_to_kmers(seq, self.k) {
            self.add(kmer, 1);
            n += 1;
        }
        n
    }
    ///
    /// Count k-mers of all reads.
    ///
    /// A read shorter than k contributes nothing and is recorded in `skipped_reads`.
    ///
    pub fn from_seqs<T>(k: usize, seqs: T) -> Result<Self, AssemblyError>
    where
        T: IntoIterator,
        T::Item: Seq,
    {
        let mut m = KmerMultiset::new(k)?;
        let mut n_reads = 0;
        for (i, seq) in seqs.into_iter().enumerate() {
            let seq = seq.as_ref();
            n_reads += 1;
            if seq.len() < k {
                warn!("read #{} (length {}) is shorter than k={}", i, seq.len(), k);
                m.skipped_reads.push(i);
            } else {
                m.add_seq(seq);
            }
        }
        debug!(
            "counted {} distinct k-mers (total {}) from {} reads, {} skipped",
            m.len(),
            m.total(),
            n_reads,
            m.skipped_reads.len()
        );
        Ok(m)
    }
}

//
// Display
//
impl std::fmt::Display for KmerMultiset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (kmer, copy_num) in self.to_sorted_vec() {
            writeln!(f, "{} {}", kmer, copy_num)?;
        }
        Ok(())
    }
}
