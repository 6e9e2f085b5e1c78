//!
//! Read sampling from a source sequence
//!
use crate::common::{Reads, Sequence};
use crate::error::SampleError;
use log::debug;
use rand::prelude::*;

fn check_read_len(source: &[u8], read_len: usize) -> Result<(), SampleError> {
    if read_len == 0 {
        return Err(SampleError::EmptyRead);
    }
    if read_len > source.len() {
        return Err(SampleError::ReadTooLong {
            read_len,
            source_len: source.len(),
        });
    }
    Ok(())
}

///
/// Draw `n_reads` substrings of length `read_len` whose start offsets are
/// uniform in `0 ..= source.len() - read_len`.
///
pub fn sample_reads<R: Rng>(
    rng: &mut R,
    source: &[u8],
    n_reads: usize,
    read_len: usize,
) -> Result<Reads, SampleError> {
    check_read_len(source, read_len)?;
    let last_start = source.len() - read_len;
    let reads: Vec<Sequence> = (0..n_reads)
        .map(|_| {
            let start = rng.gen_range(0..=last_start);
            source[start..start + read_len].to_vec()
        })
        .collect();
    debug!(
        "sampled {} reads of length {} from a source of length {}",
        n_reads,
        read_len,
        source.len()
    );
    Ok(Reads::from(reads))
}

///
/// Reads at offsets `0, step, 2 * step, ...` plus one read ending at the
/// end of the source, so every window of length `read_len` is covered when
/// `step <= read_len - k + 1`.
///
pub fn tile_reads(source: &[u8], read_len: usize, step: usize) -> Result<Reads, SampleError> {
    check_read_len(source, read_len)?;
    let last_start = source.len() - read_len;
    let step = step.max(1);
    let mut starts: Vec<usize> = (0..=last_start).step_by(step).collect();
    if starts.last() != Some(&last_start) {
        starts.push(last_start);
    }
    Ok(Reads::from(
        starts
            .into_iter()
            .map(|start| source[start..start + read_len].to_vec())
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn sample() {
        let source = b"ACGTTGCAATGCCGTA";
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let reads = sample_reads(&mut rng, source, 100, 5).unwrap();
        assert_eq!(reads.len(), 100);
        for read in reads.iter() {
            assert_eq!(read.len(), 5);
            assert!(source.windows(5).any(|w| w == &read[..]));
        }

        // same seed, same reads
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(0);
        assert_eq!(sample_reads(&mut rng2, source, 100, 5).unwrap(), reads);
    }

    #[test]
    fn sample_full_length() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let reads = sample_reads(&mut rng, b"ACGT", 3, 4).unwrap();
        assert!(reads.iter().all(|r| r == b"ACGT"));
    }

    #[test]
    fn sample_errors() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        assert_eq!(
            sample_reads(&mut rng, b"ACGT", 3, 5),
            Err(SampleError::ReadTooLong {
                read_len: 5,
                source_len: 4
            })
        );
        assert_eq!(
            sample_reads(&mut rng, b"ACGT", 3, 0),
            Err(SampleError::EmptyRead)
        );
    }

    #[test]
    fn tiling() {
        let reads = tile_reads(b"ACGTTGCAA", 4, 2).unwrap();
        let reads: Vec<&[u8]> = reads.iter().map(|r| &r[..]).collect();
        assert_eq!(
            reads,
            vec![&b"ACGT"[..], &b"GTTG"[..], &b"TGCA"[..], &b"GCAA"[..]]
        );
        assert_eq!(tile_reads(b"ACGT", 4, 3).unwrap().len(), 1);
    }
}
