use crate::common::{Reads, Sequence};
use crate::error::IoError;
use bio::io::fasta;
use log::warn;
use std::fs::File;
use std::io::Write;
use std::path::Path;

///
/// Upper-case the bases; anything other than ACGT becomes `N`.
///
pub fn sanitize_bases(seq: &[u8]) -> Sequence {
    seq.iter()
        .enumerate()
        .map(|(i, base)| match base {
            b'A' | b'a' => b'A',
            b'C' | b'c' => b'C',
            b'G' | b'g' => b'G',
            b'T' | b't' => b'T',
            b'N' | b'n' => {
                warn!("ambiguous detected `n` in bases[{}]", i);
                b'N'
            }
            &c => {
                warn!("informal base `{}` detected in bases[{}]", c as char, i);
                b'N'
            }
        })
        .collect()
}

///
/// parse all records of a FASTA stream as reads
///
pub fn parse_reads_from<R: std::io::Read>(reader: R) -> std::io::Result<Reads> {
    let reader = fasta::Reader::new(reader);
    let mut reads: Vec<Sequence> = Vec::new();
    for result in reader.records() {
        let record = result?;
        reads.push(sanitize_bases(record.seq()));
    }
    Ok(Reads::from(reads))
}

///
/// parse all records of a FASTA file as reads
///
pub fn parse_reads<P: AsRef<Path>>(filename: P) -> Result<Reads, IoError> {
    let path = filename.as_ref();
    let wrap = |source| IoError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(wrap)?;
    parse_reads_from(file).map_err(wrap)
}

///
/// write sequences as FASTA records with ids `{prefix}{index}`
///
pub fn write_seqs<W: Write, S: AsRef<[u8]>>(
    writer: W,
    prefix: &str,
    seqs: &[S],
) -> std::io::Result<()> {
    let mut writer = fasta::Writer::new(writer);
    for (i, seq) in seqs.iter().enumerate() {
        let id = format!("{}{}", prefix, i);
        writer.write(&id, None, seq.as_ref())?;
    }
    writer.flush()
}

///
/// write a single sequence as a FASTA record with description
///
pub fn dump_seq<W: Write>(writer: W, id: &str, seq: &[u8], desc: Option<&str>) -> std::io::Result<()> {
    let mut writer = fasta::Writer::new(writer);
    writer.write(id, desc, seq)?;
    writer.flush()
}
