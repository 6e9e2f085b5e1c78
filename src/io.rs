pub mod cytoscape;
pub mod fasta;

use crate::error::IoError;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

///
/// write string into a file
///
pub fn write_string<P: AsRef<Path>>(filename: P, string: &str) -> Result<(), IoError> {
    let path = filename.as_ref();
    let wrap = |source| IoError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(string.as_bytes()).map_err(wrap)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");
        write_string(&path, "digraph {}\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "digraph {}\n");

        let missing = dir.path().join("no/such/dir/file");
        assert!(matches!(
            write_string(&missing, ""),
            Err(IoError::Io { .. })
        ));
    }
}
