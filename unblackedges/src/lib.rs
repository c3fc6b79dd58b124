//! unblackedges - Remove black edges from PBM bitmaps
//!
//! Reads a PBM bitmap, clears every black pixel that is 4-connected to the
//! border through black pixels, and writes the result as plain PBM.
//! Black regions that do not touch the border are kept.
//!
//! # Example
//!
//! ```
//! let input = b"P1\n4 3\n1 1 0 0\n0 0 0 0\n0 0 1 0\n";
//! let mut output = Vec::new();
//! unblackedges::unblack_stream(&input[..], "memory", &mut output).unwrap();
//! assert_eq!(output, b"P1\n4 3\n0000\n0000\n0000\n");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

// Re-export the workspace crates
pub use unblackedges_core::{BitGrid, Coord};
pub use unblackedges_core as grid;
pub use unblackedges_io as io;
pub use unblackedges_region as region;
pub use unblackedges_region::clear_black_edges;

/// Errors that stop a run
#[derive(Error, Debug)]
pub enum Error {
    /// The named input file could not be opened
    #[error("could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input is not a readable PBM bitmap
    #[error("could not read bitmap from {input}: {source}")]
    Read {
        input: String,
        source: unblackedges_io::IoError,
    },

    /// The result could not be written
    #[error("could not write bitmap: {0}")]
    Write(#[source] unblackedges_io::IoError),
}

/// Result type for a run
pub type Result<T> = std::result::Result<T, Error>;

/// Decode a bitmap from `input` (a file, or standard input when `None`),
/// clear its black edges, and write it to `out` as plain PBM.
///
/// Nothing is written to `out` unless decoding succeeds.
pub fn run<W: Write>(input: Option<&Path>, out: W) -> Result<()> {
    match input {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
            unblack_stream(BufReader::new(file), &path.display().to_string(), out)
        }
        None => {
            let stdin = std::io::stdin();
            unblack_stream(stdin.lock(), "standard input", out)
        }
    }
}

/// Decode, clear and re-encode one bitmap stream.
///
/// `name` identifies the input in error messages.
pub fn unblack_stream<R, W>(reader: R, name: &str, mut out: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    log::debug!("reading bitmap from {name}");
    let mut grid = unblackedges_io::read_pbm(reader).map_err(|source| Error::Read {
        input: name.to_string(),
        source,
    })?;

    clear_black_edges(&mut grid);

    unblackedges_io::write_pbm(&grid, &mut out).map_err(Error::Write)?;
    out.flush()
        .map_err(|e| Error::Write(unblackedges_io::IoError::Io(e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unblack(input: &str) -> Result<String> {
        let mut out = Vec::new();
        unblack_stream(input.as_bytes(), "test", &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_all_black_becomes_white() {
        let out = unblack("P1\n3 3\n1 1 1\n1 1 1\n1 1 1\n").unwrap();
        assert_eq!(out, "P1\n3 3\n000\n000\n000\n");
    }

    #[test]
    fn test_interior_kept() {
        let input = "P1\n5 5\n00000\n00000\n00100\n00000\n00000\n";
        assert_eq!(unblack(input).unwrap(), input);
    }

    #[test]
    fn test_raw_input_plain_output() {
        let mut out = Vec::new();
        // 3x3, every pixel black
        unblack_stream(&b"P4 3 3\n\xe0\xe0\xe0"[..], "raw", &mut out).unwrap();
        assert_eq!(out, b"P1\n3 3\n000\n000\n000\n");
    }

    #[test]
    fn test_bad_input_writes_nothing() {
        let mut out = Vec::new();
        let err = unblack_stream(&b"P5\n2 2\n255\n"[..], "gray", &mut out).unwrap_err();
        assert!(matches!(
            err,
            Error::Read {
                source: unblackedges_io::IoError::WrongImageType(_),
                ..
            }
        ));
        assert!(err.to_string().contains("gray"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pbm");
        let err = run(Some(path.as_path()), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("missing.pbm"));
    }

    #[test]
    fn test_run_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.pbm");
        std::fs::write(&path, "P1\n4 4\n1000\n0000\n0010\n0000\n").unwrap();

        let mut out = Vec::new();
        run(Some(path.as_path()), &mut out).unwrap();
        assert_eq!(out, b"P1\n4 4\n0000\n0000\n0010\n0000\n");
    }
}
