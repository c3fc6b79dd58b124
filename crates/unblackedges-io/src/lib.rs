//! unblackedges-io - Bitmap I/O
//!
//! Decodes PBM bitmaps (plain `P1` and raw `P4`) into a
//! [`BitGrid`](unblackedges_core::BitGrid) and encodes grids as plain `P1`.
//!
//! # Examples
//!
//! ```
//! use unblackedges_io::{read_grid_mem, write_grid_mem};
//!
//! let grid = read_grid_mem(b"P1\n3 1\n1 0 1\n").unwrap();
//! assert_eq!(grid.count_ones(), 2);
//!
//! let bytes = write_grid_mem(&grid).unwrap();
//! assert_eq!(bytes, b"P1\n3 1\n101\n");
//! ```

pub mod error;
pub mod header;
pub mod pbm;

pub use error::{IoError, IoResult};
pub use header::{PbmHeader, PbmKind, read_header, read_header_mem};
pub use pbm::{read_pbm, write_pbm};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use unblackedges_core::BitGrid;

/// Read a bitmap from a file path.
pub fn read_grid<P: AsRef<Path>>(path: P) -> IoResult<BitGrid> {
    let file = File::open(path.as_ref())?;
    read_pbm(BufReader::new(file))
}

/// Read a bitmap from bytes.
pub fn read_grid_mem(data: &[u8]) -> IoResult<BitGrid> {
    read_pbm(data)
}

/// Write a bitmap to a file path as plain PBM.
pub fn write_grid<P: AsRef<Path>>(grid: &BitGrid, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_pbm(grid, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a bitmap to a byte vector as plain PBM.
pub fn write_grid_mem(grid: &BitGrid) -> IoResult<Vec<u8>> {
    let mut out = Vec::with_capacity(grid.pixel_count() + grid.height() as usize + 16);
    write_pbm(grid, &mut out)?;
    Ok(out)
}
