//! PBM (portable bitmap) format support
//!
//! Reads plain (`P1`) and raw (`P4`) bitmaps into a [`BitGrid`] and writes
//! grids back out as plain `P1`, one raster row per line.
//!
//! A PBM value of 1 is black; the grid stores the value unchanged.

use crate::header::{PbmKind, next_byte, read_header, skip_space_and_comments};
use crate::{IoError, IoResult};
use std::io::{BufRead, ErrorKind, Write};
use unblackedges_core::{BitGrid, get_data_bit, set_data_bit_val};

/// Read a PBM image (P1 or P4) from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P1`/`P4` magic
///
/// # Errors
///
/// Header errors as described in [`read_header`], plus
/// [`IoError::InvalidData`] for a truncated raster or a plain-PBM
/// character other than `0`, `1` or whitespace.
pub fn read_pbm<R: BufRead>(mut reader: R) -> IoResult<BitGrid> {
    let header = read_header(&mut reader)?;
    let mut grid = BitGrid::new(header.width, header.height)?;

    match header.kind {
        PbmKind::Plain => read_plain_raster(&mut reader, &mut grid)?,
        PbmKind::Raw => read_raw_raster(&mut reader, &mut grid)?,
    }

    log::debug!(
        "decoded {} bitmap {}x{} ({} black)",
        header.kind.magic(),
        header.width,
        header.height,
        grid.count_ones()
    );
    Ok(grid)
}

fn read_plain_raster<R: BufRead>(reader: &mut R, grid: &mut BitGrid) -> IoResult<()> {
    let width = grid.width();
    for row in 0..grid.height() {
        for col in 0..width {
            skip_space_and_comments(reader)?;
            match next_byte(reader)? {
                Some(b'0') => {}
                Some(b'1') => set_data_bit_val(grid.row_data_mut(row), col),
                Some(b) => {
                    return Err(IoError::InvalidData(format!(
                        "invalid P1 pixel {:?} at row {row}, col {col}",
                        char::from(b)
                    )));
                }
                None => {
                    let read = u64::from(row) * u64::from(width) + u64::from(col);
                    return Err(truncated(grid, read));
                }
            }
        }
    }
    Ok(())
}

fn read_raw_raster<R: BufRead>(reader: &mut R, grid: &mut BitGrid) -> IoResult<()> {
    let width = grid.width();
    let mut line = vec![0u8; width.div_ceil(8) as usize];

    for row in 0..grid.height() {
        reader.read_exact(&mut line).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => truncated(grid, u64::from(row) * u64::from(width)),
            _ => IoError::Io(e),
        })?;

        let words = grid.row_data_mut(row);
        for col in 0..width {
            let byte = line[(col >> 3) as usize];
            if byte & (0x80 >> (col & 7)) != 0 {
                set_data_bit_val(words, col);
            }
        }
    }
    Ok(())
}

fn truncated(grid: &BitGrid, read: u64) -> IoError {
    IoError::InvalidData(format!(
        "truncated raster: expected {} pixels for {}x{}, got {read}",
        grid.pixel_count(),
        grid.width(),
        grid.height()
    ))
}

/// Write a grid as plain PBM (`P1`).
///
/// The output is `P1`, then `"{width} {height}"`, then one line per row
/// holding exactly `width` `0`/`1` characters.
///
/// # Arguments
/// * `grid`   - The bitmap to encode
/// * `writer` - Destination writer
pub fn write_pbm<W: Write>(grid: &BitGrid, mut writer: W) -> IoResult<()> {
    let width = grid.width();
    writeln!(writer, "{}", PbmKind::Plain.magic())?;
    writeln!(writer, "{} {}", width, grid.height())?;

    let mut line = Vec::with_capacity(width as usize + 1);
    for row in 0..grid.height() {
        line.clear();
        let words = grid.row_data(row);
        line.extend((0..width).map(|col| b'0' + get_data_bit(words, col) as u8));
        line.push(b'\n');
        writer.write_all(&line)?;
    }

    log::debug!("encoded P1 bitmap {}x{}", width, grid.height());
    Ok(())
}
