//! Cell access functions
//!
//! Checked and unchecked single-cell get/set on [`BitGrid`], plus the
//! word-level bit helpers they are built on.
//!
//! # Bit packing
//!
//! Cells are packed MSB-to-LSB within each 32-bit word: column 0 of a row
//! occupies bit 31 of the row's first word.

use super::{BitGrid, Coord};
use crate::error::{Error, Result};

impl BitGrid {
    /// Get the cell value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside
    /// the grid.
    pub fn get(&self, row: u32, col: u32) -> Result<u32> {
        self.check_bounds(row, col)?;
        Ok(get_data_bit(self.row_data(row), col))
    }

    /// Get the cell value at `(row, col)`, panicking when out of bounds.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> u32 {
        assert!(
            self.contains(Coord::new(row, col)),
            "cell ({row}, {col}) outside {}x{} grid",
            self.width(),
            self.height()
        );
        get_data_bit(self.row_data(row), col)
    }

    /// Set the cell value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinate is outside
    /// the grid and [`Error::InvalidValue`] if `val` is not 0 or 1.
    pub fn set(&mut self, row: u32, col: u32, val: u32) -> Result<()> {
        self.check_bounds(row, col)?;
        if val > 1 {
            return Err(Error::InvalidValue(val));
        }
        set_data_bit(self.row_data_mut(row), col, val);
        Ok(())
    }

    /// Set the cell value at `(row, col)`, panicking when out of bounds.
    ///
    /// Only the low bit of `val` is stored.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or `col >= width`.
    #[inline]
    pub fn set_unchecked(&mut self, row: u32, col: u32, val: u32) {
        assert!(
            self.contains(Coord::new(row, col)),
            "cell ({row}, {col}) outside {}x{} grid",
            self.width(),
            self.height()
        );
        set_data_bit(self.row_data_mut(row), col, val & 1);
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<()> {
        if self.contains(Coord::new(row, col)) {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                row,
                col,
                width: self.width(),
                height: self.height(),
            })
        }
    }
}

/// Get a 1-bit value from a packed row.
#[inline]
pub fn get_data_bit(line: &[u32], x: u32) -> u32 {
    (line[(x >> 5) as usize] >> (31 - (x & 31))) & 1
}

/// Set a 1-bit value in a packed row.
#[inline]
pub fn set_data_bit(line: &mut [u32], x: u32, val: u32) {
    if val & 1 == 1 {
        set_data_bit_val(line, x);
    } else {
        clear_data_bit(line, x);
    }
}

/// Set a 1-bit value to 1.
#[inline]
pub fn set_data_bit_val(line: &mut [u32], x: u32) {
    line[(x >> 5) as usize] |= 0x8000_0000 >> (x & 31);
}

/// Clear a 1-bit value to 0.
#[inline]
pub fn clear_data_bit(line: &mut [u32], x: u32) {
    line[(x >> 5) as usize] &= !(0x8000_0000 >> (x & 31));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_packing_msb_first() {
        let mut line = [0u32; 2];
        set_data_bit_val(&mut line, 0);
        assert_eq!(line[0], 0x8000_0000);
        set_data_bit_val(&mut line, 31);
        assert_eq!(line[0], 0x8000_0001);
        set_data_bit_val(&mut line, 32);
        assert_eq!(line[1], 0x8000_0000);
        clear_data_bit(&mut line, 0);
        assert_eq!(line[0], 0x0000_0001);
        assert_eq!(get_data_bit(&line, 31), 1);
        assert_eq!(get_data_bit(&line, 30), 0);
    }

    #[test]
    fn test_set_data_bit_masks_value() {
        let mut line = [0u32; 1];
        set_data_bit(&mut line, 4, 3);
        assert_eq!(get_data_bit(&line, 4), 1);
        set_data_bit(&mut line, 4, 2);
        assert_eq!(get_data_bit(&line, 4), 0);
    }

    #[test]
    fn test_get_set_checked() {
        let mut grid = BitGrid::new(5, 4).unwrap();
        grid.set(3, 4, 1).unwrap();
        assert_eq!(grid.get(3, 4).unwrap(), 1);
        grid.set(3, 4, 0).unwrap();
        assert_eq!(grid.get(3, 4).unwrap(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = BitGrid::new(5, 4).unwrap();
        assert!(matches!(
            grid.get(4, 0),
            Err(Error::IndexOutOfBounds {
                row: 4,
                col: 0,
                width: 5,
                height: 4
            })
        ));
        assert!(grid.get(0, 5).is_err());
        assert!(grid.set(0, 5, 1).is_err());
        // Column 5 lies in the padding bits of the first word
        assert_eq!(grid.count_ones(), 0);
    }

    #[test]
    fn test_set_rejects_non_bit_value() {
        let mut grid = BitGrid::new(2, 2).unwrap();
        assert!(matches!(grid.set(0, 0, 2), Err(Error::InvalidValue(2))));
        assert_eq!(grid.get(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_unchecked_roundtrip() {
        let mut grid = BitGrid::new(70, 2).unwrap();
        grid.set_unchecked(1, 69, 1);
        assert_eq!(grid.get_unchecked(1, 69), 1);
        assert_eq!(grid.count_ones(), 1);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_unchecked_panics_in_padding() {
        let grid = BitGrid::new(5, 1).unwrap();
        grid.get_unchecked(0, 6);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_set_unchecked_panics_past_last_row() {
        let mut grid = BitGrid::new(5, 1).unwrap();
        grid.set_unchecked(1, 0, 1);
    }
}
