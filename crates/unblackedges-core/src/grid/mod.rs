//! BitGrid - The bitmap container
//!
//! `BitGrid` is a fixed-size 2D array of 0/1 values addressed by
//! `(row, col)`. It holds a decoded PBM raster for the lifetime of one
//! program run.
//!
//! # Storage layout
//!
//! - Cell data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - Cells are packed MSB to LSB within each word
//! - Padding bits past `width` in the last word of a row are always 0
//!
//! The padding invariant lets whole-grid comparisons and counts work on
//! words directly.

mod access;

pub use access::*;

use crate::error::{Error, Result};
use std::fmt;

/// A `(row, col)` cell position.
///
/// Row 0 is the top line of the bitmap, column 0 its leftmost pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, `0 <= row < height`
    pub row: u32,
    /// Column index, `0 <= col < width`
    pub col: u32,
}

impl Coord {
    /// Create a coordinate.
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Dense 2D bit grid
///
/// # Examples
///
/// ```
/// use unblackedges_core::BitGrid;
///
/// let mut grid = BitGrid::new(4, 3).unwrap();
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.height(), 3);
///
/// grid.set(2, 3, 1).unwrap();
/// assert_eq!(grid.get(2, 3).unwrap(), 1);
/// assert!(grid.get(3, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    /// Width in cells
    width: u32,
    /// Height in cells
    height: u32,
    /// 32-bit words per line
    wpl: u32,
    /// Packed cell data
    data: Vec<u32>,
}

impl BitGrid {
    /// Create a new grid with every cell set to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// the storage size overflows `usize`. Returns
    /// [`Error::AllocationFailed`] if the storage cannot be reserved.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let wpl = Self::compute_wpl(width);
        let data_size = (wpl as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;

        let mut data = Vec::new();
        data.try_reserve_exact(data_size)
            .map_err(|_| Error::AllocationFailed)?;
        data.resize(data_size, 0);

        Ok(BitGrid {
            width,
            height,
            wpl,
            data,
        })
    }

    /// Create a grid from cell values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for any value other than 0 or 1 and
    /// [`Error::DimensionMismatch`] unless exactly `width * height` values
    /// are supplied.
    pub fn from_bits<I>(width: u32, height: u32, bits: I) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut grid = Self::new(width, height)?;
        let expected = grid.pixel_count();
        let mut bits = bits.into_iter();
        let mut actual = 0usize;

        for row in 0..height {
            for col in 0..width {
                let Some(val) = bits.next() else {
                    return Err(Error::DimensionMismatch { expected, actual });
                };
                if val > 1 {
                    return Err(Error::InvalidValue(val));
                }
                if val == 1 {
                    set_data_bit_val(grid.row_data_mut(row), col);
                }
                actual += 1;
            }
        }

        let extra = bits.count();
        if extra > 0 {
            return Err(Error::DimensionMismatch {
                expected,
                actual: actual + extra,
            });
        }
        Ok(grid)
    }

    /// Compute words per line for a given width.
    #[inline]
    fn compute_wpl(width: u32) -> u32 {
        width.div_ceil(32)
    }

    /// Get the grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels, `width * height`.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the packed words of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_data(&self, row: u32) -> &[u32] {
        let start = row as usize * self.wpl as usize;
        let end = start + self.wpl as usize;
        &self.data[start..end]
    }

    /// Get mutable access to the packed words of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, row: u32) -> &mut [u32] {
        let start = row as usize * self.wpl as usize;
        let end = start + self.wpl as usize;
        &mut self.data[start..end]
    }

    /// Count cells set to 1.
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check whether `coord` lies in the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Check whether `coord` lies on the top, bottom, left or right edge.
    ///
    /// Out-of-bounds coordinates are never border cells.
    pub fn is_border(&self, coord: Coord) -> bool {
        self.contains(coord)
            && (coord.row == 0
                || coord.col == 0
                || coord.row == self.height - 1
                || coord.col == self.width - 1)
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, u32)> + '_ {
        (0..self.height).flat_map(move |row| {
            let line = self.row_data(row);
            (0..self.width).map(move |col| (Coord::new(row, col), get_data_bit(line, col)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let grid = BitGrid::new(40, 3).unwrap();
        assert_eq!(grid.wpl, 2);
        assert_eq!(grid.data.len(), 6);
        assert_eq!(grid.count_ones(), 0);
        assert_eq!(grid.pixel_count(), 120);
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            BitGrid::new(0, 5),
            Err(Error::InvalidDimension {
                width: 0,
                height: 5
            })
        ));
        assert!(BitGrid::new(5, 0).is_err());
    }

    #[test]
    fn test_from_bits_row_major() {
        let grid = BitGrid::from_bits(3, 2, [1, 0, 0, 0, 1, 1]).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), 1);
        assert_eq!(grid.get(0, 1).unwrap(), 0);
        assert_eq!(grid.get(1, 1).unwrap(), 1);
        assert_eq!(grid.get(1, 2).unwrap(), 1);
        assert_eq!(grid.count_ones(), 3);
    }

    #[test]
    fn test_from_bits_wrong_count() {
        assert!(matches!(
            BitGrid::from_bits(2, 2, [1, 0, 1]),
            Err(Error::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        ));
        assert!(matches!(
            BitGrid::from_bits(2, 2, [1, 0, 1, 0, 1]),
            Err(Error::DimensionMismatch {
                expected: 4,
                actual: 5
            })
        ));
    }

    #[test]
    fn test_from_bits_invalid_value() {
        assert!(matches!(
            BitGrid::from_bits(2, 1, [1, 2]),
            Err(Error::InvalidValue(2))
        ));
    }

    #[test]
    fn test_is_border() {
        let grid = BitGrid::new(4, 3).unwrap();
        assert!(grid.is_border(Coord::new(0, 2)));
        assert!(grid.is_border(Coord::new(2, 2)));
        assert!(grid.is_border(Coord::new(1, 0)));
        assert!(grid.is_border(Coord::new(1, 3)));
        assert!(!grid.is_border(Coord::new(1, 1)));
        assert!(!grid.is_border(Coord::new(3, 0)));
    }

    #[test]
    fn test_single_row_all_border() {
        let grid = BitGrid::new(5, 1).unwrap();
        assert!((0..5).all(|col| grid.is_border(Coord::new(0, col))));
    }

    #[test]
    fn test_iter_order() {
        let grid = BitGrid::from_bits(2, 2, [0, 1, 1, 0]).unwrap();
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(
            cells,
            vec![
                (Coord::new(0, 0), 0),
                (Coord::new(0, 1), 1),
                (Coord::new(1, 0), 1),
                (Coord::new(1, 1), 0),
            ]
        );
    }

    #[test]
    fn test_equality_ignores_history() {
        let mut a = BitGrid::new(33, 2).unwrap();
        a.set(1, 32, 1).unwrap();
        a.set(1, 32, 0).unwrap();
        let b = BitGrid::new(33, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(3, 7).to_string(), "(3, 7)");
    }
}
