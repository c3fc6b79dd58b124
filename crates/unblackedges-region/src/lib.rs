//! unblackedges-region - Edge clearing for bitmaps
//!
//! This crate removes black regions that touch the border of a
//! [`BitGrid`](unblackedges_core::BitGrid):
//!
//! - [`clear_black_edges`] - Clear every black pixel 4-connected to the border
//! - [`clear_black_edges_traced`] - The same fill, reporting each cleared pixel
//! - [`border_seeds`] - The black border pixels the fill starts from
//!
//! # Examples
//!
//! ```
//! use unblackedges_core::BitGrid;
//! use unblackedges_region::clear_black_edges;
//!
//! // A 1-row bitmap is all border
//! let mut grid = BitGrid::from_bits(5, 1, [1, 1, 0, 1, 1]).unwrap();
//! clear_black_edges(&mut grid);
//! assert_eq!(grid.count_ones(), 0);
//! ```

pub mod seedfill;

// Re-export core types
pub use unblackedges_core;

pub use seedfill::{Direction, border_seeds, clear_black_edges, clear_black_edges_traced};
