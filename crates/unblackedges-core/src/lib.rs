//! unblackedges-core - Bit grid storage
//!
//! This crate provides the data structures shared by the rest of the
//! workspace:
//!
//! - [`BitGrid`] - A fixed-size 2D grid of 0/1 cells
//! - [`Coord`] - A `(row, col)` cell position
//! - [`Error`] / [`Result`] - Errors raised by grid construction and access
//!
//! A cell value of 1 is a black pixel and 0 a white pixel, following the
//! PBM convention.

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::{
    BitGrid, Coord, clear_data_bit, get_data_bit, set_data_bit, set_data_bit_val,
};
