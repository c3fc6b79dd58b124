//! Border-seeded flood fill
//!
//! Clears every black pixel that is 4-connected, through black pixels
//! only, to a pixel on the image border. Black regions that never touch
//! the border are left as they are.
//!
//! The fill is iterative. Coordinates waiting to be processed live on an
//! explicit LIFO frontier (a `Vec<Coord>`), so stack depth does not grow
//! with the size of a region.

use unblackedges_core::{BitGrid, Coord};

/// 4-way neighbor directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Neighbor enumeration order used by the fill.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The neighbor of `coord` in this direction, or `None` if it would
    /// fall outside `grid`.
    #[inline]
    pub fn step(self, coord: Coord, grid: &BitGrid) -> Option<Coord> {
        let Coord { row, col } = coord;
        match self {
            Direction::Up if row > 0 => Some(Coord::new(row - 1, col)),
            Direction::Right if col + 1 < grid.width() => Some(Coord::new(row, col + 1)),
            Direction::Down if row + 1 < grid.height() => Some(Coord::new(row + 1, col)),
            Direction::Left if col > 0 => Some(Coord::new(row, col - 1)),
            _ => None,
        }
    }
}

/// Collect the black border pixels that seed the fill, in push order.
///
/// The top and bottom rows are scanned column by column, then the left
/// and right columns row by row. A corner is seen by two scans and is
/// returned twice when black; so is every cell of a grid that is one row
/// high or one column wide. Duplicates are harmless: the fill skips a
/// coordinate that has already been cleared.
pub fn border_seeds(grid: &BitGrid) -> Vec<Coord> {
    let width = grid.width();
    let height = grid.height();
    let mut seeds = Vec::new();

    let mut push_if_black = |coord: Coord| {
        if grid.get_unchecked(coord.row, coord.col) == 1 {
            seeds.push(coord);
        }
    };

    for col in 0..width {
        push_if_black(Coord::new(0, col));
        push_if_black(Coord::new(height - 1, col));
    }
    for row in 0..height {
        push_if_black(Coord::new(row, 0));
        push_if_black(Coord::new(row, width - 1));
    }

    seeds
}

/// Clear all black pixels connected to the border.
///
/// Mutates `grid` in place. Afterwards no black pixel is 4-connected
/// through black pixels to a border cell; every other pixel keeps its
/// value.
///
/// # Visited state
///
/// There is no separate visited set. A pixel counts as visited exactly
/// when the fill has set it to 0, so a pixel is unvisited iff it is still
/// 1. A coordinate popped after its pixel was cleared is a stale
/// duplicate and is skipped.
///
/// # Examples
///
/// ```
/// use unblackedges_core::BitGrid;
/// use unblackedges_region::clear_black_edges;
///
/// #[rustfmt::skip]
/// let mut grid = BitGrid::from_bits(5, 5, [
///     1, 1, 0, 0, 0,
///     0, 1, 0, 0, 0,
///     0, 0, 0, 1, 0,
///     0, 0, 0, 0, 0,
///     0, 0, 0, 0, 0,
/// ]).unwrap();
///
/// clear_black_edges(&mut grid);
/// assert_eq!(grid.count_ones(), 1);
/// assert_eq!(grid.get(2, 3).unwrap(), 1);
/// ```
pub fn clear_black_edges(grid: &mut BitGrid) {
    clear_black_edges_traced(grid, |_| {});
}

/// Clear all black pixels connected to the border, reporting each one.
///
/// Identical to [`clear_black_edges`], but calls `on_clear` once for every
/// pixel at the moment it is set to 0, in clearing order. The order is
/// deterministic: the most recently pushed coordinate is processed first
/// and neighbors are pushed up, right, down, left.
pub fn clear_black_edges_traced<F>(grid: &mut BitGrid, mut on_clear: F)
where
    F: FnMut(Coord),
{
    let mut frontier = border_seeds(grid);
    let seeds = frontier.len();
    let mut cleared = 0usize;

    while let Some(coord) = frontier.pop() {
        if grid.get_unchecked(coord.row, coord.col) == 0 {
            continue;
        }

        for dir in Direction::ALL {
            if let Some(next) = dir.step(coord, grid) {
                if grid.get_unchecked(next.row, next.col) == 1 {
                    frontier.push(next);
                }
            }
        }

        grid.set_unchecked(coord.row, coord.col, 0);
        cleared += 1;
        on_clear(coord);
    }

    log::debug!(
        "cleared {} edge pixels from {} seeds in {}x{} grid",
        cleared,
        seeds,
        grid.width(),
        grid.height()
    );
}
