//! Edge clearing regression test
//!
//! Clears the black edges of each test bitmap, checks the result against
//! its golden file, and verifies pixel counts, idempotence and the
//! cleared-pixel trace.

use unblackedges_core::BitGrid;
use unblackedges_region::{border_seeds, clear_black_edges, clear_black_edges_traced};
use unblackedges_test::{RegParams, load_test_grid};

/// (file, black pixels before, black pixels after)
const CASES: [(&str, usize, usize); 4] = [
    ("frame.pbm", 44, 12),
    ("blobs.pbm", 31, 13),
    ("spiral.pbm", 56, 0),
    ("noborder.pbm", 14, 14),
];

#[test]
fn clear_edges_reg() {
    let mut rp = RegParams::new("clear_edges");

    // Tests 1-4: golden output for every bitmap
    let mut cleared = Vec::new();
    for (name, _, _) in CASES {
        eprintln!("=== {name} ===");
        let mut grid = load_test_grid(name).expect("load test bitmap");
        clear_black_edges(&mut grid);
        rp.write_grid_and_check(&grid).expect("write cleared bitmap");
        cleared.push(grid);
    }

    // Tests 5-12: pixel counts before and after
    for ((name, before, after), grid) in CASES.iter().zip(&cleared) {
        let original = load_test_grid(name).expect("load test bitmap");
        rp.compare_values(*before as f64, original.count_ones() as f64, 0.0);
        rp.compare_values(*after as f64, grid.count_ones() as f64, 0.0);
    }

    // Tests 13-16: a second pass changes nothing
    for grid in &cleared {
        let mut again = grid.clone();
        clear_black_edges(&mut again);
        rp.compare_grids(grid, &again);
    }

    // Tests 17-20: the trace visits exactly the removed pixels, once each
    for (name, before, after) in CASES {
        let mut grid = load_test_grid(name).expect("load test bitmap");
        let original = grid.clone();
        let mut order = Vec::new();
        clear_black_edges_traced(&mut grid, |c| order.push(c));

        let mut unique = order.clone();
        unique.sort();
        unique.dedup();
        let all_were_black = order.iter().all(|c| original.get(c.row, c.col).unwrap() == 1);
        let ok = unique.len() == order.len() && order.len() == before - after && all_were_black;
        rp.compare_values(1.0, if ok { 1.0 } else { 0.0 }, 0.0);
    }

    assert_eq!(rp.index(), 20);
    assert!(rp.cleanup(), "clear_edges regression test failed");
}

#[test]
fn noborder_has_no_seeds() {
    let grid = load_test_grid("noborder.pbm").unwrap();
    assert!(border_seeds(&grid).is_empty());
}

#[test]
fn frame_first_cleared_pixel_is_last_seed() {
    let mut grid = load_test_grid("frame.pbm").unwrap();
    let last_seed = *border_seeds(&grid).last().unwrap();
    let mut first = None;
    clear_black_edges_traced(&mut grid, |c| {
        first.get_or_insert(c);
    });
    assert_eq!(first, Some(last_seed));
}

#[test]
fn interior_blobs_of_frame_survive() {
    let mut grid = load_test_grid("frame.pbm").unwrap();
    clear_black_edges(&mut grid);
    #[rustfmt::skip]
    let expected = BitGrid::from_bits(10, 8, [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 1, 1, 1, 0, 0, 1, 0, 0,
        0, 0, 1, 0, 1, 0, 0, 0, 0, 0,
        0, 0, 1, 1, 1, 0, 1, 1, 0, 0,
        0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ])
    .unwrap();
    assert_eq!(grid, expected);
}
