//! unblackedges-test - Regression test framework
//!
//! Supports three modes, modelled on golden-file regression suites:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use unblackedges_test::{RegParams, load_test_grid};
//!
//! let mut rp = RegParams::new("clear_edges");
//! let grid = load_test_grid("frame.pbm").unwrap();
//! rp.compare_values(24.0, grid.count_ones() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a test bitmap from the test data directory
///
/// # Arguments
///
/// * `name` - Bitmap filename (e.g., "frame.pbm")
pub fn load_test_grid(name: &str) -> TestResult<unblackedges_core::BitGrid> {
    let path = test_data_path(name);
    unblackedges_io::read_grid(&path).map_err(|e| TestError::GridLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // unblackedges-test is at crates/unblackedges-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
