//! CSV export of the full simulation grid.
//!
//! Matches the download format of the fan-chart UI: a `Years` column holding
//! the time axis, then one column per simulated path labeled by path index.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use fanchart_core::PathGrid;

/// Render the grid as CSV: header `Years,0,1,...`, one row per time step.
#[must_use]
pub fn simulation_csv(grid: &PathGrid) -> String {
    let time_axis = grid.time_axis();
    let mut out = String::new();

    out.push_str("Years");
    for path_index in 0..grid.num_paths() {
        let _ = write!(out, ",{path_index}");
    }
    out.push('\n');

    for (years, row) in time_axis.iter().zip(grid.rows()) {
        let _ = write!(out, "{years}");
        for value in row {
            let _ = write!(out, ",{value}");
        }
        out.push('\n');
    }

    out
}

/// Write the grid to `path` atomically using the write-then-rename pattern.
pub fn write_simulation_csv(path: &Path, grid: &PathGrid) -> io::Result<()> {
    let temp_path = path.with_extension("csv.tmp");
    fs::write(&temp_path, simulation_csv(grid))?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
