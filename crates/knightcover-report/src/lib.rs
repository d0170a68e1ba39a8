//! Plain-text reports of knight placements.
//!
//! A report lists the knights as 1-based coordinates in row-major order,
//! followed by the occupancy matrix:
//!
//! ```text
//! =============== Minimal Knight Cover ===============
//! Board size: 2 rows × 3 cols
//! ----------------------------------------
//!
//! [Coordinates]
//!   Knight 1: r1 c1
//!   Knight 2: r2 c3
//!
//! Total: 2 knights
//!
//! [Matrix] (1 = knight, 0 = empty)
//!    c1  c2  c3
//! r1 1   0   0
//! r2 0   0   1
//! ====================================================
//! ```
//!
//! Matrix lines are shown here without trailing spaces; every column in the
//! generated text is padded to four characters.

use std::{
    fmt::Write as _,
    fs, io,
    path::{Path, PathBuf},
};

use knightcover_core::Grid;

const TITLE: &str = "=============== Minimal Knight Cover ===============";
const SEPARATOR: &str = "----------------------------------------";
const FOOTER: &str = "====================================================";

/// Errors returned when saving a report.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ReportError {
    /// Writing the file failed.
    #[display("failed to write {}: {source}", path.display())]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Formats `grid` as a report.
///
/// The grid is only read.
///
/// # Examples
///
/// ```
/// use knightcover_core::Grid;
///
/// let grid: Grid = "N.\n..".parse()?;
/// let report = knightcover_report::generate_report(&grid);
/// assert!(report.contains("Board size: 2 rows × 2 cols\n"));
/// assert!(report.contains("  Knight 1: r1 c1\n"));
/// assert!(report.contains("Total: 1 knights\n"));
/// # Ok::<(), knightcover_core::GridParseError>(())
/// ```
#[must_use]
pub fn generate_report(grid: &Grid) -> String {
    let size = grid.size();
    let mut out = String::new();

    // Writing to a `String` cannot fail.
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "Board size: {} rows × {} cols", size.rows(), size.cols());
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out);

    let _ = writeln!(out, "[Coordinates]");
    let mut count = 0;
    for (i, pos) in grid.occupied_positions().enumerate() {
        count = i + 1;
        let _ = writeln!(out, "  Knight {count}: {pos}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total: {count} knights");
    let _ = writeln!(out);

    let _ = writeln!(out, "[Matrix] (1 = knight, 0 = empty)");
    out.push_str("   ");
    for col in 1..=size.cols() {
        let _ = write!(out, "{:<4}", format!("c{col}"));
    }
    out.push('\n');
    for (row, cells) in grid.rows().enumerate() {
        let _ = write!(out, "{:<3}", format!("r{}", row + 1));
        for cell in cells {
            let _ = write!(out, "{:<4}", cell.as_bit());
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{FOOTER}");

    out
}

/// Writes `report` to `path` as UTF-8, replacing any existing file.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the file cannot be written.
pub fn save_report(path: impl AsRef<Path>, report: &str) -> Result<(), ReportError> {
    let path = path.as_ref();
    fs::write(path, report).map_err(|source| ReportError::Io {
        path: path.to_owned(),
        source,
    })?;
    log::info!("saved report to {}", path.display());
    Ok(())
}

/// Returns the suggested file name for a report created at `unix_millis`.
///
/// ```
/// assert_eq!(
///     knightcover_report::default_file_name(1_700_000_000_000),
///     "minimal_knight_cover_1700000000000.txt",
/// );
/// ```
#[must_use]
pub fn default_file_name(unix_millis: u128) -> String {
    format!("minimal_knight_cover_{unix_millis}.txt")
}
