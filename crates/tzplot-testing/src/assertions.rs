//! Custom assertions for plotted output.
//!
//! Columns are counted in characters, so multi-byte symbols such as the
//! shaded rectangles count as one column each.

use anyhow::{Context, Result, bail};

/// Character at `column` of `line`.
pub fn char_at(line: &str, column: usize) -> Option<char> {
    line.chars().nth(column)
}

/// Assert that the line starting with `prefix` has `marker` at `column`.
pub fn assert_marker_at(output: &str, prefix: &str, marker: char, column: usize) -> Result<()> {
    let line = output
        .lines()
        .find(|line| line.starts_with(prefix))
        .with_context(|| format!("No line starting with {:?}", prefix))?;

    match char_at(line, column) {
        Some(found) if found == marker => Ok(()),
        found => bail!(
            "Expected {:?} at column {} of {:?}, found {:?}",
            marker,
            column,
            line,
            found
        ),
    }
}

/// Assert that every symbol row (the line after each zone header) has `marker`
/// at `column`.
pub fn assert_rows_marked(output: &str, marker: char, column: usize) -> Result<()> {
    let lines: Vec<&str> = output.lines().collect();
    let mut rows = 0;
    for pair in lines.get(1..).unwrap_or_default().chunks(2) {
        let [header, row] = pair else {
            continue;
        };
        if !header.contains(": ") {
            continue;
        }
        if char_at(row, column) != Some(marker) {
            bail!("Row below {:?} lacks {:?} at column {}", header, marker, column);
        }
        rows += 1;
    }

    if rows == 0 {
        bail!("No zone rows found in output");
    }
    Ok(())
}
