//! Tabular cleanup of raw sheet data before it is parsed into expense records.

/// Cleans raw sheet rows: drops rows with no non-whitespace content and replaces empty cells
/// with `"N/A"`. The header row, if present, is the first row and is treated like any other.
///
/// An empty amount cell therefore becomes `"N/A"`, which later coerces to zero, and an empty
/// date cell becomes `"N/A"`, which causes the row to be skipped at parse time.
pub fn clean_rows(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    rows.into_iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|row| {
            row.into_iter()
                .map(|cell| {
                    if cell.is_empty() {
                        String::from("N/A")
                    } else {
                        cell
                    }
                })
                .collect()
        })
        .collect()
}
