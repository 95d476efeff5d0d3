//! Markdown table rendering for expense rows and category totals.

use crate::model::{CategoryTotal, Expenses};
use std::fmt::Write;

/// Renders a markdown table. Cells containing `|` are escaped so the table stays well-formed.
pub(crate) fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "| {} |", headers.join(" | "));
    let _ = writeln!(
        out,
        "|{}|",
        headers.iter().map(|_| " --- ").collect::<Vec<_>>().join("|")
    );
    for row in rows {
        let cells: Vec<String> = row.iter().map(|c| c.replace('|', "\\|")).collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
    out
}

/// The per-category totals as a markdown table.
pub(crate) fn totals_table(totals: &[CategoryTotal]) -> String {
    let rows: Vec<Vec<String>> = totals
        .iter()
        .map(|t| vec![t.category.clone(), t.total.to_string()])
        .collect();
    markdown_table(&["Category", "Total"], &rows)
}

/// The expense rows as a markdown table, most recent first as they come from the sheet.
pub(crate) fn rows_table(expenses: &Expenses) -> String {
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.date().to_string(),
                e.category().to_string(),
                e.amount().to_string(),
                e.description().to_string(),
            ]
        })
        .collect();
    markdown_table(&["Date", "Category", "Amount", "Description"], &rows)
}
