//! Implements the very simple `Sheet` trait using in-memory data for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that we can run the
//! whole app, top-to-bottom, without using Google Sheets.

use crate::api::Sheet;
use crate::Result;
use std::io::Cursor;

/// An implementation of the `Sheet` trait that does not use Google sheets. It holds one table of
/// rows in memory and, by default, is seeded with some existing expense data.
pub(crate) struct TestSheet {
    pub(crate) rows: Vec<Vec<String>>,
}

impl TestSheet {
    /// Create a new `TestSheet` holding `rows` (header row first).
    pub(crate) fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}

#[async_trait::async_trait]
impl Sheet for TestSheet {
    /// The requested range is ignored; a `TestSheet` has exactly one table.
    async fn get(&mut self, _range: &str) -> Result<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }
}

impl Default for TestSheet {
    /// Loads seed data from this module.
    fn default() -> Self {
        Self::new(load_csv(EXPENSE_DATA).expect("The seed expense data must parse"))
    }
}

/// Loads data from a CSV-formatted string.
fn load_csv(csv_data: &str) -> Result<Vec<Vec<String>>> {
    let bytes = csv_data.as_bytes();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false) // Ensure headers are treated as part of the data
        .from_reader(Cursor::new(bytes));

    let mut rows: Vec<Vec<String>> = Vec::new();

    for result in rdr.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(|field| field.to_string()).collect();
        rows.push(row);
    }
    Ok(rows)
}

/// Seed expense data. Contains a few empty cells on purpose so that the cleaning step has
/// something to do when the whole pipeline runs against this sheet.
const EXPENSE_DATA: &str = r##"Date,Category,Amount,Description
10/20/2025,Groceries,-$87.43,Whole Foods Market
10/19/2025,Coffee Shops,-$6.75,Starbucks #2847
10/18/2025,Gas & Fuel,-$52.30,Shell Gas Station
10/17/2025,Restaurants,-$14.85,Chipotle Mexican Grill
10/16/2025,Utilities,-$142.67,PG&E Electric
10/15/2025,Groceries,-$63.21,Trader Joe's #429
10/14/2025,Coffee Shops,-$7.25,Peet's Coffee & Tea
10/13/2025,Gas & Fuel,-$48.90,Chevron Gas
10/12/2025,Restaurants,-$12.40,Panera Bread
10/11/2025,Utilities,-$89.99,Comcast Internet
10/10/2025,Groceries,-$95.82,Safeway #1534
10/5/2025,,-$118.56,Costco Wholesale
9/28/2025,Coffee Shops,-$5.95,
9/21/2025,Gas & Fuel,-$61.45,Shell Station #4521
9/14/2025,Restaurants,-$9.75,In-N-Out Burger
9/7/2025,Utilities,-$45.88,City Water District
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_seed_data() {
        let mut sheet = TestSheet::default();
        let rows = sheet.get("Expenses!A:Z").await.unwrap();
        assert_eq!(rows[0], vec!["Date", "Category", "Amount", "Description"]);
        assert!(rows.len() > 10);
    }

    #[tokio::test]
    async fn test_custom_rows() {
        let mut sheet = TestSheet::new(vec![vec!["Date".to_string()]]);
        let rows = sheet.get("anything").await.unwrap();
        assert_eq!(rows.len(), 1);
    }
}
