//! Types that represent the core data model, such as `Expense` and `Amount`.

mod amount;
mod expense;

pub use amount::{Amount, AmountError};
pub use expense::{Expense, ExpenseColumn};

use crate::Result;
use anyhow::bail;
use expense::ColumnIndices;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The ordered collection of expense rows parsed from the sheet.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expenses {
    data: Vec<Expense>,
}

impl Expenses {
    pub fn new(data: Vec<Expense>) -> Self {
        Self { data }
    }

    /// Parses cleaned sheet rows into expenses. The first row must be the header row. Rows whose
    /// date cannot be parsed are skipped with a warning; rows longer than the header row are an
    /// error.
    pub fn parse(rows: Vec<Vec<String>>) -> Result<Self> {
        let mut rows = rows.into_iter();
        let indices = match rows.next() {
            Some(header_row) => ColumnIndices::new(&header_row)?,
            None => bail!("An empty data set cannot be parsed into expenses"),
        };

        let mut data = Vec::new();
        for (row_ix, values) in rows.enumerate() {
            if values.len() > indices.len() {
                bail!(
                    "A row longer than the headers list was encountered at row {}",
                    row_ix + 2
                );
            }
            if let Some(expense) = indices.parse_row(row_ix + 2, &values) {
                data.push(expense);
            }
        }
        Ok(Self { data })
    }

    pub fn rows(&self) -> &[Expense] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.data.iter()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Keeps only the rows whose date falls in the given month.
    pub fn filter_month(self, year: i32, month: u32) -> Self {
        use chrono::Datelike;
        Self {
            data: self
                .data
                .into_iter()
                .filter(|e| e.date().year() == year && e.date().month() == month)
                .collect(),
        }
    }

    /// Keeps only the rows whose category matches `category` (case-insensitive).
    pub fn filter_category(self, category: &str) -> Self {
        Self {
            data: self
                .data
                .into_iter()
                .filter(|e| e.category().eq_ignore_ascii_case(category))
                .collect(),
        }
    }

    /// Sums the amounts grouped by category, sorted descending by absolute total so the biggest
    /// spending category comes first regardless of sign convention.
    pub fn totals_by_category(&self) -> Vec<CategoryTotal> {
        let mut sums: BTreeMap<&str, Decimal> = BTreeMap::new();
        for expense in &self.data {
            *sums.entry(expense.category()).or_default() += expense.amount().value();
        }
        let mut totals: Vec<CategoryTotal> = sums
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total: Amount::new(total),
            })
            .collect();
        totals.sort_by(|a, b| b.total.value().abs().cmp(&a.total.value().abs()));
        totals
    }
}

/// The summed amount for one category.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn sample() -> Expenses {
        Expenses::parse(rows(&[
            &["Date", "Category", "Amount", "Description"],
            &["10/20/2025", "Groceries", "-$87.43", "Whole Foods"],
            &["10/19/2025", "Coffee Shops", "-$6.75", "Starbucks"],
            &["10/15/2025", "Groceries", "-$63.21", "Trader Joe's"],
            &["9/30/2025", "Groceries", "-$12.00", "Corner store"],
            &["9/14/2025", "Utilities", "-$142.67", "PG&E"],
        ]))
        .unwrap()
    }

    #[test]
    fn test_parse() {
        let expenses = sample();
        assert_eq!(expenses.len(), 5);
        assert_eq!(expenses.rows()[0].category(), "Groceries");
    }

    #[test]
    fn test_parse_empty_data_set() {
        assert!(Expenses::parse(Vec::new()).is_err());
    }

    #[test]
    fn test_parse_row_longer_than_header() {
        let result = Expenses::parse(rows(&[
            &["Date", "Category", "Amount"],
            &["10/20/2025", "Groceries", "-$1.00", "extra"],
        ]));
        assert!(result.is_err());
        let message = format!("{:?}", result.err().unwrap());
        assert!(message.contains("row 2"));
    }

    #[test]
    fn test_parse_skips_unparseable_dates() {
        let expenses = Expenses::parse(rows(&[
            &["Date", "Category", "Amount", "Description"],
            &["N/A", "Groceries", "-$1.00", "bad row"],
            &["10/20/2025", "Groceries", "-$2.00", "good row"],
        ]))
        .unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses.rows()[0].description(), "good row");
    }

    #[test]
    fn test_filter_month_keeps_only_that_month() {
        let filtered = sample().filter_month(2025, 10);
        assert_eq!(filtered.len(), 3);
        for expense in filtered.iter() {
            use chrono::Datelike;
            assert_eq!(expense.date().month(), 10);
            assert_eq!(expense.date().year(), 2025);
        }
    }

    #[test]
    fn test_filter_month_no_matches() {
        let filtered = sample().filter_month(2024, 1);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_category_case_insensitive() {
        let filtered = sample().filter_category("groceries");
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_totals_by_category_sums_match_arithmetic() {
        let totals = sample().totals_by_category();
        assert_eq!(totals.len(), 3);
        // Sorted descending by absolute total.
        assert_eq!(totals[0].category, "Groceries");
        assert_eq!(
            totals[0].total.value(),
            Decimal::from_str("-162.64").unwrap()
        );
        assert_eq!(totals[1].category, "Utilities");
        assert_eq!(totals[2].category, "Coffee Shops");
    }

    #[test]
    fn test_totals_after_month_filter() {
        let totals = sample().filter_month(2025, 9).totals_by_category();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Utilities");
        assert_eq!(
            totals[1].total.value(),
            Decimal::from_str("-12.00").unwrap()
        );
    }
}
