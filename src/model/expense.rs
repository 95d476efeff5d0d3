//! The `Expense` record and parsing of header-mapped sheet rows.

use crate::model::Amount;
use crate::Result;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One expense row from the sheet.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Expense {
    date: NaiveDate,
    category: String,
    amount: Amount,
    description: String,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Represents the known columns that should be found in the expenses sheet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseColumn {
    Date,
    Category,
    Amount,
    Description,
}

serde_plain::derive_display_from_serialize!(ExpenseColumn);
serde_plain::derive_fromstr_from_deserialize!(ExpenseColumn);

impl ExpenseColumn {
    /// Matches a sheet header cell to a known column, ignoring case. Unknown headers return
    /// `None` and their columns are ignored during parsing.
    pub fn from_header(header: &str) -> Option<ExpenseColumn> {
        let header = header.trim();
        if header.eq_ignore_ascii_case(DATE_STR) {
            Some(ExpenseColumn::Date)
        } else if header.eq_ignore_ascii_case(CATEGORY_STR) {
            Some(ExpenseColumn::Category)
        } else if header.eq_ignore_ascii_case(AMOUNT_STR) {
            Some(ExpenseColumn::Amount)
        } else if header.eq_ignore_ascii_case(DESCRIPTION_STR) {
            Some(ExpenseColumn::Description)
        } else {
            None
        }
    }
}

pub(super) const DATE_STR: &str = "Date";
pub(super) const CATEGORY_STR: &str = "Category";
pub(super) const AMOUNT_STR: &str = "Amount";
pub(super) const DESCRIPTION_STR: &str = "Description";

/// Maps the known columns to their indices in the header row.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct ColumnIndices {
    date: usize,
    category: usize,
    amount: usize,
    description: Option<usize>,
    len: usize,
}

impl ColumnIndices {
    /// Builds the index map from a header row. `Date`, `Category` and `Amount` are required;
    /// `Description` is optional. Duplicate known headers are an error.
    pub(super) fn new<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let mut date = None;
        let mut category = None;
        let mut amount = None;
        let mut description = None;
        for (ix, header) in headers.iter().enumerate() {
            let Some(column) = ExpenseColumn::from_header(header.as_ref()) else {
                continue;
            };
            let slot = match column {
                ExpenseColumn::Date => &mut date,
                ExpenseColumn::Category => &mut category,
                ExpenseColumn::Amount => &mut amount,
                ExpenseColumn::Description => &mut description,
            };
            if slot.is_some() {
                bail!("Duplicate '{column}' header in the sheet");
            }
            *slot = Some(ix);
        }
        Ok(Self {
            date: date.context(missing(DATE_STR))?,
            category: category.context(missing(CATEGORY_STR))?,
            amount: amount.context(missing(AMOUNT_STR))?,
            description,
            len: headers.len(),
        })
    }

    pub(super) fn len(&self) -> usize {
        self.len
    }

    /// Parses one data row. Returns `None` (with a warning) when the date cannot be parsed,
    /// since a row without a usable date can never match a month filter.
    pub(super) fn parse_row(&self, row_number: usize, values: &[String]) -> Option<Expense> {
        let date_cell = cell(values, self.date);
        let Some(date) = parse_date(date_cell) else {
            warn!("Skipping row {row_number}: unparseable date '{date_cell}'");
            return None;
        };
        let amount = Amount::parse_lossy(cell(values, self.amount));
        let description = self
            .description
            .map(|ix| cell(values, ix))
            .unwrap_or_default();
        Some(Expense::new(
            date,
            cell(values, self.category),
            amount,
            description,
        ))
    }
}

fn missing(header: &str) -> String {
    format!("The sheet data has no '{header}' header column")
}

/// A missing cell in a ragged row reads as empty.
fn cell(values: &[String], ix: usize) -> &str {
    values.get(ix).map(|s| s.as_str()).unwrap_or("")
}

/// Accepted date formats, tried in order: US `M/D/YYYY`, ISO `YYYY-MM-DD`, day-first
/// `DD/MM/YYYY`. Day-first is last so that it only catches dates the US format rejects.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%d/%m/%Y"];

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}
