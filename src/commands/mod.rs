//! Command handlers for the expenses CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod show;
mod summarize;
mod totals;

use crate::model::Expenses;
use crate::{api, clean_rows, Config, Mode, MonthFilter, Result};
use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

pub use show::{show, Rows};
pub use summarize::summarize;
pub use totals::totals;

/// The output type for a command. The `message` is the user-facing text (markdown for most
/// commands) and is printed to stdout; any structured data is logged as JSON at debug level.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// The user-facing text describing or containing the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to stdout and the structured data (if it exists) as JSON to `debug!`.
    pub fn print(&self) {
        println!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// Fetches the configured range, cleans the rows, parses them into expenses, and applies the
/// month/category filters. This is the front half of every subcommand.
pub(super) async fn load_expenses(
    config: &Config,
    mode: Mode,
    month: Option<&MonthFilter>,
    category: Option<&str>,
) -> Result<Expenses> {
    let mut sheet = api::sheet(config, mode).await?;
    let rows = sheet.get(config.range()).await?;
    debug!("Fetched {} raw rows", rows.len());

    let rows = clean_rows(rows);
    let mut expenses = Expenses::parse(rows)?;
    if let Some(month) = month {
        expenses = expenses.filter_month(month.year(), month.month());
    }
    if let Some(category) = category {
        expenses = expenses.filter_category(category);
    }
    debug!("{} expense rows after cleaning and filtering", expenses.len());
    Ok(expenses)
}
