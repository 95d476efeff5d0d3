//! The `show` command: print the cleaned, filtered expense rows without calling the AI agent.

use crate::args::{ShowArgs, ShowFormat};
use crate::commands::{load_expenses, Out};
use crate::model::Expenses;
use crate::render;
use crate::{Config, Mode, Result};
use anyhow::Context;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// The structured output of the `show` command, in the format the user asked for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rows {
    Json(serde_json::Value),
    Table(String),
    Csv(String),
}

impl Display for Rows {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rows::Json(value) => {
                let json = serde_json::to_string_pretty(value).map_err(|_| std::fmt::Error)?;
                write!(f, "{json}")
            }
            Rows::Table(table) => write!(f, "{table}"),
            Rows::Csv(csv) => write!(f, "{csv}"),
        }
    }
}

pub async fn show(config: Config, mode: Mode, args: ShowArgs) -> Result<Out<Rows>> {
    let expenses = load_expenses(&config, mode, args.month(), args.category()).await?;
    if expenses.is_empty() {
        return Ok(Out::new_message("No expenses matched the given filters."));
    }

    let rows = match args.format() {
        ShowFormat::Table => Rows::Table(render::rows_table(&expenses)),
        ShowFormat::Json => Rows::Json(serde_json::to_value(expenses.rows())?),
        ShowFormat::Csv => Rows::Csv(to_csv(&expenses)?),
    };
    Ok(Out::new(rows.to_string(), rows))
}

/// Serializes the expenses as CSV with a header row.
fn to_csv(expenses: &Expenses) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["Date", "Category", "Amount", "Description"])?;
    for expense in expenses.iter() {
        writer.write_record([
            expense.date().to_string(),
            expense.category().to_string(),
            expense.amount().to_string(),
            expense.description().to_string(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .context("Unable to flush the CSV writer")?;
    String::from_utf8(bytes).context("The CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonthFilter;

    fn args(format: ShowFormat) -> ShowArgs {
        let month: MonthFilter = "2025-09".parse().unwrap();
        ShowArgs::new(Some(month), None, format)
    }

    #[tokio::test]
    async fn test_show_table() {
        let config = Config::for_testing();
        let out = show(config, Mode::Testing, args(ShowFormat::Table))
            .await
            .unwrap();
        assert!(out.message().contains("| Date | Category | Amount | Description |"));
        assert!(out.message().contains("City Water District"));
    }

    #[tokio::test]
    async fn test_show_json() {
        let config = Config::for_testing();
        let out = show(config, Mode::Testing, args(ShowFormat::Json))
            .await
            .unwrap();
        let Some(Rows::Json(value)) = out.structure() else {
            panic!("expected json output");
        };
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3]["description"], "City Water District");
    }

    #[tokio::test]
    async fn test_show_csv_escapes_commas() {
        let config = Config::for_testing();
        let out = show(config, Mode::Testing, args(ShowFormat::Csv))
            .await
            .unwrap();
        // Amounts like -$1,234.56 contain commas and must be quoted.
        assert!(out.message().starts_with("Date,Category,Amount,Description"));
        assert!(out.message().contains("\"Gas & Fuel\"") || out.message().contains("Gas & Fuel"));
        assert!(out.message().contains("In-N-Out Burger"));
    }
}
