//! Builds the prompt that is forwarded to the AI agent.

use crate::model::Expenses;
use crate::render;
use crate::MonthFilter;
use std::fmt::Write;

/// The system instructions for the agent.
pub(super) const INSTRUCTIONS: &str = "You are a financial personal analyst helping users to \
    understand their financial data. Give simple responses, in a nutshell, format in markdown \
    and use tables to display data where possible.";

/// Renders the user prompt: what is being asked, the scope of the data, the per-category totals,
/// and the individual expense rows.
pub fn render_prompt(
    expenses: &Expenses,
    month: Option<&MonthFilter>,
    category: Option<&str>,
) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Analyze my expenses below. Summarize where the money went, point out anything \
        noteworthy, and suggest how I could save more."
    );

    let scope = match (month, category) {
        (Some(m), Some(c)) => format!("Scope: {m}, category '{c}'."),
        (Some(m), None) => format!("Scope: {m}, all categories."),
        (None, Some(c)) => format!("Scope: all dates, category '{c}'."),
        (None, None) => String::from("Scope: all dates, all categories."),
    };
    let _ = writeln!(prompt, "{scope}");

    let _ = writeln!(prompt, "\nTotal spent per category:\n");
    prompt.push_str(&render::totals_table(&expenses.totals_by_category()));

    let _ = writeln!(prompt, "\nIndividual expenses ({} rows):\n", expenses.len());
    prompt.push_str(&render::rows_table(expenses));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Expense};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn sample() -> Expenses {
        Expenses::new(vec![
            Expense::new(
                NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
                "Groceries",
                Amount::from_str("-$87.43").unwrap(),
                "Whole Foods",
            ),
            Expense::new(
                NaiveDate::from_ymd_opt(2025, 10, 19).unwrap(),
                "Coffee Shops",
                Amount::from_str("-$6.75").unwrap(),
                "Starbucks",
            ),
        ])
    }

    #[test]
    fn test_render_prompt_contains_tables() {
        let expenses = sample();
        let prompt = render_prompt(&expenses, None, None);
        assert!(prompt.contains("| Category | Total |"));
        assert!(prompt.contains("| Groceries | -$87.43 |"));
        assert!(prompt.contains("| Date | Category | Amount | Description |"));
        assert!(prompt.contains("Individual expenses (2 rows)"));
    }

    #[test]
    fn test_render_prompt_scope_lines() {
        let expenses = sample();
        let month: MonthFilter = "2025-10".parse().unwrap();

        let p = render_prompt(&expenses, Some(&month), None);
        assert!(p.contains("Scope: 2025-10, all categories."));

        let p = render_prompt(&expenses, Some(&month), Some("Groceries"));
        assert!(p.contains("Scope: 2025-10, category 'Groceries'."));

        let p = render_prompt(&expenses, None, Some("Groceries"));
        assert!(p.contains("Scope: all dates, category 'Groceries'."));

        let p = render_prompt(&expenses, None, None);
        assert!(p.contains("Scope: all dates, all categories."));
    }
}
