//! The `totals` command: print the total amount spent per category.

use crate::args::TotalsArgs;
use crate::commands::{load_expenses, Out};
use crate::model::CategoryTotal;
use crate::render;
use crate::{Config, Mode, Result};

pub async fn totals(config: Config, mode: Mode, args: TotalsArgs) -> Result<Out<Vec<CategoryTotal>>> {
    let expenses = load_expenses(&config, mode, args.month(), args.category()).await?;
    if expenses.is_empty() {
        return Ok(Out::new_message("No expenses matched the given filters."));
    }

    let totals = expenses.totals_by_category();
    let table = render::totals_table(&totals);
    Ok(Out::new(table, totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonthFilter;

    #[tokio::test]
    async fn test_totals_all_rows() {
        let config = Config::for_testing();
        let out = totals(config, Mode::Testing, TotalsArgs::default())
            .await
            .unwrap();
        assert!(out.message().contains("| Category | Total |"));
        let structure = out.structure().unwrap();
        assert!(structure.iter().any(|t| t.category == "Groceries"));
    }

    #[tokio::test]
    async fn test_totals_filtered_by_month() {
        let config = Config::for_testing();
        let month: MonthFilter = "2025-09".parse().unwrap();
        let args = TotalsArgs::new(Some(month), None);
        let out = totals(config, Mode::Testing, args).await.unwrap();
        let structure = out.structure().unwrap();
        // September seed data spans four categories with one expense each.
        assert_eq!(structure.len(), 4);
        assert!(structure.iter().all(|t| t.category != "Groceries"));
    }
}
