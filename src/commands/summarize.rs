//! The `summarize` command: fetch, clean, filter, then ask the AI agent for a markdown summary.

use crate::agent;
use crate::args::SummarizeArgs;
use crate::commands::{load_expenses, Out};
use crate::{Config, Mode, Result};
use tracing::debug;

pub async fn summarize(config: Config, mode: Mode, args: SummarizeArgs) -> Result<Out<()>> {
    let expenses = load_expenses(&config, mode, args.month(), args.category()).await?;
    if expenses.is_empty() {
        return Ok(Out::new_message("No expenses matched the given filters."));
    }

    let prompt = agent::render_prompt(&expenses, args.month(), args.category());
    debug!("Agent prompt:\n\n{prompt}\n\n");

    let agent = agent::agent(&config, mode)?;
    let markdown = agent.summarize(&prompt).await?;
    Ok(Out::new_message(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MonthFilter;

    #[tokio::test]
    async fn test_summarize_end_to_end() {
        let config = Config::for_testing();
        let out = summarize(config, Mode::Testing, SummarizeArgs::default())
            .await
            .unwrap();
        assert!(out.message().contains("Spending Summary"));
    }

    #[tokio::test]
    async fn test_summarize_no_matching_rows() {
        let config = Config::for_testing();
        let month: MonthFilter = "1999-01".parse().unwrap();
        let args = SummarizeArgs::new(Some(month), None);
        let out = summarize(config, Mode::Testing, args).await.unwrap();
        assert_eq!(out.message(), "No expenses matched the given filters.");
    }
}
