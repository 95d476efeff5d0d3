//! These structs provide the CLI interface for the expenses CLI.

use crate::month::MonthFilter;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// expenses: reads expense data from a Google sheet and summarizes your spending.
///
/// The program fetches a range of expense rows ({date, category, amount, description}) from a
/// Google sheet, cleans the data, optionally filters it by month and/or category, and either
/// prints it directly or forwards it to an LLM that produces a human-readable markdown summary.
///
/// You will need a Google Cloud OAuth client credentials file (client_secret.json) and a
/// previously obtained token (token.json) in $EXPENSES_HOME/.secrets, and a GROQ_API_KEY in the
/// environment for the summarize subcommand.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch the expense rows, clean and filter them, and ask the AI agent for a markdown
    /// spending summary, which is printed to stdout.
    Summarize(SummarizeArgs),
    /// Print the total amount spent per category, without calling the AI agent.
    Totals(TotalsArgs),
    /// Print the cleaned expense rows in the chosen format, without calling the AI agent.
    Show(ShowArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where credentials are held (in a .secrets subdirectory). Defaults to
    /// ~/expenses
    #[arg(long, env = "EXPENSES_HOME", default_value_t = default_expenses_home())]
    expenses_home: DisplayPath,

    /// The spreadsheet ID of your expenses Google sheet, or the full sheet URL, e.g.
    /// https://docs.google.com/spreadsheets/d/1a7Km9FxQwRbPt82JvN4LzYpH5OcGnWsT6iDuE3VhMjX
    #[arg(long, env = "EXPENSES_SHEET_ID")]
    sheet_id: String,

    /// The A1-notation range holding the expense rows, header row first.
    #[arg(long, env = "EXPENSES_SHEET_RANGE", default_value = "Expenses!A:Z")]
    range: String,

    /// The model the AI agent service should use for summaries.
    #[arg(long, env = "EXPENSES_MODEL", default_value = "llama-3.3-70b-versatile")]
    model: String,
}

impl Common {
    pub fn new(
        log_level: LevelFilter,
        expenses_home: PathBuf,
        sheet_id: impl Into<String>,
        range: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            log_level,
            expenses_home: expenses_home.into(),
            sheet_id: sheet_id.into(),
            range: range.into(),
            model: model.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn expenses_home(&self) -> &DisplayPath {
        &self.expenses_home
    }

    pub fn sheet_id(&self) -> &str {
        &self.sheet_id
    }

    pub fn range(&self) -> &str {
        &self.range
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Args for the `expenses summarize` command.
#[derive(Debug, Default, Parser, Clone)]
pub struct SummarizeArgs {
    /// Only include expenses from this month, given as MM (current year) or YYYY-MM.
    #[arg(long)]
    month: Option<MonthFilter>,

    /// Only include expenses whose category matches (case-insensitive).
    #[arg(long)]
    category: Option<String>,
}

impl SummarizeArgs {
    pub fn new(month: Option<MonthFilter>, category: Option<String>) -> Self {
        Self { month, category }
    }

    pub fn month(&self) -> Option<&MonthFilter> {
        self.month.as_ref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Args for the `expenses totals` command.
#[derive(Debug, Default, Parser, Clone)]
pub struct TotalsArgs {
    /// Only include expenses from this month, given as MM (current year) or YYYY-MM.
    #[arg(long)]
    month: Option<MonthFilter>,

    /// Only include expenses whose category matches (case-insensitive).
    #[arg(long)]
    category: Option<String>,
}

impl TotalsArgs {
    pub fn new(month: Option<MonthFilter>, category: Option<String>) -> Self {
        Self { month, category }
    }

    pub fn month(&self) -> Option<&MonthFilter> {
        self.month.as_ref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

/// Args for the `expenses show` command.
#[derive(Debug, Default, Parser, Clone)]
pub struct ShowArgs {
    /// Only include expenses from this month, given as MM (current year) or YYYY-MM.
    #[arg(long)]
    month: Option<MonthFilter>,

    /// Only include expenses whose category matches (case-insensitive).
    #[arg(long)]
    category: Option<String>,

    /// The output format for the rows.
    #[arg(long, value_enum, default_value_t)]
    format: ShowFormat,
}

impl ShowArgs {
    pub fn new(month: Option<MonthFilter>, category: Option<String>, format: ShowFormat) -> Self {
        Self {
            month,
            category,
            format,
        }
    }

    pub fn month(&self) -> Option<&MonthFilter> {
        self.month.as_ref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn format(&self) -> ShowFormat {
        self.format
    }
}

/// Output formats for the `show` command.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ShowFormat {
    /// Markdown table.
    #[default]
    Table,
    /// JSON array of self-describing objects.
    Json,
    /// Properly escaped CSV.
    Csv,
}

serde_plain::derive_display_from_serialize!(ShowFormat);
serde_plain::derive_fromstr_from_deserialize!(ShowFormat);

fn default_expenses_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("expenses"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --expenses-home or EXPENSES_HOME instead of relying on the \
                default expenses home directory. If you continue using the program right now, you \
                may have problems!",
            );
            PathBuf::from("expenses")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
