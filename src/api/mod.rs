//! Google Sheets access behind the `Sheet` trait.

mod files;
mod sheet;
mod test_sheet;
mod token;

use crate::{Config, Result};

pub(crate) use test_sheet::TestSheet;
pub(crate) use token::TokenProvider;

/// Chooses between the real Google-backed `Sheet` implementation and the in-memory test double.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Live,
    Testing,
}

impl Mode {
    /// When `EXPENSES_IN_TEST_MODE` is set and non-zero in length, the mode will be
    /// `Mode::Testing`, otherwise it will be `Mode::Live`.
    pub fn from_env() -> Self {
        match std::env::var("EXPENSES_IN_TEST_MODE") {
            Ok(value) if !value.is_empty() => Mode::Testing,
            _ => Mode::Live,
        }
    }
}

/// A spreadsheet that can produce rows of formatted cell values for an A1-notation range.
#[async_trait::async_trait]
pub trait Sheet {
    async fn get(&mut self, range: &str) -> Result<Vec<Vec<String>>>;
}

/// Creates a `Sheet` implementation for the given mode.
pub async fn sheet(config: &Config, mode: Mode) -> Result<Box<dyn Sheet + Send>> {
    match mode {
        Mode::Live => Ok(Box::new(sheet::GoogleSheet::new(config.clone()).await?)),
        Mode::Testing => Ok(Box::new(TestSheet::default())),
    }
}
