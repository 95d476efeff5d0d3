//! Runtime configuration for the expenses CLI.
//!
//! Everything is provided through environment variables (or their CLI-flag equivalents): the
//! spreadsheet ID, the cell range, the model name, and the `GROQ_API_KEY`. The only filesystem
//! convention is `$EXPENSES_HOME/.secrets/`, which holds the Google OAuth credential files.

use crate::args::Common;
use crate::Result;
use secrecy::SecretString;
use std::path::{Path, PathBuf};

const SECRETS: &str = ".secrets";
const CLIENT_SECRET_JSON: &str = "client_secret.json";
const TOKEN_JSON: &str = "token.json";

/// The API key environment variable for the AI agent service.
const API_KEY_ENV: &str = "GROQ_API_KEY";

/// The `Config` object represents the configuration of the app, assembled from environment
/// variables and CLI flags. It provides the spreadsheet ID, the cell range, the agent model and
/// API key, and the paths to the Google OAuth credential files.
#[derive(Debug, Clone)]
pub struct Config {
    spreadsheet_id: String,
    range: String,
    model: String,
    api_key: Option<SecretString>,
    secrets: PathBuf,
}

impl Config {
    /// Builds a `Config` from the common CLI arguments plus the `GROQ_API_KEY` environment
    /// variable. The sheet ID may be given either bare or as a full Google Sheets URL.
    ///
    /// # Errors
    /// Returns an error if the sheet ID looks like a URL but the ID cannot be extracted from it.
    pub fn from_common(common: &Common) -> Result<Self> {
        let spreadsheet_id = extract_spreadsheet_id(common.sheet_id())?.to_string();
        let api_key = std::env::var(API_KEY_ENV).ok().map(SecretString::from);
        Ok(Self {
            spreadsheet_id,
            range: common.range().to_string(),
            model: common.model().to_string(),
            api_key,
            secrets: common.expenses_home().join(SECRETS),
        })
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn range(&self) -> &str {
        &self.range
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The AI agent API key, if `GROQ_API_KEY` was set.
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    pub fn secrets(&self) -> &Path {
        &self.secrets
    }

    /// Path to the downloaded OAuth 2.0 client credentials file.
    pub fn client_secret_path(&self) -> PathBuf {
        self.secrets.join(CLIENT_SECRET_JSON)
    }

    /// Path to the stored OAuth token file.
    pub fn token_path(&self) -> PathBuf {
        self.secrets.join(TOKEN_JSON)
    }

    #[cfg(test)]
    pub(crate) fn for_testing() -> Self {
        Self {
            spreadsheet_id: "TestSheetId123".to_string(),
            range: "Expenses!A:Z".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key: None,
            secrets: PathBuf::from(".secrets"),
        }
    }
}

/// Extracts the spreadsheet ID from a Google Sheets URL, or returns the input unchanged when it
/// does not look like a URL.
///
/// # Arguments
/// * `id_or_url` - A bare spreadsheet ID, or a URL like
///   "https://docs.google.com/spreadsheets/d/SPREADSHEET_ID/..."
fn extract_spreadsheet_id(id_or_url: &str) -> Result<&str> {
    if !id_or_url.contains('/') {
        return Ok(id_or_url);
    }

    // URL format: https://docs.google.com/spreadsheets/d/SPREADSHEET_ID/...
    // or: https://docs.google.com/spreadsheets/d/SPREADSHEET_ID?foo=bar
    let parts: Vec<&str> = id_or_url.split('/').collect();
    for (i, part) in parts.iter().enumerate() {
        if *part == "d" && i + 1 < parts.len() {
            // Extract the ID and remove any query parameters or fragments
            let id_part = parts[i + 1];
            let id = id_part
                .split('?')
                .next()
                .unwrap_or(id_part)
                .split('#')
                .next()
                .unwrap_or(id_part);
            return Ok(id);
        }
    }
    Err(anyhow::anyhow!(
        "Invalid Google Sheets URL format. Expected a bare spreadsheet ID or \
        https://docs.google.com/spreadsheets/d/SPREADSHEET_ID"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Common;
    use std::path::PathBuf;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_extract_spreadsheet_id_from_url() {
        let url = "https://docs.google.com/spreadsheets/d/7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL/edit";
        let id = extract_spreadsheet_id(url).unwrap();
        assert_eq!(id, "7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL");

        let url2 = "https://docs.google.com/spreadsheets/d/ABC123";
        assert_eq!(extract_spreadsheet_id(url2).unwrap(), "ABC123");

        let invalid = "https://example.com/invalid";
        assert!(extract_spreadsheet_id(invalid).is_err());
    }

    #[test]
    fn test_extract_spreadsheet_id_query_and_fragment() {
        let url = "https://docs.google.com/spreadsheets/d/ABC123?foo=bar";
        assert_eq!(extract_spreadsheet_id(url).unwrap(), "ABC123");

        let url2 = "https://docs.google.com/spreadsheets/d/ABC123#gid=0";
        assert_eq!(extract_spreadsheet_id(url2).unwrap(), "ABC123");
    }

    #[test]
    fn test_extract_spreadsheet_id_bare() {
        assert_eq!(extract_spreadsheet_id("MySheetIDX").unwrap(), "MySheetIDX");
        assert_eq!(extract_spreadsheet_id("").unwrap(), "");
    }

    #[test]
    fn test_config_from_common() {
        let common = Common::new(
            LevelFilter::INFO,
            PathBuf::from("/tmp/expenses-test"),
            "https://docs.google.com/spreadsheets/d/MySheetIDX/edit",
            "Expenses!A:D",
            "llama-3.3-70b-versatile",
        );
        let config = Config::from_common(&common).unwrap();
        assert_eq!(config.spreadsheet_id(), "MySheetIDX");
        assert_eq!(config.range(), "Expenses!A:D");
        assert_eq!(
            config.client_secret_path(),
            PathBuf::from("/tmp/expenses-test/.secrets/client_secret.json")
        );
        assert_eq!(
            config.token_path(),
            PathBuf::from("/tmp/expenses-test/.secrets/token.json")
        );
    }
}
