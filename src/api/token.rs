//! OAuth access-token management for the Google Sheets API.
//!
//! There is no interactive consent flow here: `token.json` must already exist (obtained once,
//! e.g. via Google's OAuth playground or any other tool that performs the desktop flow). This
//! module only refreshes the access token with the stored refresh token when it is expired, and
//! persists the result back to disk.

use crate::api::files::{SecretFile, TokenFile};
use crate::Result;
use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

pub(crate) struct TokenProvider {
    secret: SecretFile,
    token: TokenFile,
    token_path: PathBuf,
}

/// The relevant fields of Google's token-endpoint response to a refresh-token grant.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    expires_in: i64,
    /// Google occasionally rotates the refresh token.
    refresh_token: Option<String>,
}

impl TokenProvider {
    /// Loads the client credentials and the stored token from disk.
    pub(crate) async fn load(
        secret_path: impl Into<PathBuf>,
        token_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let token_path = token_path.into();
        let secret = SecretFile::load(&secret_path.into()).await?;
        let token = TokenFile::load(&token_path).await.context(
            "Unable to load the stored OAuth token. You need a token.json with a valid \
            refresh_token in your .secrets directory before this program can read your sheet.",
        )?;
        Ok(Self {
            secret,
            token,
            token_path,
        })
    }

    /// The current access token, refreshing it first if it is expired or about to expire.
    pub(crate) async fn token_with_refresh(&mut self) -> Result<&str> {
        if self.token.is_expired() {
            self.refresh().await?;
        }
        Ok(self.token.access_token())
    }

    /// Exchanges the refresh token for a new access token and persists it.
    async fn refresh(&mut self) -> Result<()> {
        debug!("Access token expired, refreshing");
        let params = [
            ("client_id", self.secret.client_id()),
            ("client_secret", self.secret.client_secret()),
            ("refresh_token", self.token.refresh_token()),
            ("grant_type", "refresh_token"),
        ];

        let client = reqwest::Client::new();
        let response = client
            .post(self.secret.token_uri())
            .form(&params)
            .send()
            .await
            .context("Failed to send token refresh request to Google")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            anyhow::bail!("Token refresh failed with status {}: {}", status, body);
        }

        let refreshed: RefreshResponse = response
            .json()
            .await
            .context("Failed to parse token refresh response")?;

        let expires_at = Utc::now() + chrono::Duration::seconds(refreshed.expires_in);
        self.token.update(
            refreshed.access_token,
            expires_at,
            refreshed.refresh_token,
        );
        self.token.save(&self.token_path).await?;
        debug!("Token refreshed, valid until {expires_at}");
        Ok(())
    }
}
