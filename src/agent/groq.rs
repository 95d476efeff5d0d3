//! Implements the `Agent` trait against Groq's OpenAI-compatible chat-completions endpoint.

use crate::agent::prompt::INSTRUCTIONS;
use crate::agent::Agent;
use crate::{Config, Result};
use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

const CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Keep the summaries factual; we are describing numbers, not writing fiction.
const TEMPERATURE: f32 = 0.2;

pub(super) struct GroqAgent {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
}

impl GroqAgent {
    pub(super) fn new(config: &Config) -> Result<Self> {
        let api_key = config
            .api_key()
            .context(
                "GROQ_API_KEY is not set. The summarize command needs an API key for the agent \
                service. You can get one at https://console.groq.com",
            )?
            .clone();
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: config.model().to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[async_trait::async_trait]
impl Agent for GroqAgent {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: INSTRUCTIONS,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the agent service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            anyhow::bail!("Agent request failed with status {}: {}", status, body);
        }

        let body: ChatResponse = response
            .json()
            .await
            .context("Failed to parse the agent response")?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("The agent response contained no choices")
    }
}
