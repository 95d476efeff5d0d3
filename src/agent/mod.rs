//! The AI agent that turns expense data into a human-readable spending summary.
//!
//! The real implementation talks to Groq's OpenAI-compatible chat-completions API; the test
//! implementation returns canned markdown so the whole pipeline can run offline.

mod groq;
mod prompt;
mod test_agent;

pub use prompt::render_prompt;

use crate::{Config, Mode, Result};

/// An externally hosted LLM that produces a markdown summary from a prompt.
#[async_trait::async_trait]
pub trait Agent {
    async fn summarize(&self, prompt: &str) -> Result<String>;
}

/// Creates an `Agent` implementation for the given mode.
pub fn agent(config: &Config, mode: Mode) -> Result<Box<dyn Agent + Send>> {
    match mode {
        Mode::Live => Ok(Box::new(groq::GroqAgent::new(config)?)),
        Mode::Testing => Ok(Box::new(test_agent::TestAgent::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_testing_mode_agent_needs_no_api_key() {
        let config = Config::for_testing();
        let agent = agent(&config, Mode::Testing).unwrap();
        let markdown = agent.summarize("anything").await.unwrap();
        assert!(markdown.contains('#'));
    }

    #[test]
    fn test_live_mode_agent_requires_api_key() {
        // The test config carries no GROQ_API_KEY.
        let config = Config::for_testing();
        assert!(agent(&config, Mode::Live).is_err());
    }
}
