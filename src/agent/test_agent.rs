//! Implements the `Agent` trait with a canned response for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that we can run the
//! whole app, top-to-bottom, without calling the agent service.

use crate::agent::Agent;
use crate::Result;

/// An implementation of the `Agent` trait that does not call any external service. It echoes a
/// deterministic markdown summary that includes the size of the prompt it received.
#[derive(Debug, Default)]
pub(super) struct TestAgent;

#[async_trait::async_trait]
impl Agent for TestAgent {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        Ok(format!(
            "## Spending Summary (test mode)\n\n\
            This is a canned response produced without calling the agent service.\n\n\
            | Prompt lines | Prompt bytes |\n\
            | --- | --- |\n\
            | {} | {} |\n",
            prompt.lines().count(),
            prompt.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_response_is_deterministic() {
        let agent = TestAgent;
        let a = agent.summarize("one\ntwo").await.unwrap();
        let b = agent.summarize("one\ntwo").await.unwrap();
        assert_eq!(a, b);
        assert!(a.contains("| 2 | 7 |"));
    }
}
