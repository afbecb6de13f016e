//! Advice Responder
//!
//! Prefers the remote backend when one is configured and falls back to the
//! canned table on any failure.

use crate::canned::CannedResponder;
use crate::remote::RemoteAdvisor;
use crate::session::ChatMessage;
use crate::AdvisorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Advisor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Chat-completions URL; canned answers only when unset
    pub endpoint: Option<String>,
    /// Bearer token for the endpoint
    pub api_key: Option<String>,
    /// Model name sent with each request
    pub model: String,
    /// Request timeout (seconds)
    pub timeout_secs: u64,
    /// Messages kept per session
    pub max_history: usize,
    /// Live sessions kept before the idlest is evicted
    pub max_sessions: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 15,
            max_history: 50,
            max_sessions: 1000,
        }
    }
}

/// Which backend produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Remote,
    Canned,
}

/// Advisor answer
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

/// Chat advisor
pub struct Advisor {
    canned: CannedResponder,
    remote: Option<RemoteAdvisor>,
}

impl Advisor {
    /// Canned answers only
    pub fn canned() -> Self {
        Self {
            canned: CannedResponder::new(),
            remote: None,
        }
    }

    /// Build from configuration
    pub fn from_config(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let remote = match &config.endpoint {
            Some(endpoint) => Some(RemoteAdvisor::new(
                endpoint,
                config.api_key.clone(),
                &config.model,
                Duration::from_secs(config.timeout_secs),
            )?),
            None => None,
        };
        Ok(Self {
            canned: CannedResponder::new(),
            remote,
        })
    }

    /// Answer `query` given the transcript so far
    pub async fn respond(&self, history: &[ChatMessage], query: &str) -> Reply {
        if let Some(remote) = &self.remote {
            match remote.ask(history, query).await {
                Ok(text) => {
                    return Reply {
                        text,
                        source: ReplySource::Remote,
                    }
                }
                Err(e) => warn!("Remote advisor failed, using canned answer: {}", e),
            }
        }

        Reply {
            text: self.canned.respond(query).to_string(),
            source: ReplySource::Canned,
        }
    }

    /// Whether a remote backend is configured
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_only() {
        let advisor = Advisor::canned();
        let reply = advisor.respond(&[], "how does depreciation work?").await;
        assert_eq!(reply.source, ReplySource::Canned);
        assert!(reply.text.starts_with("Depreciation is"));
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let config = AdvisorConfig {
            endpoint: Some("http://127.0.0.1:9/v1/chat/completions".to_string()),
            timeout_secs: 2,
            ..Default::default()
        };
        let advisor = Advisor::from_config(&config).unwrap();
        assert!(advisor.has_remote());

        let reply = advisor.respond(&[], "what about maintenance?").await;
        assert_eq!(reply.source, ReplySource::Canned);
        assert!(reply.text.starts_with("Regular maintenance"));
    }
}
