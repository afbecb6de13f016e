//! Generative-Text Advice Backend
//!
//! Forwards the conversation to an OpenAI-compatible chat-completions
//! endpoint behind a fixed system context.

use crate::session::ChatMessage;
use crate::AdvisorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// System prompt sent ahead of every conversation
pub const SYSTEM_CONTEXT: &str = "You are AutoVault's car expert. Give concise, practical advice about \
buying, selling, valuing, maintaining and financing cars in the Indian used-car market. \
Quote prices in rupees. If a question is unrelated to automobiles, steer the user back to cars.";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

/// Client for a remote chat-completions service
pub struct RemoteAdvisor {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

impl RemoteAdvisor {
    /// Build a client for `endpoint`
    pub fn new(
        endpoint: &str,
        api_key: Option<String>,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, AdvisorError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AdvisorError::Client(e.to_string()))?;

        info!("Remote advisor configured: {} ({})", endpoint, model);
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key,
            model: model.to_string(),
        })
    }

    /// System context, then the transcript oldest first, then the query
    fn build_request<'a>(&'a self, history: &'a [ChatMessage], query: &'a str) -> CompletionRequest<'a> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(WireMessage {
            role: "system",
            content: SYSTEM_CONTEXT,
        });
        messages.extend(history.iter().map(|m| WireMessage {
            role: m.role.as_str(),
            content: &m.content,
        }));
        messages.push(WireMessage {
            role: "user",
            content: query,
        });

        CompletionRequest {
            model: &self.model,
            messages,
        }
    }

    /// Ask for a reply given the prior transcript and the new query
    pub async fn ask(&self, history: &[ChatMessage], query: &str) -> Result<String, AdvisorError> {
        let body = self.build_request(history, query);

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AdvisorError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| AdvisorError::Request(e.to_string()))?;

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::InvalidResponse(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AdvisorError::InvalidResponse("no choices returned".to_string()))?;

        debug!("Remote advisor replied with {} chars", text.len());
        Ok(text)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
