//! OpenAI chat-completions client.
//!
//! Issues one streaming request per generation and exposes the response as a
//! stream of content deltas.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::chat::{create_sse_stream, ChatMessage, ChatRole, DeltaStream, StoryProvider};
use crate::credential::Credential;
use crate::error::StoryError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Client for the OpenAI chat-completions API.
pub struct OpenAI {
    credential: Credential,
    base_url: reqwest::Url,
    model: String,
    timeout_seconds: Option<u64>,
    client: reqwest::Client,
}

/// Request payload for the chat-completions endpoint.
#[derive(Serialize, Debug)]
struct OpenAIChatRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAIChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize, Debug)]
struct OpenAIChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl OpenAI {
    /// Creates a new OpenAI client.
    ///
    /// # Arguments
    ///
    /// * `credential` - API key used as the bearer token
    /// * `base_url` - API base URL (defaults to the public endpoint)
    /// * `model` - Model identifier (defaults to "gpt-3.5-turbo")
    /// * `timeout_seconds` - Request timeout in seconds, none by default
    pub fn new(
        credential: Credential,
        base_url: Option<String>,
        model: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, StoryError> {
        let base_url = reqwest::Url::parse(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
            .map_err(|e| StoryError::HttpError(e.to_string()))?;
        Ok(OpenAI {
            credential,
            base_url,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout_seconds,
            client: reqwest::Client::new(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    fn chat_url(&self) -> Result<reqwest::Url, StoryError> {
        self.base_url
            .join("chat/completions")
            .map_err(|e| StoryError::HttpError(e.to_string()))
    }

    fn apply_timeout(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.timeout_seconds {
            Some(timeout) => request.timeout(Duration::from_secs(timeout)),
            None => request,
        }
    }

    fn log_request_payload<T: Serialize>(&self, label: &str, body: &T) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        if let Ok(json) = serde_json::to_string(body) {
            log::trace!("{label}: {json}");
        }
    }

    async fn ensure_success_response(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<reqwest::Response, StoryError> {
        log::debug!("{context} HTTP status: {}", response.status());
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let error_text = response.text().await?;
        Err(StoryError::ProviderError(format!(
            "{context} returned error status: {status}. Raw response: {error_text}"
        )))
    }
}

#[async_trait]
impl StoryProvider for OpenAI {
    /// Stream a chat completion as content deltas.
    async fn chat_stream(&self, messages: &[ChatMessage]) -> Result<DeltaStream, StoryError> {
        let body = OpenAIChatRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|msg| OpenAIChatMessage {
                    role: match msg.role {
                        ChatRole::User => "user",
                        ChatRole::Assistant => "assistant",
                    },
                    content: &msg.content,
                })
                .collect(),
            stream: true,
        };

        let url = self.chat_url()?;
        let mut request = self
            .client
            .post(url)
            .bearer_auth(self.credential.expose())
            .json(&body);
        self.log_request_payload("OpenAI chat stream", &body);
        request = self.apply_timeout(request);

        let response = request.send().await?;
        let response = self
            .ensure_success_response(response, "OpenAI chat API")
            .await?;
        Ok(create_sse_stream(response))
    }
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod tests;
