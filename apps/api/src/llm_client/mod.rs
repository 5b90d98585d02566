//! Anthropic Messages API client. Copy generation reaches the model only
//! through `LlmClient`.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;
const BACKOFF_BASE_MS: u64 = 1000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()?,
            api_key,
        })
    }

    /// One Messages API round trip. Rate limits, 5xx responses and transport
    /// failures are retried with exponential backoff; other 4xx fail at once.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "Retrying Anthropic request (attempt {}/{}) in {}ms",
                    attempt + 1,
                    MAX_RETRIES,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match self.send(&request_body).await? {
                Attempt::Done(response) => return Ok(response),
                Attempt::Retry(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    async fn send(&self, body: &AnthropicRequest<'_>) -> Result<Attempt, LlmError> {
        let response = match self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(Attempt::Retry(LlmError::Http(e))),
        };

        let status = response.status();
        if status.is_success() {
            let parsed: LlmResponse = response.json().await?;
            debug!(
                "Anthropic usage: {} in / {} out tokens",
                parsed.usage.input_tokens, parsed.usage.output_tokens
            );
            return Ok(Attempt::Done(parsed));
        }

        let err = LlmError::Api {
            status: status.as_u16(),
            message: api_error_message(response.text().await.unwrap_or_default()),
        };
        if is_retryable(status) {
            warn!("Anthropic returned {status}: {err}");
            Ok(Attempt::Retry(err))
        } else {
            Err(err)
        }
    }

    /// Calls the LLM and deserializes the text response as JSON.
    /// Models often wrap JSON in fences or prose; see `extract_json`.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        parse_json_output(text)
    }
}

enum Attempt {
    Done(LlmResponse),
    Retry(LlmError),
}

/// 1s before the second attempt, doubling after that.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(BACKOFF_BASE_MS << attempt.saturating_sub(1))
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// The `error.message` of an Anthropic error body, or the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Best-effort decode of model output into `T`.
pub fn parse_json_output<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let text = strip_json_fences(text);
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(e) => match extract_json(text) {
            Some(embedded) => serde_json::from_str(embedded).map_err(LlmError::Parse),
            None => Err(LlmError::Parse(e)),
        },
    }
}

/// Strips a leading ```json (or bare ```) fence and its closing fence.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let inner = inner.trim_start();
    inner.strip_suffix("```").map(str::trim).unwrap_or(inner)
}

/// Returns the first balanced `{...}` or `[...]` span in `text`, skipping
/// brackets inside string literals.
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_from_prose() {
        let input = "Sure! Here are your options:\n[{\"headline\": \"Glow [fast]\"}]\nEnjoy.";
        assert_eq!(extract_json(input), Some("[{\"headline\": \"Glow [fast]\"}]"));
    }

    #[test]
    fn test_extract_json_handles_escaped_quotes() {
        let input = r#"note {"a": "say \"}\" loud", "b": 1} trailing }"#;
        assert_eq!(extract_json(input), Some(r#"{"a": "say \"}\" loud", "b": 1}"#));
    }

    #[test]
    fn test_extract_json_unbalanced_is_none() {
        assert_eq!(extract_json("{\"a\": [1, 2"), None);
        assert_eq!(extract_json("no json here"), None);
    }

    #[test]
    fn test_parse_json_output_prefers_direct_parse() {
        let v: Vec<u32> = parse_json_output("```\n[1, 2, 3]\n```").unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_json_output_falls_back_to_embedded() {
        let v: serde_json::Value =
            parse_json_output("Here you go: {\"cta\": \"Shop now\"} Let me know!").unwrap();
        assert_eq!(v["cta"], "Shop now");
    }

    #[test]
    fn test_parse_json_output_reports_parse_error() {
        let r: Result<serde_json::Value, _> = parse_json_output("I cannot help with that.");
        assert!(matches!(r, Err(LlmError::Parse(_))));
    }

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(3), Duration::from_secs(4));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::SERVICE_UNAVAILABLE));
        assert!(!is_retryable(StatusCode::BAD_REQUEST));
        assert!(!is_retryable(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_api_error_message_prefers_error_body() {
        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"max_tokens too large"}}"#;
        assert_eq!(api_error_message(body.to_string()), "max_tokens too large");
        assert_eq!(api_error_message("upstream timeout".to_string()), "upstream timeout");
    }

    #[test]
    fn test_response_text_picks_text_block() {
        let json = r#"{
            "content": [{"type": "tool_use"}, {"type": "text", "text": "hello"}],
            "usage": {"input_tokens": 3, "output_tokens": 1}
        }"#;
        let resp: LlmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.text(), Some("hello"));
    }
}
