//! Chat completion request building and response parsing

use serde_json::{Value, json};

use crate::core::ports::EnrichmentError;

/// JSON body for a single-turn chat completion
#[must_use]
pub fn chat_request(model: &str, prompt: &str, max_tokens: u32) -> Value {
    json!({
        "model": model,
        "messages": [{"role": "user", "content": prompt}],
        "max_tokens": max_tokens,
    })
}

/// Map a non-success HTTP status to an enrichment error
#[must_use]
pub fn status_error(status: u16, body: &str) -> EnrichmentError {
    if status == 429 {
        return EnrichmentError::RateLimited;
    }
    let detail: String = body.chars().take(200).collect();
    EnrichmentError::Network(format!("HTTP {status}: {detail}"))
}

/// Extract `choices[0].message.content` from a response body
pub fn parse_chat_completion(body: &str) -> Result<String, EnrichmentError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| EnrichmentError::MalformedResponse(e.to_string()))?;

    let content = value
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .ok_or_else(|| EnrichmentError::MissingField("choices[0].message.content".to_string()))?;

    content
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| EnrichmentError::MalformedResponse("content is not a string".to_string()))
}
