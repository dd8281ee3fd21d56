//! Client for the chat assistant API.
//!
//! The chat endpoint answers with plain text, not JSON, and its formatter
//! leaks a structured-response wrapper around the actual reply. Cleaning that
//! wrapper is a declared parse step ([`clean_reply`]) rather than ad-hoc
//! substring surgery at the call site.

use tracing::debug;

use super::ApiError;

/// The wrapper the upstream formatter prepends to structured replies.
const STRUCTURED_WRAPPER: &str = "Returning structured response: ResponseFormat(response=";

/// Typed wrapper over the chat service.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChatClient {
    /// Create a client for the service at `base_url`.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `POST /chat` — one request per user message, no conversation id. The
    /// reply is returned raw; callers pass it through [`clean_reply`].
    pub async fn ask(&self, user_id: i64, prompt: &str) -> Result<String, ApiError> {
        debug!(user_id, "sending chat prompt");
        self.http
            .post(format!("{}/chat", self.base_url))
            .json(&serde_json::json!({ "user_id": user_id, "prompt": prompt }))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Transport)?
            .text()
            .await
            .map_err(ApiError::Decode)
    }
}

/// Strip the upstream formatter's wrapper from a chat reply.
///
/// Removes the first `ResponseFormat(response=` wrapper occurrence, drops the
/// quote and parenthesis punctuation the formatter leaks, and resolves
/// escaped newlines to real ones. Input that never went through the formatter
/// passes through with only the punctuation filter applied.
#[must_use]
pub fn clean_reply(raw: &str) -> String {
    let unwrapped = raw.replacen(STRUCTURED_WRAPPER, "", 1);
    let stripped: String = unwrapped
        .chars()
        .filter(|c| !matches!(c, '"' | '\'' | '(' | ')'))
        .collect();
    stripped.replace("\\\\n", "\\n").replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_replies_are_unwrapped() {
        let raw = "Returning structured response: ResponseFormat(response='Here are 3 listings', ids='1,2,3')";
        assert_eq!(
            clean_reply(raw),
            "Here are 3 listings, ids=1,2,3"
        );
    }

    #[test]
    fn escaped_newlines_become_real_ones() {
        assert_eq!(clean_reply("line one\\nline two"), "line one\nline two");
        assert_eq!(clean_reply("double\\\\nescape"), "double\nescape");
    }

    #[test]
    fn plain_text_only_loses_punctuation() {
        assert_eq!(clean_reply("No wrapper here."), "No wrapper here.");
        assert_eq!(clean_reply(r#"a "quoted" (aside)"#), "a quoted aside");
        assert_eq!(clean_reply(""), "");
    }
}
