//! Slack Web API posting client for rich-attachment responses.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use sdbot_core::Attachment;

#[derive(Debug, Error)]
/// Failures surfaced by Slack Web API calls.
pub enum SlackError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("slack api {operation} failed with status {status}: {body}")]
    HttpStatus {
        operation: &'static str,
        status: u16,
        body: String,
    },
    #[error("slack {operation} failed: {error}")]
    Api {
        operation: &'static str,
        error: String,
    },
    #[error("slack {operation} response missing {field}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
}

#[derive(Debug, Clone, Deserialize)]
struct SlackChatMessageResponse {
    ok: bool,
    ts: Option<String>,
    channel: Option<String>,
    error: Option<String>,
}

/// Channel and timestamp of a successfully posted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackPostedMessage {
    pub channel: String,
    pub ts: String,
}

/// Minimal `chat.postMessage` client holding the bot token.
#[derive(Clone)]
pub struct SlackApiClient {
    http: reqwest::Client,
    api_base: String,
    bot_token: String,
}

impl SlackApiClient {
    pub fn new(
        api_base: String,
        bot_token: String,
        request_timeout_ms: u64,
    ) -> Result<Self, SlackError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("sdbot-slack"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_millis(request_timeout_ms.max(1)))
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            bot_token: bot_token.trim().to_string(),
        })
    }

    /// Posts `text` with optional attachment cards to `channel`.
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
        attachments: &[Attachment],
    ) -> Result<SlackPostedMessage, SlackError> {
        let mut payload = json!({
            "channel": channel,
            "text": text,
        });
        if !attachments.is_empty() {
            payload["attachments"] = serde_json::to_value(attachments)
                .map_err(|error| SlackError::Api {
                    operation: "chat.postMessage",
                    error: error.to_string(),
                })?;
        }

        let response = self
            .http
            .post(format!("{}/chat.postMessage", self.api_base))
            .bearer_auth(&self.bot_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlackError::HttpStatus {
                operation: "chat.postMessage",
                status: status.as_u16(),
                body,
            });
        }

        let decoded: SlackChatMessageResponse = response.json().await?;
        if !decoded.ok {
            let error = decoded.error.unwrap_or_else(|| "unknown error".to_string());
            tracing::warn!(target: "sdbot::slack", %channel, %error, "chat.postMessage rejected");
            return Err(SlackError::Api {
                operation: "chat.postMessage",
                error,
            });
        }

        Ok(SlackPostedMessage {
            channel: decoded.channel.unwrap_or_else(|| channel.to_string()),
            ts: decoded.ts.ok_or(SlackError::MissingField {
                operation: "chat.postMessage",
                field: "ts",
            })?,
        })
    }
}
