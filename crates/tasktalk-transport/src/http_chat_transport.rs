//! HttpChatTransport - REST implementation of the chat transport.
//!
//! Talks to the task-assistant backend's `POST /api/v1/chat` endpoint. The
//! backend identifies the user from the bearer token; the request body only
//! carries the message and the optional conversation token.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tasktalk_core::config::ChatConfig;
use tasktalk_core::error::{ChatError, Result};
use tasktalk_core::transport::{ChatReply, ChatRequest, ChatTransport};

const CHAT_PATH: &str = "/api/v1/chat";

/// HTTP transport to the task-assistant backend.
#[derive(Clone)]
pub struct HttpChatTransport {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ChatReplyBody {
    response: String,
    conversation_id: String,
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
}

impl HttpChatTransport {
    /// Creates a transport with the given base URL and optional bearer token.
    pub fn new(
        base_url: impl Into<String>,
        auth_token: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ChatError::transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            auth_token,
        })
    }

    /// Creates a transport from a [`ChatConfig`].
    pub fn from_config(config: &ChatConfig) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            config.auth_token.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CHAT_PATH)
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send_message(&self, request: ChatRequest) -> Result<ChatReply> {
        let body = SendMessageBody {
            message: &request.message,
            conversation_id: request.conversation_id.as_deref(),
        };

        let mut builder = self.client.post(self.endpoint()).json(&body);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }

        tracing::debug!(
            user_id = request.user_id,
            has_conversation = request.conversation_id.is_some(),
            "sending chat message"
        );

        let response = builder
            .send()
            .await
            .map_err(|e| ChatError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_default();
            return Err(ChatError::api(status.as_u16(), detail));
        }

        let reply: ChatReplyBody = response
            .json()
            .await
            .map_err(|e| ChatError::transport(e.to_string()))?;

        Ok(ChatReply {
            conversation_id: reply.conversation_id,
            response: reply.response,
        })
    }
}
