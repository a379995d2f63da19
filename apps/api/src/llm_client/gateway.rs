//! OpenAI-chat-compatible AI gateway backend, authenticated with a bearer token.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{api_error, CompletionBackend, LlmError};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// `choices[0].message.content`, if present and non-empty.
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()?
            .message?
            .content
            .filter(|c| !c.is_empty())
    }
}

fn build_request<'a>(model: &'a str, system: &'a str, message: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: system,
            },
            ChatMessage {
                role: "user",
                content: message,
            },
        ],
        response_format: ResponseFormat {
            format_type: "json_object",
        },
    }
}

pub struct ChatGatewayBackend {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

impl ChatGatewayBackend {
    pub fn new(client: Client, url: String, api_key: String, model: String) -> Self {
        Self {
            client,
            url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl CompletionBackend for ChatGatewayBackend {
    fn name(&self) -> &'static str {
        "ai-gateway"
    }

    async fn send(&self, system: &str, message: &str) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&build_request(&self.model, system, message))
            .send()
            .await?;

        if !response.status().is_success() {
            let err = api_error(response).await;
            tracing::error!("AI gateway error: {err}");
            return Err(err);
        }

        let body: ChatResponse = response.json().await?;
        body.into_text().ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{header::AUTHORIZATION, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::llm_client::build_http_client;
    use crate::llm_client::testing::serve_stub;

    async fn backend_for(router: Router) -> ChatGatewayBackend {
        let base = serve_stub(router).await;
        ChatGatewayBackend::new(
            build_http_client().unwrap(),
            format!("{base}/v1/chat/completions"),
            "gw-key".into(),
            "m-1".into(),
        )
    }

    fn status_router(status: StatusCode) -> Router {
        Router::new().route(
            "/v1/chat/completions",
            post(move || async move { (status, Json(json!({ "error": "upstream" }))) }),
        )
    }

    #[test]
    fn test_request_body_matches_wire_format() {
        let body = serde_json::to_value(build_request("m-1", "sys", "user msg")).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "m-1",
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "user msg" }
                ],
                "response_format": { "type": "json_object" }
            })
        );
    }

    #[test]
    fn test_extracts_first_choice_content() {
        let body: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "role": "assistant", "content": "{}" } }]
        }))
        .unwrap();
        assert_eq!(body.into_text().as_deref(), Some("{}"));
    }

    #[test]
    fn test_missing_content_is_absent() {
        let empty: ChatResponse = serde_json::from_value(json!({ "choices": [] })).unwrap();
        assert!(empty.into_text().is_none());

        let null_content: ChatResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "content": null } }]
        }))
        .unwrap();
        assert!(null_content.into_text().is_none());
    }

    #[tokio::test]
    async fn test_send_uses_bearer_auth_and_chat_payload() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let content = format!(
                    "{auth}|{}|{}|{}",
                    body["model"], body["messages"][0]["role"], body["response_format"]["type"]
                );
                Json(json!({ "choices": [{ "message": { "content": content } }] }))
            }),
        );
        let backend = backend_for(router).await;

        let reply = backend.send("sys", "msg").await.unwrap();

        assert_eq!(reply, r#"Bearer gw-key|"m-1"|"system"|"json_object""#);
    }

    #[tokio::test]
    async fn test_send_maps_429_and_402_to_api_errors() {
        let backend = backend_for(status_router(StatusCode::TOO_MANY_REQUESTS)).await;
        let err = backend.send("sys", "msg").await.unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert!(matches!(err, LlmError::Api { status: 429, .. }));

        let backend = backend_for(status_router(StatusCode::PAYMENT_REQUIRED)).await;
        let err = backend.send("sys", "msg").await.unwrap_err();
        assert_eq!(err.status(), Some(402));
    }

    #[tokio::test]
    async fn test_send_rejects_malformed_success_body() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(json!({ "choices": [{ "message": { "content": "" } }] })) }),
        );
        let backend = backend_for(router).await;
        let err = backend.send("sys", "msg").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));

        let router = Router::new().route("/v1/chat/completions", post(|| async { "oops" }));
        let backend = backend_for(router).await;
        let err = backend.send("sys", "msg").await.unwrap_err();
        assert!(matches!(err, LlmError::Http(_)));
    }
}
