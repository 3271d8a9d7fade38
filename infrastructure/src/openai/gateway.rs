//! [`LlmGateway`] over an OpenAI-compatible Chat Completions endpoint.

use super::protocol::{ChatRequest, ChatResponse, ErrorResponse};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use panel_application::ports::llm_gateway::{GatewayError, LlmGateway};
use panel_domain::{Message, Model};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, trace};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// HTTP adapter for the Chat Completions API.
///
/// One shared `reqwest::Client`; every call is an independent request
/// carrying the full message list.
pub struct OpenAiGateway {
    client: Client,
    endpoint: String,
    api_key: String,
    max_tokens: Option<u32>,
}

impl std::fmt::Debug for OpenAiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiGateway")
            .field("endpoint", &self.endpoint)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

impl OpenAiGateway {
    /// Build the gateway from the `[providers.openai]` section.
    ///
    /// Fails with [`GatewayError::MissingCredential`] when no API key is
    /// configured or present in the environment.
    pub fn from_config(config: &FileOpenAiConfig) -> Result<Self, GatewayError> {
        let api_key = resolve_api_key(config, |name| std::env::var(name).ok())?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: completions_url(&config.base_url),
            api_key,
            max_tokens: config.max_tokens,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn chat(&self, model: &Model, messages: &[Message]) -> Result<String, GatewayError> {
        let request = ChatRequest::new(model, messages, self.max_tokens);
        debug!(model = %model, messages = messages.len(), "POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status, model, &body));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let text = body
            .into_text()
            .ok_or_else(|| GatewayError::InvalidResponse("no choices returned".to_string()))?;
        trace!(model = %model, bytes = text.len(), "Completion received");
        Ok(text)
    }
}

/// `api_key` from the config wins; otherwise the variable named by
/// `api_key_env` is read through `lookup`.
fn resolve_api_key(
    config: &FileOpenAiConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, GatewayError> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| lookup(&config.api_key_env).filter(|key| !key.trim().is_empty()))
        .ok_or_else(|| {
            GatewayError::MissingCredential(format!(
                "set {} or providers.openai.api_key",
                config.api_key_env
            ))
        })
}

fn completions_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let base = base.strip_suffix("/v1").unwrap_or(base);
    format!("{}{}", base, COMPLETIONS_PATH)
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

fn map_status(status: StatusCode, model: &Model, body: &str) -> GatewayError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized(detail),
        StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(format!("{}: {}", model, detail)),
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(detail),
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, detail)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> FileOpenAiConfig {
        FileOpenAiConfig {
            api_key: api_key.map(String::from),
            api_key_env: "PANEL_TEST_KEY".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_key_wins_over_env() {
        let key = resolve_api_key(&config(Some("sk-file")), |_| Some("sk-env".to_string()));
        assert_eq!(key.unwrap(), "sk-file");
    }

    #[test]
    fn test_env_key_used_when_config_empty() {
        let key = resolve_api_key(&config(Some("  ")), |name| {
            (name == "PANEL_TEST_KEY").then(|| "sk-env".to_string())
        });
        assert_eq!(key.unwrap(), "sk-env");
    }

    #[test]
    fn test_missing_key_names_the_variable() {
        let err = resolve_api_key(&config(None), |_| None).unwrap_err();
        assert!(matches!(err, GatewayError::MissingCredential(_)));
        assert!(err.to_string().contains("PANEL_TEST_KEY"));
    }

    #[test]
    fn test_completions_url() {
        assert_eq!(
            completions_url("https://api.openai.com"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            completions_url("http://localhost:8080/v1/"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_status_mapping() {
        let model = Model::Gpt4o;
        let body = r#"{"error":{"message":"bad key","type":"invalid_request_error"}}"#;

        assert!(matches!(
            map_status(StatusCode::UNAUTHORIZED, &model, body),
            GatewayError::Unauthorized(ref m) if m == "bad key"
        ));
        assert!(matches!(
            map_status(StatusCode::FORBIDDEN, &model, body),
            GatewayError::Unauthorized(_)
        ));
        assert!(matches!(
            map_status(StatusCode::NOT_FOUND, &model, body),
            GatewayError::ModelNotAvailable(ref m) if m.starts_with("gpt-4o")
        ));
        assert!(matches!(
            map_status(StatusCode::TOO_MANY_REQUESTS, &model, "slow down"),
            GatewayError::RateLimited(ref m) if m == "slow down"
        ));
        assert!(matches!(
            map_status(StatusCode::INTERNAL_SERVER_ERROR, &model, ""),
            GatewayError::RequestFailed(ref m) if m.starts_with("HTTP 500")
        ));
    }

    #[test]
    fn test_from_config_with_key() {
        let gateway = OpenAiGateway::from_config(&config(Some("sk-test"))).unwrap();
        assert_eq!(gateway.endpoint(), "https://api.openai.com/v1/chat/completions");
        assert!(!format!("{:?}", gateway).contains("sk-test"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let gateway = OpenAiGateway::from_config(&FileOpenAiConfig {
            api_key: Some("sk-test".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
            ..Default::default()
        })
        .unwrap();

        let err = gateway
            .chat(&Model::default(), &[Message::user("hi")])
            .await
            .unwrap_err();

        assert!(err.is_transient());
    }
}
