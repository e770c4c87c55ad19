use super::models::{GenerateContentRequest, GenerateContentResponse};
use super::{LLMError, ModelBackend, ModelRequest};
use crate::config::Config;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;
use zeroize::Zeroizing;

/// REST client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: Client,
    api_url: String,
    api_key: Zeroizing<String>,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, LLMError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| LLMError::ClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self, model: &str) -> Result<Url, LLMError> {
        endpoint(&self.api_url, model)
    }
}

fn endpoint(api_url: &str, model: &str) -> Result<Url, LLMError> {
    let raw = format!(
        "{}/v1beta/models/{}:generateContent",
        api_url.trim_end_matches('/'),
        model
    );
    Url::parse(&raw).map_err(|e| LLMError::InvalidUrl(format!("{raw}: {e}")))
}

fn classify_status(status: StatusCode, body: String) -> LLMError {
    match status.as_u16() {
        401 => LLMError::Unauthorized,
        403 => LLMError::Forbidden,
        429 => LLMError::RateLimited,
        500..=599 => LLMError::Server {
            status: status.as_u16(),
            body,
        },
        code => LLMError::Status { status: code, body },
    }
}

fn classify_transport(error: reqwest::Error) -> LLMError {
    if error.is_timeout() {
        LLMError::Timeout
    } else if error.is_connect() {
        LLMError::Connection(error.to_string())
    } else {
        LLMError::Network(error.to_string())
    }
}

#[async_trait]
impl ModelBackend for GeminiClient {
    async fn generate(&self, request: &ModelRequest) -> Result<Option<String>, LLMError> {
        let url = self.endpoint(&request.model)?;
        let body: GenerateContentRequest = request.to_wire();
        let started = Instant::now();

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", self.api_key.as_str())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(classify_status(status, text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LLMError::Decode(e.to_string()))?;

        debug!(
            model = %request.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            candidates = parsed.candidates.len(),
            "Model call finished"
        );

        Ok(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_model() {
        let url = endpoint("https://generativelanguage.googleapis.com/", "gemini-3-flash-preview")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        assert!(matches!(
            endpoint("not a url", "m"),
            Err(LLMError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, String::new()),
            LLMError::Unauthorized
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, String::new()),
            LLMError::Forbidden
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            LLMError::RateLimited
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_GATEWAY, "upstream".into()),
            LLMError::Server { status: 502, .. }
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST, "bad".into()),
            LLMError::Status { status: 400, .. }
        ));
    }

    #[test]
    fn test_client_builds_from_config() {
        let config = Config {
            api_key: Zeroizing::new("k".to_string()),
            ..Config::default()
        };
        let client = GeminiClient::new(&config).unwrap();
        assert!(client
            .endpoint(&config.model)
            .unwrap()
            .path()
            .ends_with(":generateContent"));
    }
}
