//! Google Gemini provider implementation

use super::traits::{Provider, ProviderError};
use crate::config::GeminiSettings;
use crate::network::{HttpClient, HttpResponse};
use crate::results::{ProviderResult, Source};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, error, info};

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

/// Gemini `generateContent` provider
pub struct GeminiProvider {
    client: HttpClient,
    settings: GeminiSettings,
}

impl GeminiProvider {
    pub fn new(client: HttpClient, settings: GeminiSettings) -> Self {
        Self { client, settings }
    }

    /// Endpoint URL without the key parameter
    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                top_k: self.settings.top_k,
                top_p: self.settings.top_p,
                max_output_tokens: self.settings.max_output_tokens,
            },
        }
    }

    async fn generate(&self, query: &str) -> Result<(String, Vec<Source>), ProviderError> {
        let url = self.endpoint();
        let prompt = format!("{}{}", self.settings.prompt_prefix, query);
        debug!("Calling {}", url);

        let response = self
            .client
            .post_json(
                &url,
                &[("key", self.settings.api_key.as_str())],
                &self.request_body(&prompt),
            )
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        parse_response(&response)
    }
}

/// Extract the answer text and any grounding sources from a response
fn parse_response(response: &HttpResponse) -> Result<(String, Vec<Source>), ProviderError> {
    if response.status != 200 {
        return Err(ProviderError::Status(response.status));
    }

    let json: Value =
        serde_json::from_str(&response.text).map_err(|e| ProviderError::Parse(e.to_string()))?;

    let candidate = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .ok_or(ProviderError::UnexpectedStructure)?;

    let text = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .ok_or(ProviderError::UnexpectedStructure)?;

    Ok((text.to_string(), grounding_sources(candidate)))
}

/// Web sources from `groundingMetadata.groundingChunks[].web`, when present
fn grounding_sources(candidate: &Value) -> Vec<Source> {
    candidate
        .get("groundingMetadata")
        .and_then(|g| g.get("groundingChunks"))
        .and_then(|c| c.as_array())
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| {
                    let web = chunk.get("web")?;
                    let url = web.get("uri")?.as_str()?;
                    let title = web.get("title").and_then(|t| t.as_str()).unwrap_or(url);
                    Some(Source::new(title, url))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn search(&self, query: &str) -> ProviderResult {
        let start = Instant::now();
        info!("Starting Gemini search for query: {}", query);

        let outcome = self.generate(query).await;
        let elapsed = start.elapsed().as_millis() as u64;

        match outcome {
            Ok((text, sources)) => {
                info!("Gemini call succeeded in {}ms", elapsed);
                ProviderResult::success(self.name(), text, elapsed).with_sources(sources)
            }
            Err(e) => {
                error!("Gemini call failed after {}ms: {}", elapsed, e);
                ProviderResult::failure(self.name(), e.to_string(), elapsed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ERROR_MARKER;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL_PATH: &str = "/models/gemini-1.5-flash-latest:generateContent";

    fn provider(base_url: &str) -> GeminiProvider {
        let settings = GeminiSettings {
            api_key: "test-key".to_string(),
            base_url: format!("{}/models", base_url),
            ..Default::default()
        };
        GeminiProvider::new(HttpClient::new().unwrap(), settings)
    }

    fn response(status: u16, text: &str) -> HttpResponse {
        HttpResponse {
            status,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let settings = GeminiSettings {
            base_url: "https://example.com/models/".to_string(),
            ..Default::default()
        };
        let p = GeminiProvider::new(HttpClient::new().unwrap(), settings);
        assert_eq!(
            p.endpoint(),
            "https://example.com/models/gemini-1.5-flash-latest:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let p = provider("https://example.com");
        let body = serde_json::to_value(p.request_body("hello")).unwrap();

        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["topP"], 0.95);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn test_parse_success() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"AI is..."}]}}]}"#;
        let (text, sources) = parse_response(&response(200, body)).unwrap();
        assert_eq!(text, "AI is...");
        assert!(sources.is_empty());
    }

    #[test]
    fn test_parse_missing_nodes() {
        let bodies = [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{}}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{}]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":42}]}}]}"#,
        ];
        for body in bodies {
            assert_eq!(
                parse_response(&response(200, body)),
                Err(ProviderError::UnexpectedStructure),
                "body: {}",
                body
            );
        }
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_response(&response(200, "not json")).unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
        assert!(err.to_string().starts_with("Error parsing response"));
    }

    #[test]
    fn test_parse_status() {
        let err = parse_response(&response(503, "")).unwrap_err();
        assert_eq!(err, ProviderError::Status(503));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_parse_non_200_success_status() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"AI is..."}]}}]}"#;
        for status in [201, 203, 206] {
            let err = parse_response(&response(status, body)).unwrap_err();
            assert_eq!(err, ProviderError::Status(status));
            assert!(err.to_string().contains(&status.to_string()));
        }
    }

    #[test]
    fn test_parse_grounding_sources() {
        let body = json!({
            "candidates": [{
                "content": {"parts": [{"text": "answer"}]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://a.example", "title": "A"}},
                    {"web": {"uri": "https://b.example"}},
                    {"retrievedContext": {}}
                ]}
            }]
        });
        let (_, sources) = parse_response(&response(200, &body.to_string())).unwrap();
        assert_eq!(
            sources,
            vec![
                Source::new("A", "https://a.example"),
                Source::new("https://b.example", "https://b.example"),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "Please provide a comprehensive answer to: What is AI?"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "AI is..."}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = provider(&server.uri()).search("What is AI?").await;

        assert!(result.success);
        assert_eq!(result.provider, "gemini");
        assert_eq!(result.text, "AI is...");
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_search_upstream_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let result = provider(&server.uri()).search("What is AI?").await;

        assert!(!result.success);
        assert!(result.error.as_deref().unwrap().contains("500"));
        assert!(result.text.starts_with(ERROR_MARKER));
    }

    #[tokio::test]
    async fn test_search_non_authoritative_status_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(203).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "AI is..."}]}}]
            })))
            .mount(&server)
            .await;

        let result = provider(&server.uri()).search("q").await;

        assert!(!result.success);
        assert!(result.error.as_deref().unwrap().contains("203"));
    }

    #[tokio::test]
    async fn test_search_unexpected_structure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let result = provider(&server.uri()).search("q").await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("unexpected response structure"));
        assert_eq!(result.text, "Error: unexpected response structure");
    }

    #[tokio::test]
    async fn test_search_transport_error() {
        // Nothing listens on the discard port
        let result = provider("http://127.0.0.1:9").search("q").await;

        assert!(!result.success);
        let error = result.error.unwrap();
        assert!(error.starts_with("Request failed"));
        assert!(!error.contains("test-key"));
    }
}
