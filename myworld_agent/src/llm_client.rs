use anyhow::{Context, Result};

use crate::config::GeneratorConfig;
use crate::models::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

#[derive(Clone)]
pub struct GeminiClient {
    api_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            config.api_url.clone(),
            config.api_key.clone(),
            config.model.clone(),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_url, self.model)
    }

    /// Sends one prompt constrained to a JSON response schema and returns the
    /// raw JSON text of the first candidate.
    pub async fn generate_json(&self, prompt: &str, schema: serde_json::Value) -> Result<String> {
        if self.api_key.is_empty() {
            anyhow::bail!("No API key configured for the generative-language service");
        }

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            }),
        };

        tracing::debug!("Requesting generateContent from model {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send generateContent request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            anyhow::bail!("Generative API returned error {}: {}", status, body);
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse generateContent response")?;

        let text = completion
            .first_text()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| anyhow::anyhow!("No candidate text in generateContent response"))?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = GeminiClient::new(
            "http://127.0.0.1:9999/".into(),
            "key".into(),
            "gemini-3-flash-preview".into(),
        );
        assert_eq!(
            client.endpoint(),
            "http://127.0.0.1:9999/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        // Port 9 is discard; the request must never be attempted.
        let client = GeminiClient::new("http://127.0.0.1:9".into(), String::new(), "m".into());
        let err = client
            .generate_json("hello", serde_json::json!({}))
            .await
            .expect_err("no key");
        assert!(err.to_string().contains("No API key"));
    }
}
