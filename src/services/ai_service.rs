use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are an expert educator and question generator. \
Always respond with valid JSON format as requested.";

/// Thin client for the Groq chat-completions endpoint (OpenAI-compatible
/// wire format). One call per generation; never retries.
#[derive(Clone)]
pub struct AiService {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AiService {
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            client,
            api_base: config.groq_api_base.clone(),
            api_key: config.groq_api_key.clone(),
            model: config.groq_model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Sends the generation prompt and decodes the model's reply as JSON.
    ///
    /// Transport errors and non-2xx statuses become `Error::Provider`;
    /// a 2xx reply whose content is not valid JSON becomes
    /// `Error::MalformedOutput`. Callers depend on the distinction to pick
    /// a retry strategy.
    pub async fn generate_mcqs(&self, prompt: &str) -> Result<JsonValue> {
        tracing::info!("Sending request to Groq API");

        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt}
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "response_format": { "type": "json_object" }
        });

        let res = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await
            .map_err(|e| Error::Provider(format!("Failed to reach Groq API: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(Error::Provider(format!("{}: {}", status, text)));
        }

        let body: JsonValue = res
            .json()
            .await
            .map_err(|e| Error::Provider(format!("Invalid response body: {}", e)))?;

        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| Error::Provider("Response is missing message content".to_string()))?;

        tracing::info!("Successfully received response from Groq API");

        serde_json::from_str(content).map_err(|e| Error::MalformedOutput(e.to_string()))
    }

    /// Minimal low-cost request used by the health endpoint. Reports
    /// reachability without ever failing the caller.
    pub async fn test_connection(&self) -> bool {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [{"role": "user", "content": "Hello"}],
            "max_tokens": 10
        });

        let result = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .timeout(Duration::from_secs(10))
            .send()
            .await;

        match result {
            Ok(res) => res.status().is_success(),
            Err(e) => {
                tracing::error!("Groq API connection test failed: {}", e);
                false
            }
        }
    }
}
