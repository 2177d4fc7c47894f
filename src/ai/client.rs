use crate::error::ForgeError;
use serde_json::{json, Value};
use std::time::Duration;

const OPENAI_MODEL: &str = "gpt-4";
const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 2000;

pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key,
        }
    }

    /// One chat-completion round trip: a fixed system instruction plus the
    /// user's message, with bounded output length and fixed temperature.
    /// A single attempt; any failure surfaces to the caller as-is.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ForgeError> {
        let payload = json!({
            "model": OPENAI_MODEL,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS
        });

        let res = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            log::error!("API Error: {}", err_text);
            return Err(ForgeError::GenerationFailed(format!(
                "API Error {status}: {err_text}"
            )));
        }

        let body: Value = res.json().await?;

        let text = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| ForgeError::GenerationFailed("No text content returned".into()))?;

        Ok(text.to_string())
    }
}
