use crate::ai::client::OpenAiClient;
use crate::ai::extract::{self, Extraction};
use crate::ai::prompts;
use crate::error::ForgeError;

pub struct Generator {
    client: OpenAiClient,
}

impl Generator {
    pub fn new(api_key: &str) -> Result<Self, ForgeError> {
        if api_key.trim().is_empty() {
            return Err(ForgeError::MissingCredential);
        }
        Ok(Self {
            client: OpenAiClient::new(api_key.trim().to_string()),
        })
    }

    /// One full cycle: validate the input, send it for analysis, and scan the
    /// reply for the three sections. Each invocation is independent.
    pub async fn run(&self, system_prompt: &str) -> Result<Extraction, ForgeError> {
        if system_prompt.trim().is_empty() {
            return Err(ForgeError::MissingPrompt);
        }

        log::info!("📝 Sending prompt for analysis ({} chars)", system_prompt.len());
        let reply = self
            .client
            .complete(prompts::ANALYZER_PROMPT, &prompts::analysis_request(system_prompt))
            .await?;

        log::info!("📨 Reply received ({} chars), extracting sections", reply.len());
        Ok(extract::extract_sections(&reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected_before_any_call() {
        assert!(matches!(Generator::new(""), Err(ForgeError::MissingCredential)));
        assert!(matches!(Generator::new("   "), Err(ForgeError::MissingCredential)));
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_before_any_call() {
        let generator = Generator::new("sk-test").unwrap();
        let result = generator.run("  \n ").await;
        assert!(matches!(result, Err(ForgeError::MissingPrompt)));
    }
}
