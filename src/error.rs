use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Please provide your OpenAI API key")]
    MissingCredential,

    #[error("Please enter a system prompt")]
    MissingPrompt,

    #[error("API Error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Generation Failed: {0}")]
    GenerationFailed(String),
}
