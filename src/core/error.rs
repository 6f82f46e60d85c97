use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    /// A required element was not present in the document at setup.
    #[error("required element not found: #{0}")]
    MissingElement(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("background palette is empty")]
    EmptyPalette,
}

/// Turns a failed element lookup into [`DemoError::MissingElement`].
pub fn require<T>(found: Option<T>, id: &str) -> Result<T, DemoError> {
    found.ok_or_else(|| DemoError::MissingElement(id.to_string()))
}
