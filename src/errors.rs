use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ChatError {
    InvalidInput(String),
    ConfigError(String),
    ModelCallFailed(String),
}

impl ChatError {
    /// The bare message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ChatError::InvalidInput(msg)
            | ChatError::ConfigError(msg)
            | ChatError::ModelCallFailed(msg) => msg,
        }
    }
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ChatError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            ChatError::ModelCallFailed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ChatError {}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::ModelCallFailed(format!("LLM request failed: {}", err))
    }
}

impl From<std::io::Error> for ChatError {
    fn from(err: std::io::Error) -> Self {
        ChatError::ConfigError(err.to_string())
    }
}
