use serde::{self, Deserialize, Serialize};

// Every field is optional so that shape problems reach the gateway as data
// instead of failing the JSON decode.

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ChoiceMessage {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Choice {
    #[serde(default)]
    pub index: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<ChoiceMessage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletion {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletion {
    /// Text of the first choice, if the provider returned one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}

/// Error envelope used by OpenAI-compatible providers.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub(crate) error: ProviderError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderError {
    pub(crate) message: String,
}
