use serde::{self, Deserialize, Serialize};

use super::Message;

/// Body of an outbound `POST /chat/completions`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatCompletionCreate {
    pub model: String,
    pub messages: Vec<Message>,
}
