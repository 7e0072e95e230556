use crate::consts;
use crate::errors::ChatError;
use crate::models::request;
use crate::models::response_direct::{ChatCompletion, ProviderErrorBody};

pub struct LLMClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl LLMClient {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn request_chat_completion(
        &self,
        request: &request::ChatCompletionCreate,
    ) -> Result<ChatCompletion, ChatError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, "/chat/completions"))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let detail = match serde_json::from_str::<ProviderErrorBody>(&text) {
                Ok(body) => body.error.message,
                Err(_) => text,
            };
            return Err(ChatError::ModelCallFailed(format!(
                "LLM request failed: Error code: {} - {}",
                status.as_u16(),
                detail
            )));
        }

        serde_json::from_str::<ChatCompletion>(&text).map_err(|e| {
            log::error!("undecodable completion body: {}", e);
            ChatError::ModelCallFailed(consts::UNEXPECTED_RESPONSE_FORMAT.to_string())
        })
    }
}
