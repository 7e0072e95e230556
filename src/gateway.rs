use async_trait::async_trait;

use crate::config::Settings;
use crate::consts;
use crate::errors::ChatError;
use crate::llm_client::LLMClient;
use crate::llm_request::build_completion_request;
use crate::models::Message;

/// Sends a conversation to the model provider and returns the reply text.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError>;
}

pub struct OpenAIGateway {
    client: LLMClient,
    model_name: String,
}

impl OpenAIGateway {
    pub fn new(client: LLMClient, model_name: &str) -> Self {
        Self {
            client,
            model_name: model_name.to_string(),
        }
    }

    /// Builds the HTTP client once; call before serving traffic.
    pub fn from_settings(settings: &Settings) -> Result<Self, ChatError> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| ChatError::ConfigError(format!("cannot build HTTP client: {}", e)))?;

        let client = LLMClient::new(
            http_client,
            &settings.openai_base_url,
            &settings.openai_api_key,
        );
        Ok(Self::new(client, &settings.openai_model_name))
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[async_trait]
impl ModelGateway for OpenAIGateway {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError> {
        log::info!(
            "calling model {} with {} messages",
            self.model_name,
            messages.len()
        );

        let request = build_completion_request(&self.model_name, messages);
        let completion = self
            .client
            .request_chat_completion(&request)
            .await
            .inspect_err(|e| log::error!("LLM call failed: {}", e))?;

        match completion.first_content() {
            Some(reply) => {
                log::info!("reply received: {} characters", reply.chars().count());
                Ok(reply.to_string())
            }
            None => {
                log::error!("unexpected LLM response shape: {:?}", completion);
                Err(ChatError::ModelCallFailed(
                    consts::UNEXPECTED_RESPONSE_FORMAT.to_string(),
                ))
            }
        }
    }
}
