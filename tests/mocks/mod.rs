#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use chatbot_api::errors::ChatError;
use chatbot_api::gateway::ModelGateway;
use chatbot_api::models::Message;

/// Gateway stub that records every conversation it receives and replays
/// scripted results. Once the script runs out it keeps returning the
/// fallback reply.
pub struct StubGateway {
    responses: Mutex<VecDeque<Result<String, ChatError>>>,
    fallback: String,
    calls: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl StubGateway {
    pub fn new(fallback: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: fallback.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        let stub = Self::new("");
        stub.add_response(Err(ChatError::ModelCallFailed(message.to_string())));
        stub
    }

    pub fn add_response(&self, response: Result<String, ChatError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn get_calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelGateway for StubGateway {
    async fn complete(&self, messages: &[Message]) -> Result<String, ChatError> {
        self.calls.lock().unwrap().push(messages.to_vec());

        match self.responses.lock().unwrap().pop_front() {
            Some(response) => response,
            None => Ok(self.fallback.clone()),
        }
    }
}
