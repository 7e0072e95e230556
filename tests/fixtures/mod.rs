#![allow(dead_code)]

use std::collections::HashMap;

use serde_json::{Value, json};

use chatbot_api::config::Settings;

fn settings_with(extra: &[(&'static str, &str)]) -> Settings {
    let mut vars: HashMap<&str, String> = HashMap::from([
        ("OPENAI_API_KEY", "test-key".to_string()),
        ("OPENAI_MODEL_NAME", "test-model".to_string()),
        ("APP_VERSION", "9.9.9".to_string()),
        ("LOG_FILE", "test.log".to_string()),
    ]);
    for (key, value) in extra {
        vars.insert(*key, value.to_string());
    }
    Settings::from_source(|key| vars.get(key).cloned()).unwrap()
}

pub fn test_settings(base_url: &str) -> Settings {
    settings_with(&[("OPENAI_BASE_URL", base_url)])
}

pub fn test_settings_with_origins(origins: &str) -> Settings {
    settings_with(&[
        ("OPENAI_BASE_URL", "http://localhost:8081"),
        ("CORS_ORIGINS", origins),
    ])
}

pub fn sample_cold_email_body(tone: &str, language: &str) -> Value {
    json!({
        "freelancer_profile": "Rust backend developer, 8 years",
        "client_business": "Family bakery with online orders",
        "client_pain_point": "Checkout page crashes on weekends",
        "offer": "Two-week stability audit",
        "goal": "Book a 20 minute call",
        "tone": tone,
        "language": language
    })
}

pub fn sample_completion_response(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}
