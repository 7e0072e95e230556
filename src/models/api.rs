use std::fmt;

use serde::{self, Deserialize, Serialize};

use super::Message;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub business_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatResponse {
    pub reply: String,
    pub sources: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Casual,
    #[default]
    Professional,
    Friendly,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Casual => write!(f, "casual"),
            Tone::Professional => write!(f, "professional"),
            Tone::Friendly => write!(f, "friendly"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Es => write!(f, "es"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ColdEmailRequest {
    pub freelancer_profile: String,
    pub client_business: String,
    pub client_pain_point: String,
    pub offer: String,
    pub goal: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ColdEmailResponse {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub detail: String,
}
