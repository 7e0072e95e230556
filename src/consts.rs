pub const DEFAULT_MODEL_NAME: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEFAULT_LOG_FILE: &str = "app.log";
pub const DEFAULT_APP_NAME: &str = "Chatbot Support API";
pub const DEFAULT_APP_VERSION: &str = "0.1.0";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

pub const EMPTY_MESSAGES_ERROR: &str = "The 'messages' list cannot be empty.";
pub const UNEXPECTED_RESPONSE_FORMAT: &str = "Unexpected response format from LLM.";

pub(crate) const COLD_EMAIL_SYSTEM_PROMPT: &str = "You are an expert copywriter who writes \
effective cold emails for freelancers who want to win new clients. \
Write clear, concise emails that sound human and respectful. \
Always adapt to the requested language and tone. \
Do not invent facts about the freelancer or the client.";

pub const CLI_SYSTEM_PROMPT: &str = "You are a helpful assistant. Answer clearly and concisely \
in Spanish, unless the user explicitly asks for another language.";
