use crate::consts;
use crate::errors::ChatError;
use crate::models::api::{ColdEmailRequest, Language};
use crate::models::{Message, request};

pub(crate) fn build_completion_request(
    model_name: &str,
    messages: &[Message],
) -> request::ChatCompletionCreate {
    request::ChatCompletionCreate {
        model: model_name.to_string(),
        messages: messages.to_vec(),
    }
}

pub fn validate_messages(messages: &[Message]) -> Result<(), ChatError> {
    if messages.is_empty() {
        return Err(ChatError::InvalidInput(
            consts::EMPTY_MESSAGES_ERROR.to_string(),
        ));
    }
    Ok(())
}

fn language_directive(language: Language) -> &'static str {
    match language {
        Language::En => "Write the email in English.",
        Language::Es => "Write the email in Spanish.",
    }
}

/// Renders the system and user instructions for a cold email.
pub fn build_cold_email_messages(request: &ColdEmailRequest) -> Vec<Message> {
    let user_prompt = format!(
        "Freelancer profile: {}\n\
         Client business: {}\n\
         Client pain point: {}\n\
         Offer: {}\n\
         Email goal: {}\n\
         Tone: {}\n\
         Language: {}\n\n\
         Write a cold email the freelancer can send to this client. \
         {} \
         The email must be ready to copy and paste.",
        request.freelancer_profile,
        request.client_business,
        request.client_pain_point,
        request.offer,
        request.goal,
        request.tone,
        request.language,
        language_directive(request.language),
    );

    vec![
        Message::system(consts::COLD_EMAIL_SYSTEM_PROMPT),
        Message::user(user_prompt),
    ]
}
