use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::web::{Data, Json};
use actix_web::{HttpRequest, HttpResponse};

use crate::config::Settings;
use crate::errors::ChatError;
use crate::gateway::ModelGateway;
use crate::llm_request::{build_cold_email_messages, validate_messages};
use crate::models::api::{
    ChatRequest, ChatResponse, ColdEmailRequest, ColdEmailResponse, ErrorResponse, HealthResponse,
};

fn error_response(error: &ChatError, context: &str) -> HttpResponse {
    let (status, detail) = match error {
        ChatError::InvalidInput(_) => (StatusCode::BAD_REQUEST, error.message().to_string()),
        ChatError::ModelCallFailed(_) | ChatError::ConfigError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}: {}", context, error),
        ),
    };
    HttpResponse::build(status).json(ErrorResponse { detail })
}

pub async fn health(settings: Data<Settings>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: settings.app_version.clone(),
    })
}

pub async fn chat(gateway: Data<dyn ModelGateway>, request: Json<ChatRequest>) -> HttpResponse {
    let request = request.into_inner();

    if let Err(e) = validate_messages(&request.messages) {
        log::warn!("POST /chat rejected: {}", e);
        return error_response(&e, "Error processing the message");
    }

    log::info!(
        "POST /chat - {} messages, business_id={:?}",
        request.messages.len(),
        request.business_id
    );

    match gateway.complete(&request.messages).await {
        Ok(reply) => {
            log::info!("chat reply generated: {} characters", reply.chars().count());
            HttpResponse::Ok().json(ChatResponse {
                reply,
                sources: None,
            })
        }
        Err(e) => {
            log::error!("chat LLM call failed: {}", e);
            error_response(&e, "Error processing the message")
        }
    }
}

pub async fn cold_email(
    gateway: Data<dyn ModelGateway>,
    request: Json<ColdEmailRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    log::info!(
        "POST /cold-email - tone={}, language={}",
        request.tone,
        request.language
    );

    let messages = build_cold_email_messages(&request);

    match gateway.complete(&messages).await {
        Ok(email) => {
            log::info!("cold email generated: {} characters", email.chars().count());
            HttpResponse::Ok().json(ColdEmailResponse { email })
        }
        Err(e) => {
            log::error!("cold email generation failed: {}", e);
            error_response(&e, "Error generating the cold email")
        }
    }
}

/// Turns body extraction failures into `{detail}` responses. Schema and
/// content-type violations get 422.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let status = match &err {
        JsonPayloadError::Deserialize(_) | JsonPayloadError::ContentType => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    log::warn!("{} {} rejected body: {}", req.method(), req.path(), err);

    let response = HttpResponse::build(status).json(ErrorResponse {
        detail: err.to_string(),
    });
    InternalError::from_response(err, response).into()
}
