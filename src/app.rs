use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, http, web};

use crate::config::Settings;
use crate::gateway::ModelGateway;
use crate::handlers;

fn build_cors(settings: &Settings) -> Cors {
    let cors = if settings.allows_any_origin() {
        Cors::default().allow_any_origin()
    } else {
        settings
            .cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors.allowed_methods(vec![
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
    ])
    .allow_any_header()
    .block_on_origin_mismatch(true)
}

pub fn create_app(
    gateway: Arc<dyn ModelGateway>,
    settings: Arc<Settings>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = build_cors(&settings);

    App::new()
        .wrap(cors)
        .wrap(Logger::default())
        .app_data(web::JsonConfig::default().error_handler(handlers::json_error_handler))
        .app_data(Data::from(gateway))
        .app_data(Data::from(settings))
        .route("/health", web::get().to(handlers::health))
        .route("/chat", web::post().to(handlers::chat))
        .route("/cold-email", web::post().to(handlers::cold_email))
}
