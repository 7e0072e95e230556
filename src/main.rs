use std::sync::Arc;

use chatbot_api::app::create_app;
use chatbot_api::config;
use chatbot_api::gateway::{ModelGateway, OpenAIGateway};
use chatbot_api::logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let settings = config::load_settings().map_err(std::io::Error::other)?;
    logging::init_logging(&settings, true).map_err(std::io::Error::other)?;
    log::info!(
        "Starting {} v{}...",
        settings.app_name,
        settings.app_version
    );

    let gateway = OpenAIGateway::from_settings(&settings).map_err(std::io::Error::other)?;
    log::info!("using model {}", gateway.model_name());

    let gateway: Arc<dyn ModelGateway> = Arc::new(gateway);
    let bind_addr = (settings.host.clone(), settings.port);
    let settings = Arc::new(settings);

    let app_factory = move || create_app(gateway.clone(), settings.clone());

    let result = actix_web::HttpServer::new(app_factory)
        .bind(bind_addr)?
        .run()
        .await;

    log::info!("Shutting down API...");
    result
}
