use std::io;

use chatbot_api::cli::{ChatSession, run_chat_loop};
use chatbot_api::config;
use chatbot_api::consts;
use chatbot_api::gateway::OpenAIGateway;
use chatbot_api::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    let settings = config::load_settings().map_err(io::Error::other)?;
    logging::init_logging(&settings, false).map_err(io::Error::other)?;

    let gateway = OpenAIGateway::from_settings(&settings).map_err(io::Error::other)?;
    let session = ChatSession::new(consts::CLI_SYSTEM_PROMPT);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let session = run_chat_loop(&gateway, session, stdin.lock(), &mut stdout).await?;

    log::info!("chat ended after {} messages", session.history().len());
    Ok(())
}
