use std::io::{self, BufRead, Write};

use crate::errors::ChatError;
use crate::gateway::ModelGateway;
use crate::models::Message;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Skip,
    Say(String),
}

pub fn parse_input(line: &str) -> Command {
    let line = line.trim();
    if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        Command::Exit
    } else if line.is_empty() {
        Command::Skip
    } else {
        Command::Say(line.to_string())
    }
}

/// Conversation history kept across turns of the terminal loop.
pub struct ChatSession {
    history: Vec<Message>,
}

impl ChatSession {
    pub fn new(system_prompt: &str) -> Self {
        Self {
            history: vec![Message::system(system_prompt)],
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Sends one user turn. On failure the turn is dropped from the history.
    pub async fn submit(
        &mut self,
        gateway: &dyn ModelGateway,
        user_input: &str,
    ) -> Result<String, ChatError> {
        self.history.push(Message::user(user_input));

        match gateway.complete(&self.history).await {
            Ok(reply) => {
                self.history.push(Message::assistant(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                self.history.pop();
                Err(e)
            }
        }
    }
}

pub async fn run_chat_loop<R, W>(
    gateway: &dyn ModelGateway,
    mut session: ChatSession,
    input: R,
    output: &mut W,
) -> io::Result<ChatSession>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "CLI LLM Chatbot. Type 'exit' to quit.\n")?;

    let mut lines = input.lines();
    loop {
        write!(output, "You: ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                writeln!(output, "\nGoodbye!")?;
                break;
            }
        };

        let text = match parse_input(&line) {
            Command::Exit => {
                writeln!(output, "Goodbye!")?;
                break;
            }
            Command::Skip => continue,
            Command::Say(text) => text,
        };

        match session.submit(gateway, &text).await {
            Ok(reply) => writeln!(output, "Assistant: {}\n", reply)?,
            Err(e) => {
                log::error!("turn failed: {}", e);
                writeln!(output, "[error] {}", e)?;
            }
        }
    }

    Ok(session)
}
