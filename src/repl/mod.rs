//! Interactive REPL for the guest question desk
//!
//! Coordinates input handling, built-in commands, and decision rendering
//! around one session. When an LLM engine is attached, questions go through
//! retrieval-augmented synthesis; otherwise the decision engine answers
//! from the corpus directly.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use std::path::PathBuf;

use crate::llm::LlmEngine;
use crate::repl::commands::{is_command, CommandHandler};
pub use crate::repl::display::DisplayManager;
pub use crate::repl::input::InputHandler;
use crate::session::SessionContext;

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    display: DisplayManager,
    session: SessionContext,
    llm: Option<LlmEngine>,
}

impl ReplSession {
    /// Create a new REPL over an existing session context.
    pub fn new(session: SessionContext, llm: Option<LlmEngine>) -> Result<Self> {
        let history = dirs::home_dir().map(|h| h.join(".guestdesk_history"));
        let input_handler = match history {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        Ok(ReplSession {
            input_handler,
            command_handler: CommandHandler::new(),
            display: DisplayManager::new(),
            session,
            llm,
        })
    }

    /// Create a REPL with an explicit history file (used in tests).
    pub fn with_history(
        session: SessionContext,
        llm: Option<LlmEngine>,
        history_path: PathBuf,
    ) -> Result<Self> {
        Ok(ReplSession {
            input_handler: InputHandler::with_history(history_path)?,
            command_handler: CommandHandler::new(),
            display: DisplayManager::new(),
            session,
            llm,
        })
    }

    /// Run the read-eval-print loop until exit or EOF.
    pub async fn run(&mut self, version: &str) -> Result<()> {
        self.display.show_banner(
            version,
            &self.session.doc_dir().display().to_string(),
            self.session.corpus_len(),
            self.llm.as_ref().map(|l| l.model()),
        );

        if self.session.is_empty() {
            self.display.show_warning(&format!(
                "No readable TXT or PDF files under {} - every question will ask for \
                 clarification. Add documents and run /reload.",
                self.session.doc_dir().display()
            ));
        }

        loop {
            let line = match self.input_handler.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => break, // Ctrl-D
                Err(_) => break,   // Ctrl-C
            };

            if line.is_empty() {
                continue;
            }

            if is_command(&line) {
                let command = self.command_handler.parse(&line);
                let keep_going =
                    self.command_handler
                        .execute(command, &mut self.session, &mut self.display)?;
                if !keep_going {
                    break;
                }
                continue;
            }

            self.answer(&line).await;
        }

        self.input_handler.save_history()?;
        Ok(())
    }

    /// Answer one guest question, via the LLM when attached.
    async fn answer(&mut self, question: &str) {
        if let Some(ref llm) = self.llm {
            let context = self.session.context_for(question);
            match llm.answer(question, &context).await {
                Ok(text) => self.display.show_llm_answer(&text),
                // LLM failures surface as a visible message; the session
                // keeps running.
                Err(e) => self.display.show_error(&format!("LLM call failed: {}", e)),
            }
            return;
        }

        let decision = self.session.handle(question);
        self.display.show_decision(&decision);
    }

    /// Access the underlying session (used in tests)
    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_repl_creation_over_empty_session() {
        let tmp = TempDir::new().unwrap();
        let session = SessionContext::new(Path::new("/nonexistent"));
        let repl = ReplSession::with_history(session, None, tmp.path().join("history"));
        assert!(repl.is_ok());
        assert!(repl.unwrap().session().is_empty());
    }
}
