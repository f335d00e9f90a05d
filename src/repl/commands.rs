//! Built-in REPL commands
//!
//! Slash-prefixed commands for session management: reload the corpus, list
//! loaded documents, toggle score display, exit.

use anyhow::Result;
use colored::*;

use crate::repl::display::DisplayManager;
use crate::session::SessionContext;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Docs,
    Reload,
    Verbose { enable: bool },
    Exit,
    Unknown { input: String },
}

/// Check if input looks like a command
pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Command handler for parsing and executing REPL commands
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "docs" | "files" => Command::Docs,
            "reload" => Command::Reload,
            "verbose" => {
                let enable = parts
                    .get(1)
                    .map(|s| s.to_lowercase() == "on" || s == &"1" || s == &"true")
                    .unwrap_or(true);
                Command::Verbose { enable }
            }
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command.
    ///
    /// Returns true if the REPL should continue, false to exit.
    pub fn execute(
        &self,
        command: Command,
        session: &mut SessionContext,
        display: &mut DisplayManager,
    ) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Docs => {
                display.show_docs(session.loaded_files(), session.corpus_len());
                Ok(true)
            }
            Command::Reload => {
                session.reload();
                println!(
                    "Reloaded {} document(s), {} chunk(s).\n",
                    session.loaded_files().len(),
                    session.corpus_len()
                );
                if session.is_empty() {
                    display.show_warning(&format!(
                        "No readable TXT or PDF files under {}",
                        session.doc_dir().display()
                    ));
                }
                Ok(true)
            }
            Command::Verbose { enable } => {
                display.set_verbose(enable);
                println!("Score display {}.\n", if enable { "on" } else { "off" });
                Ok(true)
            }
            Command::Exit => {
                println!("Bye.");
                Ok(false)
            }
            Command::Unknown { input } => {
                println!(
                    "Unknown command: {} (try {})\n",
                    input.trim(),
                    "/help".green()
                );
                Ok(true)
            }
        }
    }

    fn show_help(&self) {
        println!("Commands:");
        println!("  {}            show this help", "/help".green());
        println!("  {}            list loaded documents", "/docs".green());
        println!("  {}          reload the documents folder", "/reload".green());
        println!("  {}  show similarity scores", "/verbose on|off".green());
        println!("  {}            leave the session", "/exit".green());
        println!();
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
