//! Input handler for the REPL using rustyline
//!
//! Provides readline functionality with history and editing.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Input handler managing the readline interface and command history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl InputHandler {
    /// Create new input handler
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
            prompt: "guestdesk> ".to_string(),
        })
    }

    /// Create input handler with persistent history
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if history_file.exists() {
            let _ = editor.load_history(&history_file);
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
            prompt: "guestdesk> ".to_string(),
        })
    }

    /// Set custom prompt
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Read a line of input from the user.
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input
    /// - Ok(None) for EOF (Ctrl-D)
    /// - Err on interrupt (Ctrl-C) or other errors
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    return Ok(Some(String::new()));
                }

                let _ = self.editor.add_history_entry(trimmed);

                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Err(anyhow::anyhow!("Interrupted")),
            Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Save history to disk, called on graceful shutdown
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    /// Get history size
    pub fn history_len(&self) -> usize {
        self.editor.history().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_handler_creation() {
        let handler = InputHandler::new();
        assert!(handler.is_ok());
    }

    #[test]
    fn test_input_handler_with_history() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("test_history");

        let handler = InputHandler::with_history(history_path);
        assert!(handler.is_ok());
    }

    #[test]
    fn test_custom_prompt() {
        let mut handler = InputHandler::new().unwrap();
        handler.set_prompt("ask> ".to_string());
        assert_eq!(handler.prompt, "ask> ");
    }

    #[test]
    fn test_history_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("history");

        {
            let mut handler = InputHandler::with_history(history_path.clone()).unwrap();
            let _ = handler.editor.add_history_entry("where do I park?");
            handler.save_history().unwrap();
        }

        assert!(history_path.exists());

        {
            let handler = InputHandler::with_history(history_path).unwrap();
            assert_eq!(handler.history_len(), 1);
        }
    }
}
