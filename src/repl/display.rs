//! Terminal output for the REPL
//!
//! Renders decisions with a color-coded action tag and numbers any
//! clarification options so a guest can answer "2".

use colored::*;

use crate::dialogue::{Decision, DecisionKind};

/// Display manager for REPL output
pub struct DisplayManager {
    verbose: bool,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager { verbose: false }
    }

    /// Toggle score display on decisions
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, doc_dir: &str, chunk_count: usize, model: Option<&str>) {
        let width = 64;
        let top = "=".repeat(width).cyan();
        let title = format!("  guestdesk {} - Guest Question Desk", version);
        let info = match model {
            Some(model) => format!("  Docs: {} ({} chunks) | LLM: {}", doc_dir, chunk_count, model),
            None => format!("  Docs: {} ({} chunks) | LLM: off", doc_dir, chunk_count),
        };

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", "=".repeat(width).cyan());
        println!(
            "Ask a question (or {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Render a decision: tag, text, numbered options, optional score.
    pub fn show_decision(&self, decision: &Decision) {
        let tag = match decision.kind {
            DecisionKind::Answer => "[answer]".green().bold(),
            DecisionKind::Clarify => "[clarify]".yellow().bold(),
            DecisionKind::Escalate => "[escalate]".red().bold(),
        };

        println!("{} {}", tag, decision.text);

        if let Some(ref options) = decision.options {
            for (i, option) in options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
        }

        if self.verbose {
            if let Some(score) = decision.score {
                println!("{}", format!("  (score: {:.3})", score).dimmed());
            }
        }
        println!();
    }

    /// Render an LLM-generated answer
    pub fn show_llm_answer(&self, text: &str) {
        println!("{} {}\n", "[llm]".green().bold(), text);
    }

    /// Show an error message
    pub fn show_error(&self, message: &str) {
        eprintln!("{} {}\n", "error:".red().bold(), message);
    }

    /// Show a warning message
    pub fn show_warning(&self, message: &str) {
        eprintln!("{} {}\n", "warning:".yellow().bold(), message);
    }

    /// List the loaded document names
    pub fn show_docs(&self, files: &[String], chunk_count: usize) {
        if files.is_empty() {
            println!("No documents loaded.\n");
            return;
        }
        println!("{} document(s), {} chunk(s):", files.len(), chunk_count);
        for (i, name) in files.iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }
        println!();
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_toggle() {
        let mut display = DisplayManager::new();
        assert!(!display.is_verbose());
        display.set_verbose(true);
        assert!(display.is_verbose());
    }
}
