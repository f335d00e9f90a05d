//! Command-line argument parsing for guestdesk

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// guestdesk - answer rental guest questions from local house documents
#[derive(Parser, Debug)]
#[command(name = "guestdesk")]
#[command(version)]
#[command(about = "Answer short-term rental guest questions from local house-rules documents", long_about = None)]
pub struct Args {
    /// Documents directory (TXT and PDF house rules)
    #[arg(short, long, value_name = "DIR")]
    pub docs: Option<PathBuf>,

    /// LLM backend for answer synthesis
    #[arg(long, value_enum, default_value = "none")]
    pub llm: LlmBackendKind,

    /// Model name for the selected backend
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama host
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Ollama port
    #[arg(long, default_value_t = 11434)]
    pub port: u16,

    /// Base URL for an OpenAI-compatible API
    #[arg(long, default_value = "https://api.openai.com/v1")]
    pub api_url: String,

    /// Show similarity scores with every decision
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand (interactive REPL when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a single question and exit
    Ask {
        /// The guest question
        question: String,
    },

    /// List the documents the corpus would load
    Docs,

    /// Display current configuration
    Config,
}

/// Which LLM backend to attach, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmBackendKind {
    /// Retrieval decisions only, no LLM
    None,
    /// Local Ollama server
    Ollama,
    /// OpenAI-compatible API (needs OPENAI_API_KEY)
    Openai,
}

impl Args {
    /// Get Ollama base URL
    pub fn ollama_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            docs: None,
            llm: LlmBackendKind::None,
            model: None,
            host: "127.0.0.1".to_string(),
            port: 11434,
            api_url: "https://api.openai.com/v1".to_string(),
            verbose: false,
            command: None,
        }
    }

    #[test]
    fn test_ollama_url() {
        let mut args = base_args();
        args.host = "localhost".to_string();
        args.port = 8080;
        assert_eq!(args.ollama_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_ask_subcommand() {
        let args = Args::parse_from(["guestdesk", "ask", "where do I park?"]);
        match args.command {
            Some(Commands::Ask { question }) => assert_eq!(question, "where do I park?"),
            _ => panic!("expected ask subcommand"),
        }
    }

    #[test]
    fn test_parse_llm_backend() {
        let args = Args::parse_from(["guestdesk", "--llm", "ollama"]);
        assert_eq!(args.llm, LlmBackendKind::Ollama);

        let args = Args::parse_from(["guestdesk"]);
        assert_eq!(args.llm, LlmBackendKind::None);
    }

    #[test]
    fn test_parse_docs_dir() {
        let args = Args::parse_from(["guestdesk", "--docs", "/srv/house-rules"]);
        assert_eq!(args.docs, Some(PathBuf::from("/srv/house-rules")));
    }
}
