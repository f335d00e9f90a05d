//! guestdesk - main CLI entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use guestdesk::cli::{Args, Commands, LlmBackendKind};
use guestdesk::config::Config;
use guestdesk::llm::{
    LlmEngine, OllamaBackend, OpenAiBackend, DEFAULT_OLLAMA_MODEL, DEFAULT_OPENAI_MODEL,
};
use guestdesk::repl::{DisplayManager, ReplSession};
use guestdesk::session::SessionContext;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load().unwrap_or_default();
    let doc_dir = resolve_doc_dir(&args, &config);

    match args.command {
        Some(Commands::Ask { ref question }) => {
            let session = SessionContext::new(&doc_dir);
            ask_once(&args, &config, session, question).await
        }
        Some(Commands::Docs) => {
            let session = SessionContext::new(&doc_dir);
            let display = DisplayManager::new();
            display.show_docs(session.loaded_files(), session.corpus_len());
            Ok(())
        }
        Some(Commands::Config) => {
            let path = Config::config_path()?;
            println!("Config file: {}", path.display());
            println!("Documents dir: {}", doc_dir.display());
            Ok(())
        }
        None => {
            let session = SessionContext::new(&doc_dir);
            let llm = build_llm(&args, &config)?;
            let mut repl = ReplSession::new(session, llm)?;
            repl.run(env!("CARGO_PKG_VERSION")).await
        }
    }
}

/// Answer a single question and exit.
async fn ask_once(
    args: &Args,
    config: &Config,
    session: SessionContext,
    question: &str,
) -> Result<()> {
    let mut display = DisplayManager::new();
    display.set_verbose(args.verbose);

    if session.is_empty() {
        display.show_warning(&format!(
            "No readable TXT or PDF files under {}",
            session.doc_dir().display()
        ));
    }

    match build_llm(args, config)? {
        Some(llm) => {
            let context = session.context_for(question);
            match llm.answer(question, &context).await {
                Ok(text) => display.show_llm_answer(&text),
                Err(e) => display.show_error(&format!("LLM call failed: {}", e)),
            }
        }
        None => {
            let decision = session.handle(question);
            display.show_decision(&decision);
        }
    }

    Ok(())
}

/// Documents directory resolution: flag, then config file, then ./documents.
fn resolve_doc_dir(args: &Args, config: &Config) -> PathBuf {
    args.docs
        .clone()
        .or_else(|| config.documents_dir().cloned())
        .unwrap_or_else(|| PathBuf::from("documents"))
}

/// Build the LLM engine for the selected backend, if any.
fn build_llm(args: &Args, config: &Config) -> Result<Option<LlmEngine>> {
    let configured_model = args.model.clone().or_else(|| config.llm.model.clone());

    let engine = match args.llm {
        LlmBackendKind::None => None,
        LlmBackendKind::Ollama => {
            let model = configured_model.unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string());
            let backend = OllamaBackend::new(&args.ollama_url(), &model)?;
            Some(LlmEngine::new(Box::new(backend)))
        }
        LlmBackendKind::Openai => {
            let model = configured_model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
            match OpenAiBackend::from_env(&args.api_url, &model) {
                Ok(backend) => Some(LlmEngine::new(Box::new(backend))),
                Err(e) => {
                    eprintln!("{} {} - continuing without LLM", "warning:".yellow().bold(), e);
                    None
                }
            }
        }
    };

    Ok(engine)
}
