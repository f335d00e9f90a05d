//! Optional LLM answer synthesis over retrieval output

pub mod backend;
pub mod engine;

pub use backend::{
    GenerateBackend, OllamaBackend, OpenAiBackend, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL,
    DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_URL,
};
pub use engine::LlmEngine;
