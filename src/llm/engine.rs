//! LLM answer synthesis
//!
//! Assembles a concierge prompt from retrieved chunks and delegates to a
//! generation backend. The engine consumes retrieval output; it never feeds
//! back into scoring.

use crate::errors::Result;
use crate::llm::backend::GenerateBackend;

/// Chunks beyond this count are ignored when building context.
const MAX_CONTEXT_CHUNKS: usize = 8;

const SYSTEM_PROMPT: &str = "You are a concierge answering questions for short-term rental \
guests. Synthesize the context passages; when they conflict, prefer values that most \
passages agree on, and if the disagreement is large, present the most reliable candidate \
alongside the alternative. Cite the source file names (the [FILE:...] markers) in \
parentheses.";

/// Answer synthesizer over a generation backend chosen at construction.
pub struct LlmEngine {
    backend: Box<dyn GenerateBackend>,
}

impl LlmEngine {
    pub fn new(backend: Box<dyn GenerateBackend>) -> Self {
        LlmEngine { backend }
    }

    /// Generate an answer to `question` grounded in up to the first 8
    /// context chunks. Errors are returned to the caller, which surfaces
    /// them as a visible message instead of an answer.
    pub async fn answer(&self, question: &str, context_chunks: &[String]) -> Result<String> {
        let user = build_user_prompt(question, context_chunks);
        self.backend.generate(SYSTEM_PROMPT, &user).await
    }

    /// Model identifier, for display.
    pub fn model(&self) -> &str {
        self.backend.model()
    }
}

fn build_user_prompt(question: &str, context_chunks: &[String]) -> String {
    let context = context_chunks
        .iter()
        .take(MAX_CONTEXT_CHUNKS)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Question:\n{}\n\nContext passages:\n{}\n\nAnswer with: 1) the key point in one \
sentence, 2) the concrete values, 3) a brief note of the source file names.",
        question, context
    )
}
