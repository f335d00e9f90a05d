//! Dialogue decision engine
//!
//! Maps retrieval confidence into one of three conversational actions:
//! answer directly from the best chunk, ask the guest to clarify, or hand
//! off to a human. Stateless across calls; every decision is computed from
//! a single search.

use serde::{Deserialize, Serialize};

use crate::retrieval::engine::{Candidate, ChunkRetriever, DEFAULT_PER_FILE_LIMIT};

/// Score at or above which the top chunk is returned as a direct answer
pub const SIMILARITY_THRESHOLD_STRICT: f32 = 0.45;

/// Score at or above which candidates are offered for clarification
pub const SIMILARITY_THRESHOLD_WEAK: f32 = 0.25;

/// Candidates considered per decision
const DECISION_TOP_K: usize = 3;

/// Clarification options are the first line of a candidate, truncated to
/// this many Unicode code points.
const OPTION_MAX_CHARS: usize = 50;

const CLARIFY_GENERIC_TEXT: &str =
    "Which topic do you mean? (e.g. check-in, Wi-Fi, parking)";
const CLARIFY_OPTIONS_TEXT: &str = "Did you mean one of these?";
const ESCALATE_TEXT: &str = "Let me connect you with the host for that one.";

/// Kind of conversational action taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    Answer,
    Clarify,
    Escalate,
}

/// Structured response consumed by a presentation layer.
///
/// `options`, when present, is rendered as a numbered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    #[serde(rename = "type")]
    pub kind: DecisionKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// Threshold-based decision engine over a retriever.
pub struct DialogueEngine {
    strict_threshold: f32,
    weak_threshold: f32,
}

impl DialogueEngine {
    /// Create an engine with the built-in thresholds.
    pub fn new() -> Self {
        DialogueEngine {
            strict_threshold: SIMILARITY_THRESHOLD_STRICT,
            weak_threshold: SIMILARITY_THRESHOLD_WEAK,
        }
    }

    /// Create an engine with custom thresholds, for callers that need
    /// different tuning. `strict` must not be below `weak`.
    pub fn with_thresholds(strict: f32, weak: f32) -> Self {
        DialogueEngine {
            strict_threshold: strict,
            weak_threshold: weak,
        }
    }

    /// Decide how to respond to a guest message.
    pub fn handle(&self, retriever: &ChunkRetriever, message: &str) -> Decision {
        let candidates =
            retriever.search_with_limits(message, DECISION_TOP_K, DEFAULT_PER_FILE_LIMIT);
        self.classify(&candidates)
    }

    /// Map ranked candidates into a decision.
    fn classify(&self, candidates: &[Candidate]) -> Decision {
        let best = match candidates.first() {
            Some(best) => best,
            None => {
                return Decision {
                    kind: DecisionKind::Clarify,
                    text: CLARIFY_GENERIC_TEXT.to_string(),
                    options: None,
                    score: None,
                }
            }
        };

        if best.score >= self.strict_threshold {
            return Decision {
                kind: DecisionKind::Answer,
                text: best.text.clone(),
                options: None,
                score: Some(best.score),
            };
        }

        if best.score >= self.weak_threshold {
            let options = candidates.iter().map(|c| option_label(&c.text)).collect();
            return Decision {
                kind: DecisionKind::Clarify,
                text: CLARIFY_OPTIONS_TEXT.to_string(),
                options: Some(options),
                score: Some(best.score),
            };
        }

        Decision {
            kind: DecisionKind::Escalate,
            text: ESCALATE_TEXT.to_string(),
            options: None,
            score: Some(best.score),
        }
    }
}

impl Default for DialogueEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First line of a chunk, truncated to the first 50 code points.
fn option_label(chunk: &str) -> String {
    chunk
        .lines()
        .next()
        .unwrap_or("")
        .chars()
        .take(OPTION_MAX_CHARS)
        .collect()
}
