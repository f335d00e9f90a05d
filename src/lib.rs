//! guestdesk - a retrieval-backed question desk for short-term rentals
//!
//! Answers guest questions from a local folder of house-rules documents.
//! The pipeline: ingestion splits documents into provenance-tagged chunks,
//! a character n-gram TF-IDF index scores queries against them, and a
//! threshold decision engine picks one of three actions per question:
//! answer directly, ask for clarification, or escalate to the host.
//! An optional LLM backend synthesizes free-text answers from the
//! retrieved chunks.

pub mod cli;
pub mod config;
pub mod dialogue;
pub mod errors;
pub mod ingest;
pub mod llm;
pub mod repl;
pub mod retrieval;
pub mod session;

// Re-export commonly used types
pub use dialogue::{Decision, DecisionKind, DialogueEngine};
pub use errors::{GuestDeskError, Result};
pub use retrieval::{Candidate, ChunkRetriever};
pub use session::SessionContext;
