//! Retrieval core: TF-IDF index and ranked chunk search

pub mod engine;
pub mod vectorizer;

pub use engine::{Candidate, ChunkRetriever, DEFAULT_PER_FILE_LIMIT, DEFAULT_TOP_K};
pub use vectorizer::{NgramTfIdfIndex, SparseVector};
