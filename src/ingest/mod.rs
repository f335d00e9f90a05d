//! Document ingestion: directory walking, text extraction, chunking
//!
//! Everything here is a collaborator of the retrieval core: it produces
//! plain-text chunks and nothing downstream depends on how they were read.

pub mod chunker;
pub mod extract;
pub mod loader;

pub use chunker::{split_into_chunks, DEFAULT_MAX_CHARS};
pub use loader::{load_documents_to_chunks, loaded_file_names};
