//! Session context owning the corpus/retriever/engine for one front-end
//!
//! There is no global state: each session owns its own corpus and index, so
//! independent sessions over different document folders can coexist. A
//! reload rebuilds everything and swaps it in wholesale; callers never see
//! a half-rebuilt index.

use std::path::{Path, PathBuf};

use crate::dialogue::{Decision, DialogueEngine};
use crate::ingest::{load_documents_to_chunks, loaded_file_names};
use crate::retrieval::ChunkRetriever;

/// One conversation session over a documents directory.
pub struct SessionContext {
    doc_dir: PathBuf,
    retriever: ChunkRetriever,
    engine: DialogueEngine,
    loaded_files: Vec<String>,
}

impl SessionContext {
    /// Load the corpus under `doc_dir` and build a session over it.
    /// A missing or empty directory yields a working session with an empty
    /// corpus (every question clarifies).
    pub fn new(doc_dir: &Path) -> Self {
        let chunks = load_documents_to_chunks(doc_dir);
        let loaded_files = loaded_file_names(doc_dir);

        SessionContext {
            doc_dir: doc_dir.to_path_buf(),
            retriever: ChunkRetriever::new(chunks),
            engine: DialogueEngine::new(),
            loaded_files,
        }
    }

    /// Rebuild the corpus and index from disk and swap them in wholesale.
    pub fn reload(&mut self) {
        let chunks = load_documents_to_chunks(&self.doc_dir);
        self.loaded_files = loaded_file_names(&self.doc_dir);
        self.retriever = ChunkRetriever::new(chunks);
    }

    /// Point the session at a different documents directory and reload.
    pub fn set_doc_dir(&mut self, doc_dir: &Path) {
        self.doc_dir = doc_dir.to_path_buf();
        self.reload();
    }

    /// Decide how to respond to a guest message.
    pub fn handle(&self, message: &str) -> Decision {
        self.engine.handle(&self.retriever, message)
    }

    /// Top-ranked chunk texts for LLM context assembly.
    pub fn context_for(&self, query: &str) -> Vec<String> {
        self.retriever
            .search(query)
            .into_iter()
            .map(|c| c.text)
            .collect()
    }

    /// Documents directory this session reads from
    pub fn doc_dir(&self) -> &Path {
        &self.doc_dir
    }

    /// Names of the files that contributed text to the corpus
    pub fn loaded_files(&self) -> &[String] {
        &self.loaded_files
    }

    /// Number of chunks in the current corpus
    pub fn corpus_len(&self) -> usize {
        self.retriever.corpus_len()
    }

    /// True when no documents were loaded
    pub fn is_empty(&self) -> bool {
        self.retriever.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::DecisionKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_session_over_missing_directory() {
        let session = SessionContext::new(Path::new("/nonexistent/documents"));
        assert!(session.is_empty());

        let decision = session.handle("where do I park?");
        assert_eq!(decision.kind, DecisionKind::Clarify);
    }

    #[test]
    fn test_reload_picks_up_new_documents() {
        let tmp = TempDir::new().unwrap();
        let mut session = SessionContext::new(tmp.path());
        assert!(session.is_empty());

        fs::write(tmp.path().join("wifi.txt"), "the wifi password is hunter2\n").unwrap();
        session.reload();

        assert_eq!(session.corpus_len(), 1);
        assert_eq!(session.loaded_files(), ["wifi.txt".to_string()]);
    }

    #[test]
    fn test_independent_sessions_do_not_share_state() {
        let tmp_a = TempDir::new().unwrap();
        let tmp_b = TempDir::new().unwrap();
        fs::write(tmp_a.path().join("a.txt"), "checkin at 3pm\n").unwrap();

        let session_a = SessionContext::new(tmp_a.path());
        let session_b = SessionContext::new(tmp_b.path());

        assert_eq!(session_a.corpus_len(), 1);
        assert!(session_b.is_empty());
    }

    #[test]
    fn test_set_doc_dir_switches_corpus() {
        let tmp_a = TempDir::new().unwrap();
        let tmp_b = TempDir::new().unwrap();
        fs::write(tmp_a.path().join("a.txt"), "checkin at 3pm\n").unwrap();
        fs::write(tmp_b.path().join("b.txt"), "no smoking indoors\n").unwrap();

        let mut session = SessionContext::new(tmp_a.path());
        assert_eq!(session.loaded_files(), ["a.txt".to_string()]);

        session.set_doc_dir(tmp_b.path());
        assert_eq!(session.doc_dir(), tmp_b.path());
        assert_eq!(session.loaded_files(), ["b.txt".to_string()]);
    }

    #[test]
    fn test_context_for_returns_chunk_texts() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wifi.txt"), "the wifi password is hunter2\n").unwrap();

        let session = SessionContext::new(tmp.path());
        let context = session.context_for("wifi password");
        assert_eq!(context.len(), 1);
        assert!(context[0].contains("hunter2"));
    }
}
