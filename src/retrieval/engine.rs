//! Chunk retriever: scoring, ranking, and per-file diversity capping

use serde::{Deserialize, Serialize};

use crate::retrieval::vectorizer::NgramTfIdfIndex;

/// Default number of results returned by a search
pub const DEFAULT_TOP_K: usize = 8;

/// Default cap on results contributed by a single source file
pub const DEFAULT_PER_FILE_LIMIT: usize = 2;

/// A retrieved chunk with its similarity score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub score: f32,
}

/// Retriever over a fixed chunk corpus.
///
/// Owns the corpus and its TF-IDF index as an aligned pair; both are
/// replaced wholesale when the corpus changes. Search is pure and
/// deterministic: the same corpus and query always rank the same way.
pub struct ChunkRetriever {
    chunks: Vec<String>,
    index: NgramTfIdfIndex,
}

impl ChunkRetriever {
    /// Build a retriever over the given corpus. An empty corpus is valid
    /// and every search against it returns no results.
    pub fn new(chunks: Vec<String>) -> Self {
        let index = NgramTfIdfIndex::fit(&chunks);
        ChunkRetriever { chunks, index }
    }

    /// Search with default result count and per-file cap.
    pub fn search(&self, query: &str) -> Vec<Candidate> {
        self.search_with_limits(query, DEFAULT_TOP_K, DEFAULT_PER_FILE_LIMIT)
    }

    /// Rank every chunk against `query` and return up to `top_k` results,
    /// with at most `per_file_limit` chunks from any one source file.
    ///
    /// Chunks skipped by the per-file cap do not count toward `top_k`.
    /// Ties keep original corpus order. Zero scores are not filtered.
    pub fn search_with_limits(
        &self,
        query: &str,
        top_k: usize,
        per_file_limit: usize,
    ) -> Vec<Candidate> {
        if query.trim().is_empty() || self.chunks.is_empty() {
            return Vec::new();
        }

        let query_vec = self.index.transform(query);
        let scores = self.index.similarities(&query_vec);

        let mut indexed: Vec<(usize, f32)> = scores.into_iter().enumerate().collect();
        // Stable descending sort: equal scores keep corpus order.
        indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut results = Vec::new();
        let mut per_file_count: std::collections::HashMap<String, usize> =
            std::collections::HashMap::new();

        for (idx, score) in indexed {
            let chunk = &self.chunks[idx];
            let source = extract_source_id(chunk);
            let count = per_file_count.entry(source).or_insert(0);
            if *count >= per_file_limit {
                continue;
            }
            *count += 1;
            results.push(Candidate {
                text: chunk.clone(),
                score,
            });
            if results.len() >= top_k {
                break;
            }
        }

        results
    }

    /// Number of chunks in the corpus
    pub fn corpus_len(&self) -> usize {
        self.chunks.len()
    }

    /// True when no chunks are loaded
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Extract the source file name from a chunk's leading `[FILE:<name>]`
/// marker. Chunks without a marker share the empty-string source group.
pub fn extract_source_id(chunk: &str) -> String {
    if let Some(rest) = chunk.strip_prefix("[FILE:") {
        if let Some(end) = rest.find(']') {
            return rest[..end].to_string();
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_source_id() {
        assert_eq!(extract_source_id("[FILE:rules.pdf]\ntext"), "rules.pdf");
        assert_eq!(extract_source_id("no marker here"), "");
        assert_eq!(extract_source_id("[FILE:unterminated"), "");
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let retriever = ChunkRetriever::new(corpus(&["wifi password is 1234"]));
        assert!(retriever.search("").is_empty());
        assert!(retriever.search("   ").is_empty());
    }

    #[test]
    fn test_empty_corpus_returns_nothing() {
        let retriever = ChunkRetriever::new(Vec::new());
        assert!(retriever.search("anything").is_empty());
    }

    #[test]
    fn test_search_is_deterministic() {
        let retriever = ChunkRetriever::new(corpus(&[
            "checkin from 3pm",
            "checkout by 10am",
            "wifi password 1234",
        ]));
        let first: Vec<(String, f32)> = retriever
            .search("checkin time")
            .into_iter()
            .map(|c| (c.text, c.score))
            .collect();
        let second: Vec<(String, f32)> = retriever
            .search("checkin time")
            .into_iter()
            .map(|c| (c.text, c.score))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_per_file_cap_limits_dominant_source() {
        // One source with 5 near-identical high-scoring chunks, another
        // source with one weaker but positive-scoring chunk.
        let retriever = ChunkRetriever::new(corpus(&[
            "[FILE:big.txt]\nwifi password alpha",
            "[FILE:big.txt]\nwifi password bravo",
            "[FILE:big.txt]\nwifi password charlie",
            "[FILE:big.txt]\nwifi password delta",
            "[FILE:big.txt]\nwifi password echo",
            "[FILE:other.txt]\nwifi router location",
        ]));

        let results = retriever.search_with_limits("wifi password", 3, 2);
        assert_eq!(results.len(), 3);

        let from_big = results
            .iter()
            .filter(|c| extract_source_id(&c.text) == "big.txt")
            .count();
        let from_other = results
            .iter()
            .filter(|c| extract_source_id(&c.text) == "other.txt")
            .count();
        assert_eq!(from_big, 2);
        assert_eq!(from_other, 1);
        assert!(results.last().unwrap().score > 0.0);
    }

    #[test]
    fn test_skipped_chunks_do_not_consume_top_k() {
        let retriever = ChunkRetriever::new(corpus(&[
            "[FILE:a.txt]\nparking spot one",
            "[FILE:a.txt]\nparking spot two",
            "[FILE:a.txt]\nparking spot three",
            "[FILE:b.txt]\nparking garage nearby",
        ]));

        let results = retriever.search_with_limits("parking", 3, 2);
        // Two from a.txt, the third a.txt chunk is skipped without
        // consuming a slot, then b.txt fills the third slot.
        assert_eq!(results.len(), 3);
        assert_eq!(
            results
                .iter()
                .filter(|c| extract_source_id(&c.text) == "b.txt")
                .count(),
            1
        );
    }

    #[test]
    fn test_tie_scores_keep_corpus_order() {
        // A query with no matching n-grams scores every chunk 0.0; the
        // ranking must then follow corpus order.
        let retriever = ChunkRetriever::new(corpus(&[
            "first entry text",
            "second entry text",
            "third entry text",
        ]));
        let results = retriever.search_with_limits("zzzzqqqq", 8, 8);
        assert_eq!(results.len(), 3);
        assert!(results[0].text.starts_with("first"));
        assert!(results[1].text.starts_with("second"));
        assert!(results[2].text.starts_with("third"));
        assert!(results.iter().all(|c| c.score == 0.0));
    }

    #[test]
    fn test_japanese_scenario_wifi_beats_parking() {
        let retriever = ChunkRetriever::new(corpus(&[
            "[FILE:a.txt]\nWiFiのパスワードは1234です",
            "[FILE:b.txt]\n駐車場はありません",
        ]));

        let results = retriever.search("パスワード");
        assert!(!results.is_empty());
        assert!(results[0].text.contains("WiFi"));
        assert!(results[0].score > 0.25);
    }
}
