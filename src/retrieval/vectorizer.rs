//! Character n-gram TF-IDF index
//!
//! Vectorizes chunks as frequency counts of character 3-, 4-, and 5-grams,
//! weighted by smoothed inverse document frequency and L2-normalized per
//! document. Character n-grams need no tokenizer, so Japanese and other
//! unsegmented text scores the same way English does.

use std::collections::HashMap;

/// Inclusive n-gram length range
const NGRAM_MIN: usize = 3;
const NGRAM_MAX: usize = 5;

/// A sparse, L2-normalized term-weight vector, sorted by term id.
#[derive(Debug, Clone, Default)]
pub struct SparseVector(Vec<(usize, f32)>);

impl SparseVector {
    /// Dot product with another sparse vector. Both sides are normalized,
    /// so this is cosine similarity, in [0, 1] for non-negative weights.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.0.len() && j < other.0.len() {
            match self.0[i].0.cmp(&other.0[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.0[i].1 * other.0[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// True when the vector has no terms (nothing matched the vocabulary).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// TF-IDF index over a fixed chunk corpus.
///
/// The vocabulary and IDF weights are derived from the corpus once at build
/// time and never updated incrementally; a corpus change means a full
/// rebuild. Vector `i` always corresponds to chunk `i`.
pub struct NgramTfIdfIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    doc_vectors: Vec<SparseVector>,
}

impl NgramTfIdfIndex {
    /// Build an index from a chunk corpus.
    ///
    /// An empty corpus yields a valid empty index: every query against it
    /// scores nothing.
    pub fn fit(chunks: &[String]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_counts: Vec<HashMap<usize, f32>> = Vec::with_capacity(chunks.len());
        let mut df: Vec<u32> = Vec::new();

        for chunk in chunks {
            let mut counts: HashMap<usize, f32> = HashMap::new();
            for gram in ngrams(chunk) {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(gram).or_insert(next_id);
                if id == df.len() {
                    df.push(0);
                }
                let count = counts.entry(id).or_insert(0.0);
                if *count == 0.0 {
                    df[id] += 1;
                }
                *count += 1.0;
            }
            doc_counts.push(counts);
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1
        let n_docs = chunks.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n_docs) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let doc_vectors = doc_counts
            .into_iter()
            .map(|counts| weigh_and_normalize(counts, &idf))
            .collect();

        NgramTfIdfIndex {
            vocabulary,
            idf,
            doc_vectors,
        }
    }

    /// Vectorize a query against the fitted vocabulary. N-grams unseen at
    /// fit time are silently ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for gram in ngrams(text) {
            if let Some(&id) = self.vocabulary.get(&gram) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }
        weigh_and_normalize(counts, &self.idf)
    }

    /// Cosine similarity of a query vector against every document vector,
    /// aligned index-for-index with the corpus the index was fitted on.
    pub fn similarities(&self, query: &SparseVector) -> Vec<f32> {
        self.doc_vectors.iter().map(|doc| query.dot(doc)).collect()
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.doc_vectors.len()
    }

    /// True when no documents are indexed
    pub fn is_empty(&self) -> bool {
        self.doc_vectors.is_empty()
    }

    /// Vocabulary size (distinct n-grams seen at fit time)
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

/// All contiguous character n-grams of lengths 3..=5, over raw characters
/// including whitespace and punctuation, case-sensitive.
fn ngrams(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut grams = Vec::new();
    for n in NGRAM_MIN..=NGRAM_MAX {
        if chars.len() < n {
            break;
        }
        for window in chars.windows(n) {
            grams.push(window.iter().collect());
        }
    }
    grams
}

fn weigh_and_normalize(counts: HashMap<usize, f32>, idf: &[f32]) -> SparseVector {
    let mut terms: Vec<(usize, f32)> = counts
        .into_iter()
        .map(|(id, tf)| (id, tf * idf[id]))
        .collect();
    terms.sort_by_key(|&(id, _)| id);

    let norm: f32 = terms.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for term in &mut terms {
            term.1 /= norm;
        }
    }
    SparseVector(terms)
}
