//! Document loading and corpus assembly
//!
//! Walks a documents directory, extracts text from PDFs and TXT files,
//! prefixes each document with a `[FILE:<name>]` provenance header, and
//! splits everything into retrieval chunks. Every failure degrades to
//! "document absent": a missing directory or an unreadable file yields an
//! empty or partial corpus, never an error.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::ingest::chunker::{split_into_chunks, DEFAULT_MAX_CHARS};
use crate::ingest::extract::extract_pdf_text;

/// Load every readable document under `dir` into an ordered chunk corpus.
///
/// PDFs are ingested first, then TXT files, each in sorted path order so a
/// reload over the same directory reproduces the same corpus. The
/// provenance header is injected once per document, ahead of chunking, so
/// it lands in that document's first chunk.
pub fn load_documents_to_chunks(dir: &Path) -> Vec<String> {
    let mut chunks = Vec::new();

    for path in files_with_extension(dir, "pdf") {
        if let Some(text) = read_pdf(&path) {
            let prefixed = format!("[FILE:{}]\n{}", file_name(&path), text);
            chunks.extend(split_into_chunks(&prefixed, DEFAULT_MAX_CHARS));
        }
    }

    for path in files_with_extension(dir, "txt") {
        if let Some(text) = read_text_with_fallback(&path) {
            let prefixed = format!("[FILE:{}]\n{}", file_name(&path), text);
            chunks.extend(split_into_chunks(&prefixed, DEFAULT_MAX_CHARS));
        }
    }

    chunks
}

/// List the file names that contributed text to the corpus, in load order.
pub fn loaded_file_names(dir: &Path) -> Vec<String> {
    let mut names = Vec::new();

    for path in files_with_extension(dir, "pdf") {
        if read_pdf(&path).is_some() {
            names.push(file_name(&path));
        }
    }
    for path in files_with_extension(dir, "txt") {
        if read_text_with_fallback(&path).is_some() {
            names.push(file_name(&path));
        }
    }

    names
}

/// Sorted recursive listing of files with the given extension.
/// A missing or unreadable directory yields an empty list.
fn files_with_extension(dir: &Path, ext: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|s| s.to_str())
                .map(|s| s.eq_ignore_ascii_case(ext))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    paths
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_pdf(path: &Path) -> Option<String> {
    match extract_pdf_text(path) {
        Ok(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    }
}

/// Read a text file trying strict UTF-8 first, then CP932 (Shift_JIS, for
/// documents saved on Japanese Windows), then lossy UTF-8 as a last resort.
fn read_text_with_fallback(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;

    if let Ok(text) = String::from_utf8(bytes.clone()) {
        return non_empty(text);
    }

    let (decoded, _, had_errors) = encoding_rs::SHIFT_JIS.decode(&bytes);
    if !had_errors {
        return non_empty(decoded.into_owned());
    }

    non_empty(String::from_utf8_lossy(&bytes).into_owned())
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
