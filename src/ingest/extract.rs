//! PDF text extraction
//!
//! Shells out to the `pdftotext` binary (poppler). Extraction strategies
//! are tried in order and the first one producing non-blank text wins;
//! a document that defeats every strategy contributes nothing to the
//! corpus rather than failing the load.

use std::path::Path;
use std::process::Command;

use crate::errors::{GuestDeskError, Result};

/// An ordered extraction attempt: a label plus the pdftotext flags to try.
struct ExtractionStrategy {
    name: &'static str,
    args: &'static [&'static str],
}

/// Strategies in preference order. `-layout` preserves column structure,
/// which keeps house-rules tables readable; `-raw` recovers text from PDFs
/// whose layout analysis fails.
const STRATEGIES: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        name: "pdftotext-layout",
        args: &["-layout", "-enc", "UTF-8"],
    },
    ExtractionStrategy {
        name: "pdftotext-raw",
        args: &["-raw", "-enc", "UTF-8"],
    },
];

/// Extract plain text from a PDF file.
///
/// Returns the first non-blank result across the strategy chain, or an
/// error describing why every strategy failed.
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut last_reason = String::from("no extraction strategy available");

    for strategy in STRATEGIES {
        match run_pdftotext(path, strategy.args) {
            Ok(text) if !text.trim().is_empty() => return Ok(text),
            Ok(_) => {
                last_reason = format!("{} produced no text", strategy.name);
            }
            Err(reason) => {
                last_reason = format!("{}: {}", strategy.name, reason);
            }
        }
    }

    Err(GuestDeskError::Extraction {
        file,
        reason: last_reason,
    })
}

fn run_pdftotext(path: &Path, args: &[&str]) -> std::result::Result<String, String> {
    let output = Command::new("pdftotext")
        .args(args)
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| format!("failed to run pdftotext (is poppler installed?): {}", e))?;

    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).trim().to_string());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
