//! Pattern matching over free text
//! Created: 2025-06-03 16:34:34 UTC
//! Author: kartik4091

use tracing::trace;

use super::{database::PatternDatabase, PiiKind};

/// Scans arbitrary text for PII signatures
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatcher {
    database: PatternDatabase,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matched kinds in declaration order. Empty text matches nothing.
    pub fn detect(&self, text: &str) -> Vec<PiiKind> {
        if text.is_empty() {
            return Vec::new();
        }
        let matches: Vec<PiiKind> = self
            .database
            .patterns()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(kind, _)| kind)
            .collect();
        trace!(?matches, "Pattern scan complete");
        matches
    }
}

/// Convenience wrapper returning pattern names
pub fn detect_personal_patterns(text: &str) -> Vec<&'static str> {
    PatternMatcher::new()
        .detect(text)
        .into_iter()
        .map(PiiKind::name)
        .collect()
}
