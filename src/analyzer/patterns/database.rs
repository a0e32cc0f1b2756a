//! Built-in PII signature database
//! Created: 2025-06-03 16:38:08 UTC
//! Author: kartik4091

use lazy_static::lazy_static;
use regex::Regex;

use super::PiiKind;

/// Source expression for each pattern kind. Matching is case-insensitive.
///
/// The phone expression is intentionally broad: any run of 7 to 15 digits
/// matches, so long serial-like numbers in free text are reported as phones.
pub const fn expression(kind: PiiKind) -> &'static str {
    match kind {
        PiiKind::Email => r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
        PiiKind::Phone => r"[\+]?[1-9]?[0-9]{7,15}",
        PiiKind::SocialSecurity => r"\b\d{3}-\d{2}-\d{4}\b",
        PiiKind::CreditCard => r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b",
        PiiKind::Address => {
            r"\b\d+\s+[A-Za-z0-9\s,]+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr)\b"
        }
    }
}

lazy_static! {
    static ref COMPILED: Vec<(PiiKind, Regex)> = PiiKind::ALL
        .iter()
        .map(|&kind| {
            let regex = Regex::new(&format!("(?i){}", expression(kind)))
                .expect("built-in PII expression is valid");
            (kind, regex)
        })
        .collect();
}

/// Read-only view over the compiled signatures, shared by every matcher
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternDatabase;

impl PatternDatabase {
    pub fn patterns(&self) -> impl Iterator<Item = (PiiKind, &'static Regex)> {
        COMPILED.iter().map(|(kind, regex)| (*kind, regex))
    }
}
