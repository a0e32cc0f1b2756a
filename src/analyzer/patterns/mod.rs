//! PII pattern detection for free-text metadata
//! Author: kartik4091
//! Created: 2025-06-05

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod database;
pub mod matcher;

pub use database::PatternDatabase;
pub use matcher::{detect_personal_patterns, PatternMatcher};

/// Kinds of personally-identifying text the matcher recognises.
///
/// Declaration order is the order matches are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiKind {
    Email,
    Phone,
    SocialSecurity,
    CreditCard,
    Address,
}

impl PiiKind {
    pub const ALL: [PiiKind; 5] = [
        PiiKind::Email,
        PiiKind::Phone,
        PiiKind::SocialSecurity,
        PiiKind::CreditCard,
        PiiKind::Address,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PiiKind::Email => "email",
            PiiKind::Phone => "phone",
            PiiKind::SocialSecurity => "social_security",
            PiiKind::CreditCard => "credit_card",
            PiiKind::Address => "address",
        }
    }
}

impl fmt::Display for PiiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
