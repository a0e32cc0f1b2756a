//! Risk scorer for privacy findings
//! Author: kartik4091
//! Created: 2025-06-03 04:17:58 UTC
//! Aggregates the severity of individual findings into an overall score,
//! risk level and human-readable summary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::types::{Finding, RiskLevel, Severity};

const CRITICAL_THRESHOLD: u32 = 15;
const HIGH_THRESHOLD: u32 = 10;
const MEDIUM_THRESHOLD: u32 = 5;

const NO_RISK_SUMMARY: &str = "No privacy risks detected";

/// Aggregate outcome of scoring a findings sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    pub summary: String,
    pub total_findings: usize,
}

/// Stateless scorer over severity weights
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAnalyzer;

impl RiskAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Maps an aggregate score onto a risk level
    pub fn level_for_score(score: u32) -> RiskLevel {
        if score >= CRITICAL_THRESHOLD {
            RiskLevel::Critical
        } else if score >= HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else if score > 0 {
            RiskLevel::Low
        } else {
            RiskLevel::Minimal
        }
    }

    #[instrument(skip_all, fields(findings = findings.len()))]
    pub fn assess(&self, findings: &[Finding]) -> RiskAssessment {
        if findings.is_empty() {
            return RiskAssessment {
                score: 0,
                level: RiskLevel::Minimal,
                summary: NO_RISK_SUMMARY.to_string(),
                total_findings: 0,
            };
        }

        let score: u32 = findings.iter().map(|f| f.risk.weight()).sum();
        let level = Self::level_for_score(score);
        debug!(score, %level, "Risk scored");

        RiskAssessment {
            score,
            level,
            summary: Self::summarize(findings),
            total_findings: findings.len(),
        }
    }

    /// "Found 1 critical risk item, 2 high risk items", heaviest severity first
    fn summarize(findings: &[Finding]) -> String {
        let mut counts: BTreeMap<Severity, usize> = BTreeMap::new();
        for finding in findings {
            *counts.entry(finding.risk).or_default() += 1;
        }

        let parts: Vec<String> = counts
            .iter()
            .rev()
            .map(|(severity, &count)| {
                format!(
                    "{} {} risk item{}",
                    count,
                    severity.as_str().to_lowercase(),
                    if count > 1 { "s" } else { "" }
                )
            })
            .collect();
        format!("Found {}", parts.join(", "))
    }
}
