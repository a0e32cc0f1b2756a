use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk severity of a single finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Scoring weight used by the risk scorer
    pub const fn weight(self) -> u32 {
        match self {
            Severity::Critical => 10,
            Severity::High => 7,
            Severity::Medium => 4,
            Severity::Low => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Privacy category a finding belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Location,
    Temporal,
    Device,
    Personal,
    Network,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Location => "Location",
            Category::Temporal => "Temporal",
            Category::Device => "Device",
            Category::Personal => "Personal",
            Category::Network => "Network",
        };
        f.write_str(label)
    }
}

/// Overall risk bucket derived from the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Minimal => "MINIMAL",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// One discrete privacy-risk observation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub finding_type: String,
    pub risk: Severity,
    pub category: Category,
    pub data: String,
    pub concern: String,
    pub recommendation: String,
}

impl Finding {
    pub fn new(
        finding_type: impl Into<String>,
        risk: Severity,
        category: Category,
        data: impl Into<String>,
    ) -> Self {
        Self {
            finding_type: finding_type.into(),
            risk,
            category,
            data: data.into(),
            concern: String::new(),
            recommendation: String::new(),
        }
    }

    pub fn with_concern(mut self, concern: impl Into<String>) -> Self {
        self.concern = concern.into();
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = recommendation.into();
        self
    }
}
