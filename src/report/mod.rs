//! Report model and rendering
//! Author: kartik4091
//! Created: 2025-06-05

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::RiskAssessment;
use crate::types::{ExtractedMetadata, Finding, MetadataMap};

pub mod formatter;
pub mod generator;

pub use formatter::ReportFormatter;
pub use generator::{LabelledResponse, ReportGenerator};

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Json,
    PlainText,
    Markdown,
}

/// Image-level facts echoed into the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSummary {
    pub format: String,
    /// `[width, height]` in pixels
    pub size: (u32, u32),
    pub mode: String,
    pub total_metadata_fields: usize,
}

impl From<&ExtractedMetadata> for MetadataSummary {
    fn from(metadata: &ExtractedMetadata) -> Self {
        Self {
            format: metadata.format.clone(),
            size: metadata.size,
            mode: metadata.mode.clone(),
            total_metadata_fields: metadata.total_fields(),
        }
    }
}

/// Outcome of one comprehensive analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// RFC 3339 local time the report was assembled
    pub analysis_timestamp: String,
    pub risk_assessment: RiskAssessment,
    pub findings: Vec<Finding>,
    pub metadata_summary: MetadataSummary,
    /// The raw tag mapping the findings were derived from
    pub exif_data: MetadataMap,
}

/// Either a full report or the single extraction failure that prevented it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Report(Box<AnalysisReport>),
    Error { error: String },
}

impl AnalysisResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisResponse::Error { .. })
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisResponse::Report(report) => Some(&**report),
            AnalysisResponse::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisResponse::Report(_) => None,
            AnalysisResponse::Error { error } => Some(error),
        }
    }
}

impl From<AnalysisReport> for AnalysisResponse {
    fn from(report: AnalysisReport) -> Self {
        AnalysisResponse::Report(Box::new(report))
    }
}

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Format error: {0}")]
    FormatError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
