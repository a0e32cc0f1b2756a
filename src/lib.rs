//! Main Library File for Photo Metadata Privacy Analysis
//! Extracts embedded metadata from images and classifies every field that
//! can leak personal information: location, time, device identity,
//! free-text PII and network details.

// Configuration and Core Pipeline
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Stage 1: Metadata Extraction
pub mod metadata;

// Stage 2: Field Analysis & Risk Scoring
pub mod analyzer;

// Stage 3: Report Generation
pub mod report;

// Shared Utilities
pub mod utils;

pub use analyzer::{
    convert_gps_to_decimal,
    locate,
    patterns::{detect_personal_patterns, PatternMatcher, PiiKind},
    FieldAnalyzer,
    GeoLocation,
    RiskAnalyzer,
    RiskAssessment,
};
pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use metadata::MetadataExtractor;
pub use pipeline::{BatchItem, Pipeline};
pub use report::{
    AnalysisReport,
    AnalysisResponse,
    LabelledResponse,
    MetadataSummary,
    ReportError,
    ReportFormat,
    ReportFormatter,
    ReportGenerator,
};
pub use types::{
    Category,
    ExtractedMetadata,
    Finding,
    MetadataMap,
    MetadataValue,
    RiskLevel,
    Severity,
};
pub use utils::Logger;

/// Analyses one image with the default configuration
pub fn analyze(data: &[u8]) -> AnalysisResponse {
    Pipeline::default().analyze(data)
}

/// Analyses many images in parallel with the default configuration
pub fn analyze_batch<I, T, B>(items: I) -> Vec<BatchItem<T>>
where
    I: IntoIterator<Item = (T, B)>,
    T: Send,
    B: AsRef<[u8]> + Send,
{
    Pipeline::default().analyze_batch(items)
}
