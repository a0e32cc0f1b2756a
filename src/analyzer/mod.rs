//! Privacy Analyzer Module
//! Author: kartik4091
//! Created: 2025-06-03 08:36:15 UTC
//!
//! Field analyzers turn an extracted metadata mapping into findings. Each
//! analyzer is a pure function of its input: missing fields and failed
//! conversions simply produce no finding, so none of them can fail.

use crate::config::AnalyzerConfig;
use crate::types::{ExtractedMetadata, Finding};

pub mod content_analyzer;
pub mod device_analyzer;
pub mod fields;
pub mod gps_analyzer;
pub mod network_analyzer;
pub mod patterns;
pub mod risk_analyzer;
pub mod temporal_analyzer;

pub use self::{
    content_analyzer::ContentAnalyzer,
    device_analyzer::DeviceAnalyzer,
    fields::{FieldCategory, FieldSpec},
    gps_analyzer::{convert_gps_to_decimal, locate, GeoLocation, GpsAnalyzer},
    network_analyzer::NetworkAnalyzer,
    risk_analyzer::{RiskAnalyzer, RiskAssessment},
    temporal_analyzer::TemporalAnalyzer,
};

/// Core analyzer trait implemented by every field classifier
pub trait FieldAnalyzer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Classifies the extracted metadata into zero or more findings
    fn analyze(&self, metadata: &ExtractedMetadata) -> Vec<Finding>;
}

/// The analyzers of a comprehensive analysis, in execution order
pub fn default_analyzers(config: &AnalyzerConfig) -> Vec<Box<dyn FieldAnalyzer>> {
    vec![
        Box::new(GpsAnalyzer),
        Box::new(TemporalAnalyzer),
        Box::new(DeviceAnalyzer),
        Box::new(ContentAnalyzer::new(config.max_text_length)),
        Box::new(NetworkAnalyzer::new(config.network_snippet_length)),
    ]
}
