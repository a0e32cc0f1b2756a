//! Comprehensive analysis pipeline
//! Author: kartik4091
//! Created: 2025-06-05
//!
//! Stage-by-stage execution: extraction, the field analyzers in fixed order,
//! risk scoring and report assembly. Only extraction can fail; that failure
//! is folded into an error-carrying response by [`Pipeline::analyze`].

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument, trace, warn};

use crate::{
    analyzer::{default_analyzers, FieldAnalyzer, RiskAnalyzer},
    config::AnalyzerConfig,
    error::Result,
    metadata::MetadataExtractor,
    report::{AnalysisReport, AnalysisResponse, MetadataSummary},
    types::{ExtractedMetadata, Finding},
};

/// Result of analysing one item of a batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem<T> {
    pub path_or_id: T,
    pub response: AnalysisResponse,
}

/// Photo metadata privacy pipeline
pub struct Pipeline {
    config: AnalyzerConfig,
    extractor: MetadataExtractor,
    analyzers: Vec<Box<dyn FieldAnalyzer>>,
    scorer: RiskAnalyzer,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.analyzers.iter().map(|a| a.name()).collect();
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("analyzers", &names)
            .finish()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }
}

impl Pipeline {
    /// Creates a pipeline after validating the configuration
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            extractor: MetadataExtractor::new(&config),
            analyzers: default_analyzers(&config),
            scorer: RiskAnalyzer::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs the full analysis, folding extraction failure into the response
    pub fn analyze(&self, data: &[u8]) -> AnalysisResponse {
        match self.try_analyze(data) {
            Ok(report) => report.into(),
            Err(e) => {
                warn!(error = %e, "Analysis aborted");
                AnalysisResponse::Error { error: e.to_string() }
            }
        }
    }

    /// Runs the full analysis, propagating extraction failure
    #[instrument(skip(self, data), fields(len = data.len()))]
    pub fn try_analyze(&self, data: &[u8]) -> Result<AnalysisReport> {
        let metadata = self.extractor.extract(data)?;
        let findings = self.run_analyzers(&metadata);
        let risk_assessment = self.scorer.assess(&findings);

        info!(
            findings = findings.len(),
            score = risk_assessment.score,
            level = %risk_assessment.level,
            "Analysis complete"
        );

        Ok(AnalysisReport {
            analysis_timestamp: chrono::Local::now().to_rfc3339(),
            risk_assessment,
            findings,
            metadata_summary: MetadataSummary::from(&metadata),
            exif_data: metadata.exif,
        })
    }

    /// Runs every analyzer in order and concatenates their findings
    pub fn run_analyzers(&self, metadata: &ExtractedMetadata) -> Vec<Finding> {
        let mut findings = Vec::new();
        for analyzer in &self.analyzers {
            let produced = analyzer.analyze(metadata);
            trace!(analyzer = analyzer.name(), count = produced.len(), "Analyzer finished");
            findings.extend(produced);
        }
        findings
    }

    /// Analyses many buffers in parallel, preserving input order
    pub fn analyze_batch<I, T, B>(&self, items: I) -> Vec<BatchItem<T>>
    where
        I: IntoIterator<Item = (T, B)>,
        T: Send,
        B: AsRef<[u8]> + Send,
    {
        let items: Vec<(T, B)> = items.into_iter().collect();
        debug!(count = items.len(), "Starting batch analysis");
        items
            .into_par_iter()
            .map(|(path_or_id, bytes)| BatchItem {
                response: self.analyze(bytes.as_ref()),
                path_or_id,
            })
            .collect()
    }
}
