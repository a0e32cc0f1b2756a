//! Timestamp analyzer
//! Author: kartik4091
//! Created: 2025-06-05

use super::fields::FieldCategory;
use super::FieldAnalyzer;
use crate::types::{Category, ExtractedMetadata, Finding, MetadataMap, Severity};

/// Merges every present timestamp field into one finding
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalAnalyzer;

impl TemporalAnalyzer {
    pub fn analyze_exif(&self, exif: &MetadataMap) -> Option<Finding> {
        let found: Vec<String> = FieldCategory::Temporal
            .fields()
            .iter()
            .filter_map(|spec| {
                exif.get(spec.name)
                    .filter(|value| value.is_present())
                    .map(|value| format!("{}: {}", spec.description, value))
            })
            .collect();

        if found.is_empty() {
            return None;
        }

        Some(
            Finding::new("Timestamp Information", Severity::Medium, Category::Temporal, found.join("; "))
                .with_concern("Timestamps can establish patterns and reveal when/where photos were taken")
                .with_recommendation("Strip timestamp data for privacy"),
        )
    }
}

impl FieldAnalyzer for TemporalAnalyzer {
    fn name(&self) -> &'static str {
        "temporal"
    }

    fn analyze(&self, metadata: &ExtractedMetadata) -> Vec<Finding> {
        self.analyze_exif(&metadata.exif).into_iter().collect()
    }
}
