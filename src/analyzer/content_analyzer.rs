//! Free-text / user content analyzer
//! Author: kartik4091
//! Created: 2025-06-05

use tracing::debug;

use super::fields::{FieldCategory, FieldSpec, OWNERSHIP_HINTS};
use super::patterns::{PatternMatcher, PiiKind};
use super::FieldAnalyzer;
use crate::config::DEFAULT_MAX_TEXT_LENGTH;
use crate::types::{Category, ExtractedMetadata, Finding, MetadataMap, MetadataValue, Severity};
use crate::utils::truncate_chars;

/// Scans free-text fields for personal information, one finding per field
#[derive(Debug, Clone)]
pub struct ContentAnalyzer {
    max_text_length: usize,
    matcher: PatternMatcher,
}

impl ContentAnalyzer {
    pub fn new(max_text_length: usize) -> Self {
        Self {
            max_text_length,
            matcher: PatternMatcher::new(),
        }
    }

    /// Checks the tag mapping first, then the container info
    pub fn analyze_fields(&self, exif: &MetadataMap, info: &MetadataMap) -> Vec<Finding> {
        FieldCategory::UserContent
            .fields()
            .iter()
            .filter_map(|spec| {
                let value = lookup(exif, spec.name).or_else(|| lookup(info, spec.name))?;
                self.classify(spec, &value.to_string())
            })
            .collect()
    }

    fn classify(&self, spec: &FieldSpec, content: &str) -> Option<Finding> {
        if content.trim().is_empty() {
            return None;
        }

        let matches = self.matcher.detect(content);
        let field = spec.name.to_lowercase();
        let owned = OWNERSHIP_HINTS.iter().any(|hint| field.contains(hint));
        let risk = if !matches.is_empty() || owned {
            Severity::High
        } else {
            Severity::Medium
        };
        if !matches.is_empty() {
            debug!(field = spec.name, ?matches, "Personal patterns detected");
        }

        let mut concern = format!("{} may contain personal information", spec.description);
        if !matches.is_empty() {
            let names: Vec<&str> = matches.iter().copied().map(PiiKind::name).collect();
            concern.push_str(&format!(". Detected: {}", names.join(", ")));
        }

        Some(
            Finding::new(
                "User Content",
                risk,
                Category::Personal,
                format!("{}: {}", spec.description, truncate_chars(content, self.max_text_length)),
            )
            .with_concern(concern)
            .with_recommendation("Review and remove personal information from metadata fields"),
        )
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_LENGTH)
    }
}

fn lookup<'a>(map: &'a MetadataMap, name: &str) -> Option<&'a MetadataValue> {
    map.get(name).filter(|value| value.is_present())
}

impl FieldAnalyzer for ContentAnalyzer {
    fn name(&self) -> &'static str {
        "user_content"
    }

    fn analyze(&self, metadata: &ExtractedMetadata) -> Vec<Finding> {
        self.analyze_fields(&metadata.exif, &metadata.info)
    }
}
