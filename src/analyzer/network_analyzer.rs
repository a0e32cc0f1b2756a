//! Network information analyzer
//! Author: kartik4091
//! Created: 2025-06-05

use super::fields::NETWORK_INDICATORS;
use super::FieldAnalyzer;
use crate::config::DEFAULT_NETWORK_SNIPPET_LENGTH;
use crate::types::{Category, ExtractedMetadata, Finding, MetadataMap, MetadataValue, Severity};
use crate::utils::char_prefix;

/// Searches every text value, at any nesting depth, for network indicators
#[derive(Debug, Clone, Copy)]
pub struct NetworkAnalyzer {
    snippet_length: usize,
}

impl NetworkAnalyzer {
    pub fn new(snippet_length: usize) -> Self {
        Self { snippet_length }
    }

    pub fn analyze_maps(&self, exif: &MetadataMap, info: &MetadataMap) -> Option<Finding> {
        let mut strings = Vec::new();
        flatten_map(exif, "", &mut strings);
        flatten_map(info, "", &mut strings);

        let hits: Vec<String> = strings
            .into_iter()
            .filter(|(_, text)| {
                let lower = text.to_lowercase();
                NETWORK_INDICATORS.iter().any(|indicator| lower.contains(indicator))
            })
            .map(|(path, text)| format!("{}: {}...", path, char_prefix(text, self.snippet_length)))
            .collect();

        if hits.is_empty() {
            return None;
        }

        Some(
            Finding::new("Network Information", Severity::High, Category::Network, hits.join("; "))
                .with_concern("Network information can reveal home/work networks and enable tracking")
                .with_recommendation("Remove all network-related metadata"),
        )
    }
}

impl Default for NetworkAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_SNIPPET_LENGTH)
    }
}

impl FieldAnalyzer for NetworkAnalyzer {
    fn name(&self) -> &'static str {
        "network"
    }

    fn analyze(&self, metadata: &ExtractedMetadata) -> Vec<Finding> {
        self.analyze_maps(&metadata.exif, &metadata.info).into_iter().collect()
    }
}

fn flatten_map<'a>(map: &'a MetadataMap, prefix: &str, out: &mut Vec<(String, &'a str)>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        flatten(value, path, out);
    }
}

/// Collects `(path, text)` pairs. Numbers are not text and are skipped.
fn flatten<'a>(value: &'a MetadataValue, path: String, out: &mut Vec<(String, &'a str)>) {
    match value {
        MetadataValue::Text(text) => out.push((path, text.as_str())),
        MetadataValue::Integer(_) | MetadataValue::Float(_) => {}
        MetadataValue::Sequence(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten(item, format!("{}[{}]", path, i), out);
            }
        }
        MetadataValue::Mapping(map) => flatten_map(map, &path, out),
    }
}
