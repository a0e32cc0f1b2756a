//! Device fingerprint analyzer
//! Author: kartik4091
//! Created: 2025-06-05

use tracing::trace;

use super::fields::{FieldCategory, DEVICE_IDENTIFIER_HINTS};
use super::FieldAnalyzer;
use crate::types::{Category, ExtractedMetadata, Finding, MetadataMap, Severity};

/// Collects hardware and software identifiers into a single finding.
///
/// The finding is HIGH when a serial number or host computer name is among
/// the matched fields, otherwise LOW.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceAnalyzer;

impl DeviceAnalyzer {
    pub fn analyze_exif(&self, exif: &MetadataMap) -> Option<Finding> {
        let mut identifying = false;
        let mut entries = Vec::new();

        for spec in FieldCategory::Device.fields() {
            let Some(value) = exif.get(spec.name).filter(|v| v.is_present()) else {
                continue;
            };
            let description = spec.description.to_lowercase();
            identifying |= DEVICE_IDENTIFIER_HINTS.iter().any(|hint| description.contains(hint));
            entries.push(format!("{}: {}", spec.description, value));
        }

        if entries.is_empty() {
            return None;
        }
        trace!(fields = entries.len(), identifying, "Device fields collected");

        let risk = if identifying { Severity::High } else { Severity::Low };
        Some(
            Finding::new("Device Information", risk, Category::Device, entries.join("; "))
                .with_concern("Device info enables fingerprinting and tracking across images")
                .with_recommendation("Remove device-specific identifiers"),
        )
    }
}

impl FieldAnalyzer for DeviceAnalyzer {
    fn name(&self) -> &'static str {
        "device"
    }

    fn analyze(&self, metadata: &ExtractedMetadata) -> Vec<Finding> {
        self.analyze_exif(&metadata.exif).into_iter().collect()
    }
}
