//! Location (GPS) analyzer
//! Author: kartik4091
//! Created: 2025-06-05

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fields::FieldCategory;
use super::FieldAnalyzer;
use crate::types::{Category, ExtractedMetadata, Finding, MetadataMap, MetadataValue, Severity, GPS_INFO_KEY};

/// Zoom level of generated map links
const MAP_ZOOM: u8 = 15;

/// Converts a degrees/minutes/seconds triple to signed decimal degrees.
///
/// Returns `None` for anything other than three finite numeric components.
/// South and West references negate the result.
pub fn convert_gps_to_decimal(coordinate: &MetadataValue, reference: &str) -> Option<f64> {
    let parts = coordinate.as_sequence()?;
    let [degrees, minutes, seconds] = parts else {
        return None;
    };
    let decimal = degrees.as_f64()? + minutes.as_f64()? / 60.0 + seconds.as_f64()? / 3600.0;
    if !decimal.is_finite() {
        return None;
    }
    match reference.trim() {
        "S" | "W" => Some(-decimal),
        _ => Some(decimal),
    }
}

/// A decimal latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    /// OpenStreetMap link centred on the location
    pub fn map_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/?mlat={lat:.6}&mlon={lon:.6}#map={zoom}/{lat:.6}/{lon:.6}",
            lat = self.latitude,
            lon = self.longitude,
            zoom = MAP_ZOOM
        )
    }
}

/// Resolves the decimal location from a tag mapping, if both coordinates convert
pub fn locate(exif: &MetadataMap) -> Option<GeoLocation> {
    let gps = exif.get(GPS_INFO_KEY)?.as_mapping()?;
    let latitude = gps.get("GPSLatitude")?;
    let longitude = gps.get("GPSLongitude")?;

    let latitude = convert_gps_to_decimal(latitude, reference(gps, "GPSLatitudeRef", "N"))?;
    let longitude = convert_gps_to_decimal(longitude, reference(gps, "GPSLongitudeRef", "E"))?;
    Some(GeoLocation { latitude, longitude })
}

fn reference<'a>(gps: &'a MetadataMap, key: &str, default: &'a str) -> &'a str {
    gps.get(key).and_then(MetadataValue::as_text).unwrap_or(default)
}

/// Emits coordinate, altitude and GPS timestamp findings
#[derive(Debug, Clone, Copy, Default)]
pub struct GpsAnalyzer;

impl GpsAnalyzer {
    pub fn analyze_exif(&self, exif: &MetadataMap) -> Vec<Finding> {
        let mut findings = Vec::new();
        let Some(gps) = exif.get(GPS_INFO_KEY).and_then(MetadataValue::as_mapping) else {
            return findings;
        };

        if gps.contains_key("GPSLatitude") && gps.contains_key("GPSLongitude") {
            match locate(exif) {
                Some(location) => findings.push(
                    Finding::new(
                        "GPS Coordinates",
                        Severity::Critical,
                        Category::Location,
                        format!(
                            "Latitude: {:.6}, Longitude: {:.6}",
                            location.latitude, location.longitude
                        ),
                    )
                    .with_concern("Exact location can reveal home, workplace, or personal places")
                    .with_recommendation("Remove GPS data before sharing"),
                ),
                None => debug!("GPS coordinates present but not convertible"),
            }
        }

        if let Some(altitude) = gps.get("GPSAltitude") {
            findings.push(
                Finding::new(
                    "GPS Altitude",
                    Severity::Medium,
                    Category::Location,
                    format!("Altitude: {}", altitude),
                )
                .with_concern("Altitude data can help pinpoint exact location")
                .with_recommendation("Consider removing altitude information"),
            );
        }

        for spec in FieldCategory::GpsTimestamp.fields() {
            if let Some(value) = gps.get(spec.name) {
                findings.push(
                    Finding::new("GPS Timestamp", Severity::High, Category::Temporal, value.to_string())
                        .with_concern("GPS timestamp reveals when you were at this location")
                        .with_recommendation("Remove GPS timestamps"),
                );
            }
        }

        findings
    }
}

impl FieldAnalyzer for GpsAnalyzer {
    fn name(&self) -> &'static str {
        "gps"
    }

    fn analyze(&self, metadata: &ExtractedMetadata) -> Vec<Finding> {
        self.analyze_exif(&metadata.exif)
    }
}
