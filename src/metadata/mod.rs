//! Metadata extraction module
//! Created: 2025-06-03 15:05:27 UTC
//! Author: kartik4091
//!
//! Turns raw image bytes into the field mappings consumed by the analyzers:
//! embedded tag data (with GPS nested under `GPSInfo`) and container-level
//! info such as JFIF headers and PNG text chunks.

pub mod container;
pub mod extractor;
pub mod tags;

pub use extractor::MetadataExtractor;
