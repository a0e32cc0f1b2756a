//! Report generator implementation
//! Author: kartik4091
//! Created: 2025-06-05

use std::path::Path;

use serde::Serialize;
use tokio::fs as async_fs;

use super::{AnalysisResponse, ReportError, ReportFormat, ReportFormatter};

/// A response paired with the input it was produced for
#[derive(Debug, Clone, Serialize)]
pub struct LabelledResponse {
    pub source: String,
    #[serde(flatten)]
    pub response: AnalysisResponse,
}

impl LabelledResponse {
    pub fn new(source: impl Into<String>, response: AnalysisResponse) -> Self {
        Self {
            source: source.into(),
            response,
        }
    }
}

/// Renders one or more analysis responses into a single document
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn render(items: &[LabelledResponse], format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Json => Self::format_as_json(items),
            ReportFormat::PlainText => Self::format_as_text(items),
            ReportFormat::Markdown => Self::format_as_markdown(items),
        }
    }

    /// Renders and writes the document to `path`
    pub async fn generate(
        items: &[LabelledResponse],
        format: ReportFormat,
        path: &Path,
    ) -> Result<(), ReportError> {
        let content = Self::render(items, format)?;
        async_fs::write(path, content).await?;
        Ok(())
    }

    /// A single input renders as the bare response object
    fn format_as_json(items: &[LabelledResponse]) -> Result<String, ReportError> {
        let rendered = match items {
            [single] => serde_json::to_string_pretty(&single.response),
            _ => serde_json::to_string_pretty(items),
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format_as_text(items: &[LabelledResponse]) -> Result<String, ReportError> {
        let sections = items
            .iter()
            .map(|item| ReportFormatter::to_text(&item.source, &item.response))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(sections.join("\n"))
    }

    fn format_as_markdown(items: &[LabelledResponse]) -> Result<String, ReportError> {
        let mut md = String::from("# Photo Metadata Privacy Report\n\n");
        for item in items {
            md.push_str(&ReportFormatter::to_markdown(&item.source, &item.response)?);
            md.push('\n');
        }
        Ok(md)
    }
}
