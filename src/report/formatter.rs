//! Report formatter implementation
//! Author: kartik4091
//! Created: 2025-06-05

use std::fmt::Write;

use super::{AnalysisReport, AnalysisResponse, ReportError};
use crate::analyzer::locate;

/// Formats a single analysis response as human-readable text
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn to_text(source: &str, response: &AnalysisResponse) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "Image: {}", source).map_err(fmt_error)?;
        match response {
            AnalysisResponse::Error { error } => {
                writeln!(out, "Error: {}", error).map_err(fmt_error)?;
            }
            AnalysisResponse::Report(report) => Self::text_body(&mut out, report).map_err(fmt_error)?,
        }
        Ok(out)
    }

    pub fn to_markdown(source: &str, response: &AnalysisResponse) -> Result<String, ReportError> {
        let mut md = String::new();
        writeln!(md, "## {}\n", source).map_err(fmt_error)?;
        match response {
            AnalysisResponse::Error { error } => {
                writeln!(md, "**Error**: {}", error).map_err(fmt_error)?;
            }
            AnalysisResponse::Report(report) => Self::markdown_body(&mut md, report).map_err(fmt_error)?,
        }
        Ok(md)
    }

    fn text_body(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        let summary = &report.metadata_summary;
        let risk = &report.risk_assessment;
        writeln!(
            out,
            "Format: {} {}x{} ({}), {} metadata fields",
            summary.format, summary.size.0, summary.size.1, summary.mode, summary.total_metadata_fields
        )?;
        writeln!(out, "Analyzed: {}", report.analysis_timestamp)?;
        writeln!(out, "Risk: {} (score {}) - {}", risk.level, risk.score, risk.summary)?;
        if let Some(location) = locate(&report.exif_data) {
            writeln!(out, "Map: {}", location.map_url())?;
        }

        if report.findings.is_empty() {
            return Ok(());
        }
        writeln!(out, "\nFindings:")?;
        for finding in &report.findings {
            writeln!(out, "  [{}] {} ({})", finding.risk, finding.finding_type, finding.category)?;
            writeln!(out, "      {}", finding.data)?;
            writeln!(out, "      Concern: {}", finding.concern)?;
            writeln!(out, "      Recommendation: {}", finding.recommendation)?;
        }
        Ok(())
    }

    fn markdown_body(md: &mut String, report: &AnalysisReport) -> std::fmt::Result {
        let summary = &report.metadata_summary;
        let risk = &report.risk_assessment;
        writeln!(md, "- **Risk Level**: {}", risk.level)?;
        writeln!(md, "- **Score**: {}", risk.score)?;
        writeln!(md, "- **Summary**: {}", risk.summary)?;
        writeln!(
            md,
            "- **Image**: {} {}x{} ({}), {} metadata fields",
            summary.format, summary.size.0, summary.size.1, summary.mode, summary.total_metadata_fields
        )?;
        writeln!(md, "- **Analyzed**: {}", report.analysis_timestamp)?;
        if let Some(location) = locate(&report.exif_data) {
            writeln!(md, "- **Location**: [view on map]({})", location.map_url())?;
        }

        if report.findings.is_empty() {
            return Ok(());
        }
        writeln!(md, "\n| Risk | Type | Category | Data | Recommendation |")?;
        writeln!(md, "|------|------|----------|------|----------------|")?;
        for finding in &report.findings {
            writeln!(
                md,
                "| {} | {} | {} | {} | {} |",
                finding.risk,
                finding.finding_type,
                finding.category,
                escape_cell(&finding.data),
                escape_cell(&finding.recommendation)
            )?;
        }
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn fmt_error(err: std::fmt::Error) -> ReportError {
    ReportError::FormatError(err.to_string())
}
