//! Report rendering

use resample_core::ScenarioReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable block with a tab-separated return matrix
    #[default]
    Text,
    /// One JSON object per report
    Json,
}

/// Render a report in the requested format
pub fn render_report(report: &ScenarioReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}
