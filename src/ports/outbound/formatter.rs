use crate::application::read_models::ApplicationModelReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the application model report
///
/// This port abstracts the output format (JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ApplicationModelReport) -> Result<String>;
}
