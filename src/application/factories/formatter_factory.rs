use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory selecting the report formatter for an output format
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use depinfo::application::dto::OutputFormat;
    /// use depinfo::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownReportFormatter::new()),
        }
    }

    /// Progress message shown while rendering in `format`
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering JSON application model...",
            OutputFormat::Markdown => "📝 Rendering Markdown application model...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ApplicationModelReportBuilder;
    use crate::dependency_info::domain::{
        ApplicationModelBuilder, ArtifactCoords, LaunchMode, ResolvedDependencyBuilder,
    };

    fn report() -> crate::application::read_models::ApplicationModelReport {
        let model = ApplicationModelBuilder::new(ResolvedDependencyBuilder::new(
            ArtifactCoords::jar("com.acme", "app", "1.0"),
        ));
        ApplicationModelReportBuilder::build(&model, LaunchMode::Normal)
    }

    #[test]
    fn test_json_formatter_is_selected() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&report())
            .unwrap();
        assert!(output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_markdown_formatter_is_selected() {
        let output = FormatterFactory::create(OutputFormat::Markdown)
            .format(&report())
            .unwrap();
        assert!(output.starts_with("# Application Model"));
    }

    #[test]
    fn test_progress_messages() {
        assert!(FormatterFactory::progress_message(OutputFormat::Json).contains("JSON"));
        assert!(FormatterFactory::progress_message(OutputFormat::Markdown).contains("Markdown"));
    }
}
