use crate::application::read_models::{ApplicationModelReport, ArtifactView, DirectDependencyView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const ARTIFACT_TABLE_HEADER: &str = "| Artifact | Version | Flags | Direct Dependencies |\n";
const ARTIFACT_TABLE_SEPARATOR: &str = "|----------|---------|-------|---------------------|\n";

const DIRECT_TABLE_HEADER: &str = "| Dependency | Version | Scope | Optional | Flags |\n";
const DIRECT_TABLE_SEPARATOR: &str = "|------------|---------|-------|----------|-------|\n";

const MISSING_FLAG: &str = "MISSING_FROM_APPLICATION";

/// MarkdownReportFormatter adapter rendering the report as Markdown tables
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for table cells
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn flags_cell(flags: &[String]) -> String {
        if flags.is_empty() {
            "-".to_string()
        } else {
            Self::escape_cell(&flags.join(", "))
        }
    }

    fn render_header(&self, output: &mut String, report: &ApplicationModelReport) {
        let app = &report.application;
        output.push_str(&format!(
            "# Application Model: {}:{}\n\n",
            Self::escape_cell(&app.group_id),
            Self::escape_cell(&app.artifact_id)
        ));
        output.push_str(&format!("- **Version:** {}\n", app.version));
        output.push_str(&format!("- **Launch mode:** {}\n", report.metadata.launch_mode));
        output.push_str(&format!(
            "- **Generated by:** {} {} at {}\n\n",
            report.metadata.tool_name, report.metadata.tool_version, report.metadata.timestamp
        ));
    }

    fn render_direct_table(&self, output: &mut String, direct: &[DirectDependencyView]) {
        if direct.is_empty() {
            output.push_str("*No direct dependencies*\n\n");
            return;
        }
        output.push_str(DIRECT_TABLE_HEADER);
        output.push_str(DIRECT_TABLE_SEPARATOR);
        for dep in direct {
            let mut name = format!("{}:{}", dep.group_id, dep.artifact_id);
            if !dep.classifier.is_empty() {
                name.push(':');
                name.push_str(&dep.classifier);
            }
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_cell(&name),
                Self::escape_cell(dep.version.as_deref().unwrap_or("-")),
                Self::escape_cell(&dep.scope),
                if dep.optional { "yes" } else { "no" },
                Self::flags_cell(&dep.flags)
            ));
        }
        output.push('\n');
    }

    fn render_application(&self, output: &mut String, app: &ArtifactView) {
        output.push_str("## Application Direct Dependencies\n\n");
        self.render_direct_table(output, &app.direct_dependencies);
    }

    fn render_inventory(&self, output: &mut String, dependencies: &[ArtifactView]) {
        output.push_str("## Resolved Artifacts\n\n");
        if dependencies.is_empty() {
            output.push_str("*No resolved dependencies*\n\n");
            return;
        }
        output.push_str(ARTIFACT_TABLE_HEADER);
        output.push_str(ARTIFACT_TABLE_SEPARATOR);
        for artifact in dependencies {
            output.push_str(&format!(
                "| {}:{} | {} | {} | {} |\n",
                Self::escape_cell(&artifact.group_id),
                Self::escape_cell(&artifact.artifact_id),
                Self::escape_cell(&artifact.version),
                Self::flags_cell(&artifact.flags),
                artifact.direct_dependencies.len()
            ));
        }
        output.push('\n');

        for artifact in dependencies
            .iter()
            .filter(|a| !a.direct_dependencies.is_empty())
        {
            output.push_str(&format!(
                "### Direct dependencies of {}\n\n",
                Self::escape_cell(&artifact.coords)
            ));
            self.render_direct_table(output, &artifact.direct_dependencies);
        }
    }

    fn render_missing(&self, output: &mut String, report: &ApplicationModelReport) {
        let missing: Vec<(&ArtifactView, &DirectDependencyView)> =
            std::iter::once(&report.application)
                .chain(report.dependencies.iter())
                .flat_map(|a| a.direct_dependencies.iter().map(move |d| (a, d)))
                .filter(|(_, d)| d.is_flagged(MISSING_FLAG))
                .collect();

        if missing.is_empty() {
            return;
        }

        output.push_str("## Missing From Application\n\n");
        output.push_str(
            "Declared dependencies with no counterpart in the resolved application graph.\n\n",
        );
        output.push_str("| Declared By | Dependency | Version |\n");
        output.push_str("|-------------|------------|---------|\n");
        for (owner, dep) in missing {
            output.push_str(&format!(
                "| {} | {}:{} | {} |\n",
                Self::escape_cell(&owner.coords),
                Self::escape_cell(&dep.group_id),
                Self::escape_cell(&dep.artifact_id),
                Self::escape_cell(dep.version.as_deref().unwrap_or("-"))
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &ApplicationModelReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);
        self.render_application(&mut output, &report.application);
        self.render_inventory(&mut output, &report.dependencies);
        self.render_missing(&mut output, report);
        Ok(output)
    }
}
