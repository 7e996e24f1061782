//! Read models for report rendering
//!
//! View structs give formatters a flattened, serializable picture of the
//! reconciled application model.

pub mod application_model_report;
pub mod artifact_view;
pub mod report_builder;

pub use application_model_report::{ApplicationModelReport, ReportMetadata};
pub use artifact_view::{ArtifactView, DirectDependencyView};
pub use report_builder::ApplicationModelReportBuilder;
