//! depinfo - direct-dependency reconciliation for JVM application models
//!
//! This library reads a build model exported by the build tool, collects the
//! dependencies each module declares (from build scripts for workspace
//! projects, from effective POMs for external modules) and records them as
//! direct dependencies on the resolved application graph. It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_info`): Pure reconciliation logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depinfo::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let settings = RepositorySettings {
//!     remote_repositories: vec![MAVEN_CENTRAL_URL.to_string()],
//!     ..Default::default()
//! };
//! let locator = LocatorFactory::create(&settings)?;
//! let pom_resolver = PomModelResolver::new(locator, EffectiveModelBuilder::new());
//!
//! // Create use case
//! let use_case = BuildApplicationModelUseCase::new(
//!     JsonBuildModelReader::new(),
//!     pom_resolver,
//!     ScopePolicy::default(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = ApplicationModelRequest::new(PathBuf::from("build-model.json"), None);
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let report = ApplicationModelReportBuilder::build(&response.model, response.launch_mode);
//! let output = JsonReportFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_info;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonBuildModelReader, LocalRepositoryLocator, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
    pub use crate::adapters::outbound::maven::{ChainedPomLocator, EffectiveModelBuilder};
    pub use crate::adapters::outbound::network::{
        CachingPomLocator, RemoteRepositoryLocator, MAVEN_CENTRAL_URL,
    };
    pub use crate::application::dto::{ApplicationModelRequest, ApplicationModelResponse};
    pub use crate::application::factories::{LocatorFactory, RepositorySettings};
    pub use crate::application::read_models::{
        ApplicationModelReport, ApplicationModelReportBuilder,
    };
    pub use crate::application::services::{DependencyInfoCollector, PomModelResolver};
    pub use crate::application::use_cases::BuildApplicationModelUseCase;
    pub use crate::dependency_info::domain::{
        ApplicationModelBuilder, ArtifactCoords, ArtifactKey, ComponentId, DeclaredDependency,
        DependencyFlags, Gav, LaunchMode,
    };
    pub use crate::dependency_info::policies::{ScopePolicy, ScopePolicyPreset};
    pub use crate::dependency_info::services::{
        DeclaredDependencyExtractor, DirectDependencyReconciler, ProjectComponentResolver,
    };
    pub use crate::ports::outbound::{
        BuildModelReader, ModelBuilder, OutputPresenter, PomLocator, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
