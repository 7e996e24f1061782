use crate::application::dto::{ApplicationModelRequest, ApplicationModelResponse, CollectionStats};
use crate::application::services::{DependencyInfoCollector, PomModelResolver};
use crate::dependency_info::domain::{
    ApplicationModelBuilder, ArtifactKey, BuildModel, ComponentId, DependencyFlags,
    ResolvedDependencyBuilder,
};
use crate::dependency_info::policies::ScopePolicy;
use crate::dependency_info::services::ProjectComponentResolver;
use crate::ports::inbound::ApplicationModelPort;
use crate::ports::outbound::{BuildModelReader, ModelBuilder, PomLocator, ProgressReporter};
use crate::shared::Result;
use std::collections::HashSet;
use tracing::{debug, warn};

/// BuildApplicationModelUseCase - Core use case for one build invocation
///
/// Reads the build model, seeds the application model from the resolved
/// graph, collects declared dependencies for every node and reconciles them.
/// A fresh [`DependencyInfoCollector`] is created per execution.
///
/// # Type Parameters
/// * `R` - BuildModelReader implementation
/// * `L` - PomLocator implementation
/// * `M` - ModelBuilder implementation
/// * `P` - ProgressReporter implementation
pub struct BuildApplicationModelUseCase<R, L, M, P> {
    build_model_reader: R,
    pom_resolver: PomModelResolver<L, M>,
    scope_policy: ScopePolicy,
    progress_reporter: P,
}

impl<R, L, M, P> BuildApplicationModelUseCase<R, L, M, P>
where
    R: BuildModelReader,
    L: PomLocator,
    M: ModelBuilder,
    P: ProgressReporter,
{
    pub fn new(
        build_model_reader: R,
        pom_resolver: PomModelResolver<L, M>,
        scope_policy: ScopePolicy,
        progress_reporter: P,
    ) -> Self {
        Self {
            build_model_reader,
            pom_resolver,
            scope_policy,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// See [`ApplicationModelPort::build_application_model`]
    pub fn execute(&self, request: ApplicationModelRequest) -> Result<ApplicationModelResponse> {
        // Step 1: Read the build model
        self.progress_reporter.report(&format!(
            "📖 Loading build model from: {}",
            request.build_model_path.display()
        ));
        let build_model = self
            .build_model_reader
            .read_build_model(&request.build_model_path)?;
        self.progress_reporter.report(&format!(
            "✅ Detected {} resolved artifact(s)",
            build_model.resolved.len()
        ));

        let launch_mode = request
            .launch_mode
            .or(build_model.launch_mode)
            .unwrap_or_default();
        debug!("Launch mode: {}", launch_mode);

        // Step 2: Collect the application project's own declarations
        let (_, app_project) =
            ProjectComponentResolver::resolve(&build_model.workspace, &build_model.application)?;
        let app_coords = app_project.coords();
        let app_key = app_coords.key();

        let mut session = DependencyInfoCollector::new(
            &build_model.workspace,
            &self.scope_policy,
            launch_mode,
            &self.pom_resolver,
        );
        session.collect_project_artifact(&app_key, &build_model.application)?;

        // Step 3: Seed the application model from the resolved graph
        let direct_keys = Self::direct_keys(&build_model, &session, &app_key);
        let mut app_artifact = ResolvedDependencyBuilder::new(app_coords);
        app_artifact.set_flags(DependencyFlags::WORKSPACE_MODULE);
        let mut model = ApplicationModelBuilder::new(app_artifact);
        Self::seed_model(&mut model, &build_model, &direct_keys);

        // Step 4: Collect declared dependencies for every resolved node
        self.collect_nodes(&mut session, &build_model, &model)?;

        // Step 5: Reconcile the application and every node
        let mut reconciled = 0;
        for key in std::iter::once(app_key).chain(model.dependency_keys()) {
            if session.set_direct_deps(&key, &mut model) {
                reconciled += 1;
            }
        }

        let stats = CollectionStats {
            collected: session.collected_count(),
            unresolved: session.unresolved_count(),
            reconciled,
            missing_from_application: Self::count_missing(&model),
        };
        self.report_stats(&stats);

        Ok(ApplicationModelResponse::new(model, launch_mode, stats))
    }

    /// Keys of the resolved nodes the application declares directly
    fn direct_keys(
        build_model: &BuildModel,
        session: &DependencyInfoCollector<'_, L, M>,
        app_key: &ArtifactKey,
    ) -> HashSet<ArtifactKey> {
        match &build_model.application_dependencies {
            Some(keys) => keys.iter().cloned().collect(),
            None => session
                .get(app_key)
                .unwrap_or_default()
                .iter()
                .map(|d| d.key())
                .collect(),
        }
    }

    fn seed_model(
        model: &mut ApplicationModelBuilder,
        build_model: &BuildModel,
        direct_keys: &HashSet<ArtifactKey>,
    ) {
        for node in &build_model.resolved {
            let key = node.coords.key();
            if model.is_app_artifact(&key) {
                debug!("Resolved graph lists the application artifact {}, skipping", key);
                continue;
            }

            let mut builder = ResolvedDependencyBuilder::new(node.coords.clone());
            builder
                .set_flags(node.flags)
                .set_dependencies(node.dependencies.clone());
            if matches!(node.component, ComponentId::Project(_)) {
                builder.set_flags(DependencyFlags::WORKSPACE_MODULE);
            }
            if direct_keys.contains(&key) {
                builder.set_flags(DependencyFlags::DIRECT);
            }
            model.add_dependency(builder);
        }
    }

    fn collect_nodes(
        &self,
        session: &mut DependencyInfoCollector<'_, L, M>,
        build_model: &BuildModel,
        model: &ApplicationModelBuilder,
    ) -> Result<()> {
        let total = build_model.resolved.len();
        for (index, node) in build_model.resolved.iter().enumerate() {
            let key = node.coords.key();
            if model.is_app_artifact(&key) {
                continue;
            }
            let name = node.component.display_name();
            self.progress_reporter
                .report_progress(index + 1, total, Some(&name));
            session.collect(&node.component, &key)?;
        }
        Ok(())
    }

    fn count_missing(model: &ApplicationModelBuilder) -> usize {
        std::iter::once(model.app_artifact())
            .chain(model.dependencies().iter())
            .flat_map(|a| a.direct_dependencies().iter())
            .filter(|d| d.is_flag_set(DependencyFlags::MISSING_FROM_APPLICATION))
            .count()
    }

    fn report_stats(&self, stats: &CollectionStats) {
        if stats.unresolved > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: POM could not be resolved for {} module(s); their direct dependencies are unknown.",
                stats.unresolved
            ));
        }
        if stats.missing_from_application > 0 {
            warn!(
                "{} declared dependencies have no counterpart in the resolved graph",
                stats.missing_from_application
            );
        }
        self.progress_reporter.report_completion(&format!(
            "Reconciled direct dependencies of {} artifact(s)",
            stats.reconciled
        ));
    }
}

impl<R, L, M, P> ApplicationModelPort for BuildApplicationModelUseCase<R, L, M, P>
where
    R: BuildModelReader,
    L: PomLocator,
    M: ModelBuilder,
    P: ProgressReporter,
{
    fn build_application_model(
        &self,
        request: ApplicationModelRequest,
    ) -> Result<ApplicationModelResponse> {
        self.execute(request)
    }
}
