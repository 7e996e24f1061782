use crate::dependency_info::domain::{
    ApplicationModelBuilder, ArtifactCoords, DeclaredDependency, Dependency, DependencyFlags,
    LaunchMode, ResolvedDependencyBuilder, DEFAULT_CLASSIFIER, TYPE_JAR,
};

/// Outcome of reconciling one artifact
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectDependencies {
    /// Plain coordinates of declarations that have a resolved counterpart
    pub dependencies: Vec<ArtifactCoords>,
    /// One record per retained declaration, resolved or not
    pub direct_dependencies: Vec<Dependency>,
}

impl DirectDependencies {
    pub fn apply_to(self, target: &mut ResolvedDependencyBuilder) {
        target
            .set_dependencies(self.dependencies)
            .set_direct_dependencies(self.direct_dependencies);
    }
}

/// DirectDependencyReconciler cross-references declared dependencies with
/// the resolved application model.
///
/// Pure logic: it reads the model and produces a [`DirectDependencies`] value
/// that the caller applies to the artifact builder.
pub struct DirectDependencyReconciler;

impl DirectDependencyReconciler {
    /// Test-scope declarations only matter for the module under test: the
    /// application itself and the modules it depends on directly.
    pub fn retains_test_scopes(
        target: &ResolvedDependencyBuilder,
        model: &ApplicationModelBuilder,
        mode: LaunchMode,
    ) -> bool {
        mode.is_test() && (target.is_direct() || model.is_app_artifact(&target.key()))
    }

    /// Builds the direct-dependency records for a set of declarations
    pub fn reconcile(
        declared: &[DeclaredDependency],
        model: &ApplicationModelBuilder,
        retain_test_scopes: bool,
    ) -> DirectDependencies {
        let mut result = DirectDependencies {
            dependencies: Vec::with_capacity(declared.len()),
            direct_dependencies: Vec::with_capacity(declared.len()),
        };

        for declared_dep in declared {
            if declared_dep.is_test_scoped() && !retain_test_scopes {
                continue;
            }

            let mut builder = Dependency::builder()
                .group_id(declared_dep.group_id())
                .artifact_id(declared_dep.artifact_id())
                .classifier(declared_dep.classifier().unwrap_or(DEFAULT_CLASSIFIER))
                .artifact_type(declared_dep.artifact_type().unwrap_or(TYPE_JAR))
                .version(declared_dep.version().map(str::to_string));

            if let Some(scope) = declared_dep.scope() {
                builder = builder.scope(scope);
            }

            let app_dep = model.get_dependency(&builder.key());
            builder = match app_dep {
                None => builder.set_flags(DependencyFlags::MISSING_FROM_APPLICATION),
                Some(resolved) => builder
                    .version(Some(resolved.version().to_string()))
                    .set_flags(resolved.flags()),
            };

            let direct_dep = builder
                .optional(declared_dep.is_optional())
                .set_flags(DependencyFlags::DIRECT)
                .build();

            if let Some(resolved) = app_dep {
                result
                    .dependencies
                    .push(ArtifactCoords::new(direct_dep.key(), resolved.version()));
            }
            result.direct_dependencies.push(direct_dep);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_info::domain::{ArtifactKey, SCOPE_COMPILE, SCOPE_TEST};

    fn declared(a: &str, v: &str, scope: &str) -> DeclaredDependency {
        DeclaredDependency::from_build_script("g", a, Some(v.to_string()), scope)
    }

    fn resolved(a: &str, v: &str, flags: DependencyFlags) -> ResolvedDependencyBuilder {
        let mut builder = ResolvedDependencyBuilder::new(ArtifactCoords::jar("g", a, v));
        builder.set_flags(flags);
        builder
    }

    fn model() -> ApplicationModelBuilder {
        let mut model = ApplicationModelBuilder::new(resolved("app", "1.0", DependencyFlags::NONE));
        model.add_dependency(resolved("a", "1.5", DependencyFlags::RUNTIME_CP));
        model.add_dependency(resolved(
            "b",
            "2.0",
            DependencyFlags::RUNTIME_CP | DependencyFlags::DIRECT,
        ));
        model
    }

    #[test]
    fn test_resolved_counterpart_adopts_version_and_flags() {
        let result = DirectDependencyReconciler::reconcile(
            &[declared("a", "1.0", SCOPE_COMPILE)],
            &model(),
            false,
        );

        assert_eq!(result.direct_dependencies.len(), 1);
        let dep = &result.direct_dependencies[0];
        assert_eq!(dep.version(), Some("1.5"));
        assert!(dep.is_flag_set(DependencyFlags::RUNTIME_CP));
        assert!(dep.is_flag_set(DependencyFlags::DIRECT));
        assert!(!dep.is_flag_set(DependencyFlags::MISSING_FROM_APPLICATION));
        assert_eq!(dep.scope(), "compile");
        assert_eq!(result.dependencies, vec![ArtifactCoords::jar("g", "a", "1.5")]);
    }

    #[test]
    fn test_missing_counterpart_is_flagged_and_kept_out_of_coordinates() {
        let result = DirectDependencyReconciler::reconcile(
            &[declared("ghost", "9.9", SCOPE_COMPILE), declared("a", "1.0", SCOPE_COMPILE)],
            &model(),
            false,
        );

        assert_eq!(result.direct_dependencies.len(), 2);
        let ghost = &result.direct_dependencies[0];
        assert!(ghost.is_flag_set(DependencyFlags::MISSING_FROM_APPLICATION));
        assert!(ghost.is_flag_set(DependencyFlags::DIRECT));
        assert_eq!(ghost.version(), Some("9.9"));
        assert!(!result
            .dependencies
            .iter()
            .any(|c| c.key() == ArtifactKey::jar("g", "ghost")));
        assert_eq!(result.dependencies.len(), 1);
    }

    #[test]
    fn test_test_scope_dropped_unless_retained() {
        let declared = vec![declared("a", "1.0", SCOPE_COMPILE), declared("b", "2.0", SCOPE_TEST)];

        let dropped = DirectDependencyReconciler::reconcile(&declared, &model(), false);
        assert_eq!(dropped.direct_dependencies.len(), 1);

        let retained = DirectDependencyReconciler::reconcile(&declared, &model(), true);
        assert_eq!(retained.direct_dependencies.len(), 2);
        assert_eq!(retained.direct_dependencies[1].scope(), "test");
    }

    #[test]
    fn test_optional_declaration_sets_optional_flag() {
        let optional = DeclaredDependency::new(
            "g",
            "a",
            Some("1.0".to_string()),
            Some(String::new()),
            Some("jar".to_string()),
            Some(SCOPE_COMPILE.to_string()),
            true,
        );
        let result = DirectDependencyReconciler::reconcile(&[optional], &model(), false);
        assert!(result.direct_dependencies[0].is_optional());
        assert!(result.direct_dependencies[0].is_flag_set(DependencyFlags::OPTIONAL));
    }

    #[test]
    fn test_non_optional_declaration_clears_resolved_optional_flag() {
        let mut model = model();
        model.add_dependency(resolved("opt", "1.0", DependencyFlags::OPTIONAL));
        let result = DirectDependencyReconciler::reconcile(
            &[declared("opt", "1.0", SCOPE_COMPILE)],
            &model,
            false,
        );
        assert!(!result.direct_dependencies[0].is_optional());
    }

    #[test]
    fn test_missing_scope_defaults_to_compile() {
        let unscoped = DeclaredDependency::new("g", "a", None, None, None, None, false);
        let result = DirectDependencyReconciler::reconcile(&[unscoped], &model(), false);
        assert_eq!(result.direct_dependencies[0].scope(), "compile");
        assert_eq!(result.direct_dependencies[0].version(), Some("1.5"));
    }

    #[test]
    fn test_retains_test_scopes_rule() {
        let model = model();
        let app = model.app_artifact().clone();
        let direct = model.get_dependency(&ArtifactKey::jar("g", "b")).unwrap().clone();
        let transitive = model.get_dependency(&ArtifactKey::jar("g", "a")).unwrap().clone();

        assert!(DirectDependencyReconciler::retains_test_scopes(&app, &model, LaunchMode::Test));
        assert!(DirectDependencyReconciler::retains_test_scopes(&direct, &model, LaunchMode::Test));
        assert!(!DirectDependencyReconciler::retains_test_scopes(
            &transitive,
            &model,
            LaunchMode::Test
        ));
        assert!(!DirectDependencyReconciler::retains_test_scopes(
            &app,
            &model,
            LaunchMode::Normal
        ));
        assert!(!DirectDependencyReconciler::retains_test_scopes(
            &app,
            &model,
            LaunchMode::Development
        ));
    }

    #[test]
    fn test_apply_to_overwrites_both_lists() {
        let mut target = resolved("x", "1.0", DependencyFlags::NONE);
        target.set_dependencies(vec![ArtifactCoords::jar("g", "stale", "0.1")]);
        let result = DirectDependencyReconciler::reconcile(
            &[declared("a", "1.0", SCOPE_COMPILE)],
            &model(),
            false,
        );
        result.apply_to(&mut target);

        assert_eq!(target.dependencies(), &[ArtifactCoords::jar("g", "a", "1.5")]);
        assert_eq!(target.direct_dependencies().len(), 1);
    }
}
