use crate::dependency_info::domain::{
    DeclaredDependency, EffectiveModel, Gav, ModelBuildingRequest, ValidationLevel, SCOPE_TEST,
};
use crate::ports::outbound::{ModelBuilder, PomLocator};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Prefix Maven uses to expose environment variables as properties
const ENV_PROPERTY_PREFIX: &str = "env.";

/// PomModelResolver turns module coordinates into declared dependencies by
/// building the module's effective POM model.
///
/// Declared-dependency metadata is best-effort enrichment: every failure
/// (missing POM, malformed XML, network error) is logged at info level and
/// reported as `None`.
pub struct PomModelResolver<L, M> {
    locator: L,
    model_builder: M,
    system_properties: BTreeMap<String, String>,
}

impl<L, M> PomModelResolver<L, M>
where
    L: PomLocator,
    M: ModelBuilder,
{
    pub fn new(locator: L, model_builder: M) -> Self {
        Self {
            locator,
            model_builder,
            system_properties: BTreeMap::new(),
        }
    }

    /// Properties injected into interpolation, below model properties
    pub fn with_system_properties(mut self, system_properties: BTreeMap<String, String>) -> Self {
        self.system_properties = system_properties;
        self
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn model_builder(&self) -> &M {
        &self.model_builder
    }

    /// Builds the effective model for `gav`, or `None` on any failure
    pub fn resolve_model(&self, gav: &Gav) -> Option<EffectiveModel> {
        let request = ModelBuildingRequest::new(gav.clone())
            .with_system_properties(self.system_properties.clone())
            .with_validation_level(ValidationLevel::Minimal);

        match self
            .model_builder
            .build_effective_model(&request, &self.locator)
        {
            Ok(model) => Some(model),
            Err(e) => {
                info!("Failed to resolve POM for {}: {:#}", gav, e);
                None
            }
        }
    }

    /// Non-test dependencies declared by the module's effective POM.
    ///
    /// Test-scoped entries never reach a consumer's graph, so they are
    /// dropped here.
    pub fn resolve_declared(&self, gav: &Gav) -> Option<Vec<DeclaredDependency>> {
        let model = self.resolve_model(gav)?;
        let declared: Vec<DeclaredDependency> = model
            .dependencies
            .iter()
            .filter(|dep| dep.scope.as_deref() != Some(SCOPE_TEST))
            .map(DeclaredDependency::from)
            .collect();
        debug!(
            "Collected {} declared dependencies from POM of {}",
            declared.len(),
            gav
        );
        Some(declared)
    }
}

/// System properties for model building: the process environment exposed as
/// `env.NAME`, overlaid with explicitly configured properties.
pub fn system_properties(configured: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut properties: BTreeMap<String, String> = std::env::vars()
        .map(|(name, value)| (format!("{}{}", ENV_PROPERTY_PREFIX, name), value))
        .collect();
    properties.extend(configured.iter().map(|(k, v)| (k.clone(), v.clone())));
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_info::domain::ModelDependency;
    use crate::ports::outbound::PomSource;
    use crate::shared::Result;

    struct NoopLocator;

    impl PomLocator for NoopLocator {
        fn locate(&self, gav: &Gav) -> Result<PomSource> {
            anyhow::bail!("{} not found", gav)
        }
    }

    struct FixedModelBuilder {
        dependencies: Vec<ModelDependency>,
    }

    impl ModelBuilder for FixedModelBuilder {
        fn build_effective_model(
            &self,
            request: &ModelBuildingRequest,
            _locator: &dyn PomLocator,
        ) -> Result<EffectiveModel> {
            Ok(EffectiveModel {
                group_id: request.gav.group_id.clone(),
                artifact_id: request.gav.artifact_id.clone(),
                version: request.gav.version.clone(),
                packaging: "jar".to_string(),
                dependencies: self.dependencies.clone(),
                ..Default::default()
            })
        }
    }

    struct FailingModelBuilder;

    impl ModelBuilder for FailingModelBuilder {
        fn build_effective_model(
            &self,
            request: &ModelBuildingRequest,
            locator: &dyn PomLocator,
        ) -> Result<EffectiveModel> {
            locator.locate(&request.gav)?;
            unreachable!()
        }
    }

    fn dep(a: &str, scope: Option<&str>) -> ModelDependency {
        ModelDependency {
            group_id: "g".to_string(),
            artifact_id: a.to_string(),
            version: Some("1.0".to_string()),
            scope: scope.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_declared_filters_test_scope() {
        let resolver = PomModelResolver::new(
            NoopLocator,
            FixedModelBuilder {
                dependencies: vec![
                    dep("a", None),
                    dep("junit", Some("test")),
                    dep("r", Some("runtime")),
                ],
            },
        );

        let declared = resolver.resolve_declared(&Gav::new("g", "m", "1")).unwrap();
        let ids: Vec<&str> = declared.iter().map(|d| d.artifact_id()).collect();
        assert_eq!(ids, vec!["a", "r"]);
        assert_eq!(declared[0].scope(), Some("compile"));
    }

    #[test]
    fn test_failure_yields_none() {
        let resolver = PomModelResolver::new(NoopLocator, FailingModelBuilder);
        assert!(resolver.resolve_declared(&Gav::new("g", "missing", "1")).is_none());
    }

    struct RecursivePropertyLocator;

    impl PomLocator for RecursivePropertyLocator {
        fn locate(&self, gav: &Gav) -> Result<PomSource> {
            let pom = r#"<project><groupId>g</groupId><artifactId>m</artifactId><version>1</version>
                <properties><loop>${loop}${loop}</loop></properties>
                <dependencies><dependency><groupId>g</groupId><artifactId>x</artifactId>
                <version>${loop}</version></dependency></dependencies></project>"#;
            Ok(PomSource::new(gav.to_string(), pom.to_string()))
        }
    }

    #[test]
    fn test_recursive_property_yields_none() {
        let resolver = PomModelResolver::new(
            RecursivePropertyLocator,
            crate::adapters::outbound::maven::EffectiveModelBuilder::new(),
        );
        assert!(resolver.resolve_declared(&Gav::new("g", "m", "1")).is_none());
    }

    #[test]
    fn test_system_properties_overlay() {
        let mut configured = BTreeMap::new();
        configured.insert("java.version".to_string(), "21".to_string());
        let properties = system_properties(&configured);
        assert_eq!(properties.get("java.version").map(String::as_str), Some("21"));
        assert!(properties.keys().any(|k| k.starts_with("env.")) || std::env::vars().count() == 0);
    }
}
