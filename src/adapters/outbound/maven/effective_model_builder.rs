use super::interpolation::Interpolator;
use super::pom_xml::{trimmed, RawParent, RawPom};
use crate::dependency_info::domain::{
    ArtifactKey, EffectiveModel, Gav, ModelBuildingRequest, ModelDependency, ValidationLevel,
};
use crate::ports::outbound::{ModelBuilder, PomLocator};
use crate::shared::Result;
use anyhow::Context;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Longest parent chain followed before giving up
pub const MAX_PARENT_DEPTH: usize = 32;
/// Deepest chain of BOM imports followed
const MAX_IMPORT_DEPTH: usize = 16;

const SCOPE_IMPORT: &str = "import";
const TYPE_POM: &str = "pom";
const DEFAULT_PACKAGING: &str = "jar";

/// EffectiveModelBuilder adapter implementing a minimal Maven model builder
///
/// Supported: parent inheritance, property interpolation, dependency
/// management (including `import`-scoped BOMs) and minimal validation.
/// Profiles, plugin management and activation are not evaluated.
pub struct EffectiveModelBuilder;

impl EffectiveModelBuilder {
    pub fn new() -> Self {
        Self
    }

    fn build(
        &self,
        request: &ModelBuildingRequest,
        locator: &dyn PomLocator,
        importing: &mut Vec<Gav>,
    ) -> Result<EffectiveModel> {
        let lineage = Self::load_lineage(&request.gav, locator)?;
        let mut model = Self::inherit(&lineage);
        let parent = lineage.first().and_then(|pom| pom.parent.as_ref());

        let project_values = Self::project_values(&model, parent);
        Self::interpolate(&mut model, &project_values, &request.system_properties)
            .with_context(|| format!("Failed to interpolate POM of {}", request.gav))?;

        self.import_boms(&mut model, request, locator, importing)?;
        Self::apply_management(&mut model);
        Self::validate(&model, &request.gav, request.validation_level)?;

        debug!(
            "Built effective model {} ({} dependencies, {} managed)",
            model.gav(),
            model.dependencies.len(),
            model.dependency_management.len()
        );
        Ok(model)
    }

    /// The POM of `gav` followed by its ancestors, nearest first
    fn load_lineage(gav: &Gav, locator: &dyn PomLocator) -> Result<Vec<RawPom>> {
        let mut lineage = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(gav.clone());

        while let Some(current) = next.take() {
            if !seen.insert(current.clone()) {
                anyhow::bail!("Cycle in parent chain of {} at {}", gav, current);
            }
            if lineage.len() >= MAX_PARENT_DEPTH {
                anyhow::bail!(
                    "Parent chain of {} exceeds {} levels",
                    gav,
                    MAX_PARENT_DEPTH
                );
            }

            let source = locator.locate(&current)?;
            let pom = RawPom::parse(&source.content, &source.location)?;
            next = pom.parent.as_ref().and_then(|p| p.gav());
            lineage.push(pom);
        }

        Ok(lineage)
    }

    /// Merges the lineage from the root ancestor down; nearer POMs win
    fn inherit(lineage: &[RawPom]) -> EffectiveModel {
        let mut model = EffectiveModel::default();

        for pom in lineage.iter().rev() {
            let parent = pom.parent.as_ref();
            if let Some(group_id) = trimmed(pom.group_id.as_deref())
                .or_else(|| parent.and_then(|p| trimmed(p.group_id.as_deref())))
            {
                model.group_id = group_id;
            }
            if let Some(version) = trimmed(pom.version.as_deref())
                .or_else(|| parent.and_then(|p| trimmed(p.version.as_deref())))
            {
                model.version = version;
            }
            model.artifact_id = trimmed(pom.artifact_id.as_deref()).unwrap_or_default();
            model.packaging =
                trimmed(pom.packaging.as_deref()).unwrap_or_else(|| DEFAULT_PACKAGING.to_string());

            model.properties.extend(pom.properties());
            model.dependencies = merge_by_key(pom.dependencies(), &model.dependencies);
            model.dependency_management =
                merge_by_key(pom.managed_dependencies(), &model.dependency_management);
        }

        model
    }

    fn project_values(
        model: &EffectiveModel,
        parent: Option<&RawParent>,
    ) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        for prefix in ["project", "pom"] {
            values.insert(format!("{}.groupId", prefix), model.group_id.clone());
            values.insert(format!("{}.artifactId", prefix), model.artifact_id.clone());
            values.insert(format!("{}.version", prefix), model.version.clone());
            values.insert(format!("{}.packaging", prefix), model.packaging.clone());
        }
        if let Some(parent) = parent {
            let fields = [
                ("groupId", &parent.group_id),
                ("artifactId", &parent.artifact_id),
                ("version", &parent.version),
            ];
            for (field, value) in fields {
                if let Some(value) = trimmed(value.as_deref()) {
                    values.insert(format!("project.parent.{}", field), value);
                }
            }
        }
        values
    }

    fn interpolate(
        model: &mut EffectiveModel,
        project_values: &BTreeMap<String, String>,
        system_properties: &BTreeMap<String, String>,
    ) -> Result<()> {
        let properties = {
            let raw = model.properties.clone();
            let interpolator = Interpolator::new(vec![project_values, &raw, system_properties]);
            raw.iter()
                .map(|(k, v)| Ok((k.clone(), interpolator.interpolate(v)?)))
                .collect::<Result<BTreeMap<_, _>>>()?
        };

        let interpolator = Interpolator::new(vec![project_values, &properties, system_properties]);
        for dep in model
            .dependencies
            .iter_mut()
            .chain(model.dependency_management.iter_mut())
        {
            dep.group_id = interpolator.interpolate(&dep.group_id)?;
            dep.artifact_id = interpolator.interpolate(&dep.artifact_id)?;
            interpolator.interpolate_opt(&mut dep.version)?;
            interpolator.interpolate_opt(&mut dep.classifier)?;
            interpolator.interpolate_opt(&mut dep.artifact_type)?;
            interpolator.interpolate_opt(&mut dep.scope)?;
            interpolator.interpolate_opt(&mut dep.optional)?;
        }
        model.properties = properties;
        Ok(())
    }

    /// Replaces `import`-scoped BOM entries with the BOM's own managed
    /// dependencies. Locally declared management takes precedence.
    fn import_boms(
        &self,
        model: &mut EffectiveModel,
        request: &ModelBuildingRequest,
        locator: &dyn PomLocator,
        importing: &mut Vec<Gav>,
    ) -> Result<()> {
        let (imports, mut managed): (Vec<_>, Vec<_>) =
            std::mem::take(&mut model.dependency_management)
                .into_iter()
                .partition(is_bom_import);

        for bom in imports {
            let Some(version) = bom.version.clone() else {
                anyhow::bail!(
                    "Imported BOM {}:{} in {} has no version",
                    bom.group_id,
                    bom.artifact_id,
                    request.gav
                );
            };
            let bom_gav = Gav::new(bom.group_id.clone(), bom.artifact_id.clone(), version);

            if importing.contains(&bom_gav) || bom_gav == request.gav {
                anyhow::bail!("Cycle in BOM imports at {}", bom_gav);
            }
            if importing.len() >= MAX_IMPORT_DEPTH {
                anyhow::bail!("BOM imports of {} nest too deeply", request.gav);
            }

            importing.push(request.gav.clone());
            let bom_request = ModelBuildingRequest::new(bom_gav)
                .with_system_properties(request.system_properties.clone())
                .with_validation_level(ValidationLevel::Minimal);
            let imported = self.build(&bom_request, locator, importing);
            importing.pop();

            managed = merge_by_key(managed, &imported?.dependency_management);
        }

        model.dependency_management = managed;
        Ok(())
    }

    /// Fills missing version, scope and optional from the managed entry with
    /// the same management key
    fn apply_management(model: &mut EffectiveModel) {
        let managed: BTreeMap<ArtifactKey, &ModelDependency> = model
            .dependency_management
            .iter()
            .map(|dep| (dep.management_key(), dep))
            .collect();

        for dep in &mut model.dependencies {
            let Some(entry) = managed.get(&dep.management_key()) else {
                continue;
            };
            if dep.version.is_none() {
                dep.version = entry.version.clone();
            }
            if dep.scope.is_none() {
                dep.scope = entry.scope.clone();
            }
            if dep.optional.is_none() {
                dep.optional = entry.optional.clone();
            }
        }
    }

    fn validate(model: &EffectiveModel, requested: &Gav, level: ValidationLevel) -> Result<()> {
        let coordinates = [
            ("groupId", &model.group_id),
            ("artifactId", &model.artifact_id),
            ("version", &model.version),
        ];
        for (field, value) in coordinates {
            if value.is_empty() {
                anyhow::bail!("POM of {} is missing {}", requested, field);
            }
        }

        for dep in &model.dependencies {
            if dep.group_id.is_empty() || dep.artifact_id.is_empty() {
                anyhow::bail!(
                    "POM of {} declares a dependency without groupId or artifactId",
                    requested
                );
            }
            if level == ValidationLevel::Strict {
                match dep.version.as_deref() {
                    None => anyhow::bail!(
                        "Dependency {}:{} of {} has no version",
                        dep.group_id,
                        dep.artifact_id,
                        requested
                    ),
                    Some(v) if v.contains("${") => anyhow::bail!(
                        "Dependency {}:{} of {} has unresolved version {}",
                        dep.group_id,
                        dep.artifact_id,
                        requested,
                        v
                    ),
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

impl Default for EffectiveModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBuilder for EffectiveModelBuilder {
    fn build_effective_model(
        &self,
        request: &ModelBuildingRequest,
        locator: &dyn PomLocator,
    ) -> Result<EffectiveModel> {
        self.build(request, locator, &mut Vec::new())
    }
}

fn is_bom_import(dep: &ModelDependency) -> bool {
    dep.scope.as_deref() == Some(SCOPE_IMPORT) && dep.artifact_type.as_deref() == Some(TYPE_POM)
}

/// `preferred` in order, followed by the entries of `fallback` whose key is
/// not already present
fn merge_by_key(
    preferred: Vec<ModelDependency>,
    fallback: &[ModelDependency],
) -> Vec<ModelDependency> {
    let keys: HashSet<ArtifactKey> = preferred.iter().map(|d| d.management_key()).collect();
    let mut merged = preferred;
    merged.extend(
        fallback
            .iter()
            .filter(|d| !keys.contains(&d.management_key()))
            .cloned(),
    );
    merged
}
