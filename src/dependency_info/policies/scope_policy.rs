use crate::dependency_info::domain::{SCOPE_COMPILE, SCOPE_RUNTIME, SCOPE_TEST};
use crate::shared::error::DepInfoError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

pub const API: &str = "api";
pub const IMPLEMENTATION: &str = "implementation";
pub const COMPILE_ONLY: &str = "compileOnly";
pub const RUNTIME_ONLY: &str = "runtimeOnly";
pub const TEST_IMPLEMENTATION: &str = "testImplementation";
pub const TEST_RUNTIME_ONLY: &str = "testRuntimeOnly";
pub const TEST_COMPILE_ONLY: &str = "testCompileOnly";

/// Scope a configuration's declarations are recorded with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeMapping {
    Compile,
    Runtime,
    Test,
    /// Declarations of the configuration are not recorded at all
    Ignored,
}

impl ScopeMapping {
    pub fn scope(self) -> Option<&'static str> {
        match self {
            ScopeMapping::Compile => Some(SCOPE_COMPILE),
            ScopeMapping::Runtime => Some(SCOPE_RUNTIME),
            ScopeMapping::Test => Some(SCOPE_TEST),
            ScopeMapping::Ignored => None,
        }
    }
}

/// One row of the configuration-to-scope table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigurationScope {
    pub configuration: String,
    pub scope: ScopeMapping,
}

impl ConfigurationScope {
    fn new(configuration: &str, scope: ScopeMapping) -> Self {
        Self {
            configuration: configuration.to_string(),
            scope,
        }
    }
}

/// Named presets for the configuration-to-scope table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScopePolicyPreset {
    /// api/implementation -> compile, runtimeOnly -> runtime,
    /// compileOnly ignored, test* -> test
    #[default]
    CompileClasspath,
    /// api -> compile, implementation -> runtime, compileOnly -> compile,
    /// runtimeOnly -> runtime, test* -> test
    RuntimeClasspath,
}

impl std::str::FromStr for ScopePolicyPreset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compile-classpath" | "compile" => Ok(ScopePolicyPreset::CompileClasspath),
            "runtime-classpath" | "runtime" => Ok(ScopePolicyPreset::RuntimeClasspath),
            _ => Err(format!(
                "Invalid scope policy: {}. Please specify 'compile-classpath' or 'runtime-classpath'",
                s
            )),
        }
    }
}

impl fmt::Display for ScopePolicyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopePolicyPreset::CompileClasspath => write!(f, "compile-classpath"),
            ScopePolicyPreset::RuntimeClasspath => write!(f, "runtime-classpath"),
        }
    }
}

/// Ordered configuration-to-scope table used by the declared-dependency
/// extractor. Row order is the order declarations are emitted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopePolicy {
    entries: Vec<ConfigurationScope>,
}

impl Default for ScopePolicy {
    fn default() -> Self {
        Self::from_preset(ScopePolicyPreset::default())
    }
}

impl ScopePolicy {
    pub fn from_preset(preset: ScopePolicyPreset) -> Self {
        use ScopeMapping::*;
        let entries = match preset {
            ScopePolicyPreset::CompileClasspath => vec![
                ConfigurationScope::new(API, Compile),
                ConfigurationScope::new(IMPLEMENTATION, Compile),
                ConfigurationScope::new(COMPILE_ONLY, Ignored),
                ConfigurationScope::new(RUNTIME_ONLY, Runtime),
                ConfigurationScope::new(TEST_IMPLEMENTATION, Test),
                ConfigurationScope::new(TEST_RUNTIME_ONLY, Test),
                ConfigurationScope::new(TEST_COMPILE_ONLY, Test),
            ],
            ScopePolicyPreset::RuntimeClasspath => vec![
                ConfigurationScope::new(API, Compile),
                ConfigurationScope::new(IMPLEMENTATION, Runtime),
                ConfigurationScope::new(COMPILE_ONLY, Compile),
                ConfigurationScope::new(RUNTIME_ONLY, Runtime),
                ConfigurationScope::new(TEST_IMPLEMENTATION, Test),
                ConfigurationScope::new(TEST_RUNTIME_ONLY, Test),
                ConfigurationScope::new(TEST_COMPILE_ONLY, Test),
            ],
        };
        Self { entries }
    }

    /// Builds a policy from an explicit table
    ///
    /// # Errors
    /// Returns an error if the table is empty, or a configuration name is
    /// blank or listed twice
    pub fn from_entries(entries: Vec<ConfigurationScope>) -> Result<Self> {
        if entries.is_empty() {
            return Err(DepInfoError::Validation {
                message: "scope policy must map at least one configuration".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.configuration.trim().is_empty() {
                return Err(DepInfoError::Validation {
                    message: "scope policy configuration names must not be empty".to_string(),
                }
                .into());
            }
            if !seen.insert(entry.configuration.as_str()) {
                return Err(DepInfoError::Validation {
                    message: format!(
                        "configuration '{}' is mapped more than once",
                        entry.configuration
                    ),
                }
                .into());
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ConfigurationScope] {
        &self.entries
    }

    /// `(configuration, scope)` pairs to read, in table order.
    /// Ignored configurations are skipped, and test scopes are skipped
    /// unless requested.
    pub fn mappings(
        &self,
        include_test_scopes: bool,
    ) -> impl Iterator<Item = (&str, &'static str)> {
        self.entries.iter().filter_map(move |entry| {
            let scope = entry.scope.scope()?;
            if scope == SCOPE_TEST && !include_test_scopes {
                return None;
            }
            Some((entry.configuration.as_str(), scope))
        })
    }

    pub fn scope_of(&self, configuration: &str) -> Option<ScopeMapping> {
        self.entries
            .iter()
            .find(|e| e.configuration == configuration)
            .map(|e| e.scope)
    }
}
