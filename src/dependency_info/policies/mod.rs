pub mod scope_policy;

pub use scope_policy::{ConfigurationScope, ScopeMapping, ScopePolicy, ScopePolicyPreset};
