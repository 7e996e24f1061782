//! `${...}` expression interpolation over layered value sources

use crate::shared::Result;
use std::collections::BTreeMap;

/// Longest string an interpolated value may expand to
pub const MAX_EXPANDED_LEN: usize = 64 * 1024;

/// Value sources for interpolation, consulted in order
pub struct Interpolator<'a> {
    layers: Vec<&'a BTreeMap<String, String>>,
}

impl<'a> Interpolator<'a> {
    pub fn new(layers: Vec<&'a BTreeMap<String, String>>) -> Self {
        Self { layers }
    }

    fn lookup(&self, name: &str) -> Option<&'a str> {
        self.layers
            .iter()
            .find_map(|layer| layer.get(name).map(String::as_str))
    }

    /// Substitutes every resolvable expression in `value`, resolving values
    /// that themselves contain expressions. Expressions with no value are
    /// left in place.
    ///
    /// Fails when an expression refers back to itself or when the result
    /// would exceed [`MAX_EXPANDED_LEN`].
    pub fn interpolate(&self, value: &str) -> Result<String> {
        let mut resolving = Vec::new();
        let mut resolved = BTreeMap::new();
        self.expand(value, &mut resolving, &mut resolved)
    }

    pub fn interpolate_opt(&self, value: &mut Option<String>) -> Result<()> {
        if let Some(v) = value {
            *v = self.interpolate(v)?;
        }
        Ok(())
    }

    fn expand(
        &self,
        value: &str,
        resolving: &mut Vec<String>,
        resolved: &mut BTreeMap<String, String>,
    ) -> Result<String> {
        let mut out = String::with_capacity(value.len());
        let mut rest = value;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                out.push_str(&rest[start..]);
                rest = "";
                break;
            };

            let name = &after[..end];
            match self.resolve(name.trim(), resolving, resolved)? {
                Some(value) => out.push_str(&value),
                None => {
                    out.push_str("${");
                    out.push_str(name);
                    out.push('}');
                }
            }
            rest = &after[end + 1..];

            if out.len() > MAX_EXPANDED_LEN {
                anyhow::bail!(
                    "Expression expands beyond {} bytes while interpolating '{}'",
                    MAX_EXPANDED_LEN,
                    value
                );
            }
        }
        out.push_str(rest);
        Ok(out)
    }

    fn resolve(
        &self,
        name: &str,
        resolving: &mut Vec<String>,
        resolved: &mut BTreeMap<String, String>,
    ) -> Result<Option<String>> {
        if let Some(value) = resolved.get(name) {
            return Ok(Some(value.clone()));
        }
        let Some(raw) = self.lookup(name) else {
            return Ok(None);
        };
        if resolving.iter().any(|n| n == name) {
            anyhow::bail!(
                "Recursive expression cycle: {} -> {}",
                resolving.join(" -> "),
                name
            );
        }

        resolving.push(name.to_string());
        let value = self.expand(raw, resolving, resolved);
        resolving.pop();

        let value = value?;
        resolved.insert(name.to_string(), value.clone());
        Ok(Some(value))
    }
}
