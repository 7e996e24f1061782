use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit set describing the role of a dependency in the application model.
///
/// Bit values are stable; reports list flags by name but `bits()` is
/// available for consumers that store them as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DependencyFlags(u32);

impl DependencyFlags {
    pub const NONE: Self = Self(0);
    pub const OPTIONAL: Self = Self(0b1);
    pub const DIRECT: Self = Self(0b10);
    pub const RUNTIME_CP: Self = Self(0b100);
    pub const DEPLOYMENT_CP: Self = Self(0b1000);
    pub const RUNTIME_EXTENSION_ARTIFACT: Self = Self(0b10000);
    pub const WORKSPACE_MODULE: Self = Self(0b100000);
    pub const RELOADABLE: Self = Self(0b1000000);
    pub const TOP_LEVEL_RUNTIME_EXTENSION_ARTIFACT: Self = Self(0b10000000);
    pub const CLASSLOADER_PARENT_FIRST: Self = Self(0b100000000);
    pub const CLASSLOADER_RUNNER_PARENT_FIRST: Self = Self(0b1000000000);
    pub const CLASSLOADER_LESSER_PRIORITY: Self = Self(0b10000000000);
    pub const COMPILE_ONLY: Self = Self(0b100000000000);
    pub const VISITED: Self = Self(0b1000000000000);
    pub const MISSING_FROM_APPLICATION: Self = Self(0b10000000000000);

    const NAMED: [(&'static str, Self); 14] = [
        ("OPTIONAL", Self::OPTIONAL),
        ("DIRECT", Self::DIRECT),
        ("RUNTIME_CP", Self::RUNTIME_CP),
        ("DEPLOYMENT_CP", Self::DEPLOYMENT_CP),
        ("RUNTIME_EXTENSION_ARTIFACT", Self::RUNTIME_EXTENSION_ARTIFACT),
        ("WORKSPACE_MODULE", Self::WORKSPACE_MODULE),
        ("RELOADABLE", Self::RELOADABLE),
        (
            "TOP_LEVEL_RUNTIME_EXTENSION_ARTIFACT",
            Self::TOP_LEVEL_RUNTIME_EXTENSION_ARTIFACT,
        ),
        ("CLASSLOADER_PARENT_FIRST", Self::CLASSLOADER_PARENT_FIRST),
        (
            "CLASSLOADER_RUNNER_PARENT_FIRST",
            Self::CLASSLOADER_RUNNER_PARENT_FIRST,
        ),
        ("CLASSLOADER_LESSER_PRIORITY", Self::CLASSLOADER_LESSER_PRIORITY),
        ("COMPILE_ONLY", Self::COMPILE_ONLY),
        ("VISITED", Self::VISITED),
        ("MISSING_FROM_APPLICATION", Self::MISSING_FROM_APPLICATION),
    ];

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Upper-case names of the set flags, in bit order
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, flag)| *flag)
    }
}

impl BitOr for DependencyFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DependencyFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for DependencyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join("|"))
    }
}

impl Serialize for DependencyFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for DependencyFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        let mut flags = DependencyFlags::NONE;
        for name in names {
            let flag = DependencyFlags::from_name(&name)
                .ok_or_else(|| de::Error::custom(format!("unknown dependency flag '{}'", name)))?;
            flags |= flag;
        }
        Ok(flags)
    }
}
