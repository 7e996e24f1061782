use serde::{Deserialize, Serialize};
use std::fmt;

/// Mode the application is being assembled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    #[default]
    Normal,
    Test,
    #[serde(alias = "dev")]
    Development,
}

impl LaunchMode {
    pub fn is_test(self) -> bool {
        matches!(self, LaunchMode::Test)
    }
}

impl std::str::FromStr for LaunchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" | "prod" => Ok(LaunchMode::Normal),
            "test" => Ok(LaunchMode::Test),
            "dev" | "development" => Ok(LaunchMode::Development),
            _ => Err(format!(
                "Invalid launch mode: {}. Please specify 'normal', 'test' or 'dev'",
                s
            )),
        }
    }
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchMode::Normal => write!(f, "NORMAL"),
            LaunchMode::Test => write!(f, "TEST"),
            LaunchMode::Development => write!(f, "DEVELOPMENT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str() {
        assert_eq!(LaunchMode::from_str("TEST").unwrap(), LaunchMode::Test);
        assert_eq!(LaunchMode::from_str("dev").unwrap(), LaunchMode::Development);
        assert_eq!(LaunchMode::from_str("normal").unwrap(), LaunchMode::Normal);
        assert!(LaunchMode::from_str("staging").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(LaunchMode::Development.to_string(), "DEVELOPMENT");
    }

    #[test]
    fn test_serde_accepts_dev_alias() {
        let mode: LaunchMode = serde_json::from_str(r#""dev""#).unwrap();
        assert_eq!(mode, LaunchMode::Development);
    }
}
