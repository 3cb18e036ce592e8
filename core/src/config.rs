//! Solver configuration
//!
//! Defaults reproduce the reference behaviour. `SolverConfig::from_env`
//! reads overrides for the binary:
//!
//! - `WORDDICE_STORAGE`: `dense` (default) or `sparse` capacity store
//! - `WORDDICE_EARLY_EXIT`: stop each BFS at the sink (default `true`)
//! - `WORDDICE_VERIFY`: re-check the recovered assignment (default `true`)

use serde::{Deserialize, Serialize};

use crate::algorithm::graph::max_flow::CapacityStorage;

pub const STORAGE_VAR: &str = "WORDDICE_STORAGE";
pub const EARLY_EXIT_VAR: &str = "WORDDICE_EARLY_EXIT";
pub const VERIFY_VAR: &str = "WORDDICE_VERIFY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Residual capacity representation
    pub storage: CapacityStorage,
    /// Early exit from BFS once the sink is labelled
    pub early_exit: bool,
    /// Check the recovered assignment is injective and letter-consistent
    pub verify_assignment: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            storage: CapacityStorage::Dense,
            early_exit: true,
            verify_assignment: true,
        }
    }
}

impl SolverConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read overrides through `lookup`; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(STORAGE_VAR) {
            config.storage = value.parse().map_err(|reason| ConfigError::InvalidValue {
                var: STORAGE_VAR,
                value: value.clone(),
                reason,
            })?;
        }
        if let Some(value) = lookup(EARLY_EXIT_VAR) {
            config.early_exit = flag(EARLY_EXIT_VAR, &value)?;
        }
        if let Some(value) = lookup(VERIFY_VAR) {
            config.verify_assignment = flag(VERIFY_VAR, &value)?;
        }

        Ok(config)
    }
}

/// Boolean spellings accepted for flag variables
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    parse_flag(value).ok_or_else(|| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        reason: "expected true or false".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|&(k, v)| (k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SolverConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.storage, CapacityStorage::Dense);
        assert!(config.early_exit);
        assert!(config.verify_assignment);
    }

    #[test]
    fn test_overrides() {
        let config = SolverConfig::from_lookup(lookup_from(&[
            (STORAGE_VAR, "sparse"),
            (EARLY_EXIT_VAR, "0"),
            (VERIFY_VAR, "false"),
        ]))
        .unwrap();
        assert_eq!(config.storage, CapacityStorage::Sparse);
        assert!(!config.early_exit);
        assert!(!config.verify_assignment);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let err = SolverConfig::from_lookup(lookup_from(&[(STORAGE_VAR, "btree")])).unwrap_err();
        assert!(err.to_string().contains(STORAGE_VAR));

        let err = SolverConfig::from_lookup(lookup_from(&[(VERIFY_VAR, "perhaps")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 'perhaps' for WORDDICE_VERIFY: expected true or false"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SolverConfig = serde_json::from_str(r#"{ "storage": "sparse" }"#).unwrap();
        assert_eq!(config.storage, CapacityStorage::Sparse);
        assert!(config.early_exit);
    }
}
