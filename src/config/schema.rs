//! Checklist schema definitions.
//!
//! This module contains the struct definitions that map to the checklist
//! file format. Checklists are YAML; JSON checklists parse as well, and the
//! capitalised keys used by older JSON checklists (`Name`, `Checklist`,
//! `Check`, `Parameters`) are accepted as aliases.

use serde::{Deserialize, Deserializer, Serialize};

/// Root checklist structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checklist {
    /// Display name
    #[serde(alias = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Checks to run, in order
    #[serde(alias = "Checklist")]
    pub checks: Vec<CheckEntry>,
}

/// One check invocation in a checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckEntry {
    /// Check name, e.g. `DockerImage`
    #[serde(alias = "Check")]
    pub check: String,

    /// Positional parameters
    #[serde(
        default,
        alias = "Parameters",
        deserialize_with = "scalar_strings",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub parameters: Vec<String>,
}

impl CheckEntry {
    /// Create an entry.
    pub fn new(check: &str, parameters: &[&str]) -> Self {
        Self {
            check: check.to_string(),
            parameters: parameters.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Accept strings, numbers and booleans, storing each as a string.
fn scalar_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let values = Vec::<Value>::deserialize(deserializer)?;
    values
        .into_iter()
        .map(|value| match value {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(D::Error::custom(format!(
                "parameters must be scalars, found {:?}",
                other
            ))),
        })
        .collect()
}
