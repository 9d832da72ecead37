//! Checklist validation.
//!
//! Every entry must name a registered check and pass exactly as many
//! parameters as that check takes. All problems are collected before
//! anything runs, so a bad checklist never produces partial results.

use crate::checks::CheckRegistry;
use crate::config::schema::Checklist;
use crate::error::{HostcheckError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Zero-based index of the entry in its checklist
    pub entry: usize,
}

/// Validate a checklist and return all errors.
pub fn validate_checklist(list: &Checklist, registry: &CheckRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, entry) in list.checks.iter().enumerate() {
        let Some(def) = registry.get(&entry.check) else {
            errors.push(ValidationError {
                rule: "unknown-check".to_string(),
                message: format!("Entry {}: unknown check '{}'", index + 1, entry.check),
                entry: index,
            });
            continue;
        };

        if def.params.len() != entry.parameters.len() {
            errors.push(ValidationError {
                rule: "wrong-arity".to_string(),
                message: format!(
                    "Entry {}: '{}' expects {} parameter(s) ({}), got {}",
                    index + 1,
                    def.name,
                    def.params.len(),
                    def.params.join(", "),
                    entry.parameters.len()
                ),
                entry: index,
            });
        }
    }

    errors
}

/// Validate checklists, failing with every problem found.
pub fn validate(lists: &[Checklist], registry: &CheckRegistry) -> Result<()> {
    let errors: Vec<String> = lists
        .iter()
        .flat_map(|list| {
            let prefix = list
                .name
                .as_deref()
                .map(|n| format!("[{}] ", n))
                .unwrap_or_default();
            validate_checklist(list, registry)
                .into_iter()
                .map(move |e| format!("{}{}", prefix, e.message))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(HostcheckError::ChecklistInvalid {
            message: errors.join("\n"),
        })
    }
}
