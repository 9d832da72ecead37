//! Checklist discovery and loading.

use crate::config::schema::Checklist;
use crate::error::{HostcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project checklists.
pub const CHECKLIST_DIR: &str = ".hostcheck";

/// Default checklist file inside [`CHECKLIST_DIR`].
pub const DEFAULT_CHECKLIST: &str = "checklist.yml";

/// Path of the default checklist for a project.
pub fn default_checklist_path(project_root: &Path) -> PathBuf {
    project_root.join(CHECKLIST_DIR).join(DEFAULT_CHECKLIST)
}

/// Load and parse one checklist file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_checklist(path: &Path) -> Result<Checklist> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HostcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HostcheckError::Io(e)
        }
    })?;

    tracing::debug!(path = %path.display(), "loaded checklist");
    parse_checklist(&content, path)
}

/// Parse YAML (or JSON) content into a [`Checklist`].
///
/// `source_path` is used for error reporting only.
pub fn parse_checklist(content: &str, source_path: &Path) -> Result<Checklist> {
    serde_yaml::from_str(content).map_err(|e| HostcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the given checklists, or the project default when none are given.
pub fn load_checklists(project_root: &Path, paths: &[PathBuf]) -> Result<Vec<Checklist>> {
    if paths.is_empty() {
        return Ok(vec![load_checklist(&default_checklist_path(project_root))?]);
    }
    paths.iter().map(|p| load_checklist(p)).collect()
}
