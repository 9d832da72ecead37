//! Checklist loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation against the check catalogue in [`validator`]
//!
//! # Example
//!
//! ```
//! use hostcheck::checks::CheckRegistry;
//! use hostcheck::config::{load_checklists, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".hostcheck");
//! fs::create_dir_all(&dir).unwrap();
//! let checklist = "checks:\n  - check: Port\n    parameters: [22]\n";
//! fs::write(dir.join("checklist.yml"), checklist).unwrap();
//!
//! let lists = load_checklists(temp.path(), &[]).unwrap();
//! validate(&lists, &CheckRegistry::new()).unwrap();
//! assert_eq!(lists[0].checks[0].parameters, vec!["22"]);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_checklist_path, load_checklist, load_checklists, parse_checklist, CHECKLIST_DIR,
    DEFAULT_CHECKLIST,
};
pub use schema::{CheckEntry, Checklist};
pub use validator::{validate, validate_checklist, ValidationError};
