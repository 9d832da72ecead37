//! Run command implementation.
//!
//! The `hostcheck run` command loads checklists, validates them against the
//! check catalogue and runs every check in order.

use std::path::{Path, PathBuf};

use crate::checks::CheckRegistry;
use crate::cli::args::RunArgs;
use crate::config::{load_checklists, validate};
use crate::error::{HostcheckError, Result};
use crate::host::{Host, SystemHost};
use crate::runner::{ChecklistRunner, RunSummary};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    args: RunArgs,
    host: Box<dyn Host>,
}

impl RunCommand {
    /// Create a new run command against the live system.
    pub fn new(project_root: &Path, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            host: Box::new(SystemHost::new()),
        }
    }

    /// Run against a different host.
    pub fn with_host(mut self, host: Box<dyn Host>) -> Self {
        self.host = host;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = CheckRegistry::new();
        let lists = load_checklists(&self.project_root, &self.args.files)?;
        validate(&lists, &registry)?;

        let runner = ChecklistRunner::new(&registry, self.host.as_ref());
        let mut summary = RunSummary::default();

        for list in &lists {
            let name = list.name.as_deref().unwrap_or("Checklist");
            if !self.args.json {
                ui.show_header(name);
                if list.checks.is_empty() {
                    ui.warning(&format!("{} has no checks", name));
                }
            }
            let json = self.args.json;
            let part = runner.run(std::slice::from_ref(list), |report| {
                if !json {
                    ui.show_report(report);
                }
            })?;
            summary.reports.extend(part.reports);
        }

        if self.args.json {
            let output = serde_json::to_string_pretty(&summary.reports)
                .map_err(|e| HostcheckError::Other(e.into()))?;
            ui.message(&output);
        } else {
            ui.show_summary(&summary);
        }

        if summary.all_passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CHECKLIST_DIR, DEFAULT_CHECKLIST};
    use crate::host::StubHost;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const GROUPS: &str = "root:x:0:\nsudo:x:27:alice,bob\n";

    fn setup_project(checklist: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CHECKLIST_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DEFAULT_CHECKLIST), checklist).unwrap();
        temp
    }

    fn stub() -> Box<dyn Host> {
        Box::new(StubHost::new().with_file("/etc/group", GROUPS))
    }

    #[test]
    fn passing_checklist_succeeds() {
        let temp = setup_project(
            "name: groups\nchecks:\n  - check: GroupExists\n    parameters: [sudo]\n",
        );
        let cmd = RunCommand::new(temp.path(), RunArgs::default()).with_host(stub());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.headers(), ["groups".to_string()]);
        assert_eq!(ui.reports().len(), 1);
        assert_eq!(ui.summaries()[0].passed(), 1);
    }

    #[test]
    fn empty_checklist_warns_and_passes() {
        let temp = setup_project("name: nothing here\nchecks: []\n");
        let cmd = RunCommand::new(temp.path(), RunArgs::default()).with_host(stub());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("nothing here has no checks"));
        assert_eq!(ui.summaries()[0].total(), 0);
    }

    #[test]
    fn failing_check_exits_with_one() {
        let temp = setup_project(
            "checks:\n  - check: GroupExists\n    parameters: [sudo]\n  - check: UserInGroup\n    parameters: [carol, sudo]\n",
        );
        let cmd = RunCommand::new(temp.path(), RunArgs::default()).with_host(stub());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.summaries()[0].failed(), 1);
        assert!(ui.reports()[1].message.contains("User not found in group"));
    }

    #[test]
    fn json_output_lists_reports() {
        let temp = setup_project("checks:\n  - check: GroupId\n    parameters: [sudo, 27]\n");
        let args = RunArgs {
            files: vec![],
            json: true,
        };
        let cmd = RunCommand::new(temp.path(), args).with_host(stub());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json[0]["check"], "GroupId");
        assert_eq!(json[0]["parameters"][1], "27");
        assert_eq!(json[0]["exit_code"], 0);
        assert!(ui.reports().is_empty());
    }

    #[test]
    fn unknown_check_fails_before_running() {
        let temp = setup_project("checks:\n  - check: NoSuchCheck\n");
        let cmd = RunCommand::new(temp.path(), RunArgs::default()).with_host(stub());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, HostcheckError::ChecklistInvalid { .. }));
        assert!(ui.reports().is_empty());
    }

    #[test]
    fn missing_checklist_is_reported() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), RunArgs::default()).with_host(stub());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, HostcheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn environment_error_aborts_run() {
        let temp = setup_project("checks:\n  - check: DockerImage\n    parameters: [ubuntu]\n");
        let cmd = RunCommand::new(temp.path(), RunArgs::default()).with_host(stub());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, HostcheckError::CommandFailed { .. }));
    }
}
