//! Check command implementation.
//!
//! The `hostcheck check` command runs a single check by name.

use crate::check::CheckReport;
use crate::checks::CheckRegistry;
use crate::cli::args::CheckArgs;
use crate::error::{HostcheckError, Result};
use crate::host::{Host, SystemHost};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    host: Box<dyn Host>,
}

impl CheckCommand {
    /// Create a new check command against the live system.
    pub fn new(args: CheckArgs) -> Self {
        Self {
            args,
            host: Box::new(SystemHost::new()),
        }
    }

    /// Run against a different host.
    pub fn with_host(mut self, host: Box<dyn Host>) -> Self {
        self.host = host;
        self
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = CheckRegistry::new();
        let def = registry
            .get(&self.args.name)
            .ok_or_else(|| HostcheckError::UnknownCheck {
                name: self.args.name.clone(),
            })?;

        let result = def.invoke(&self.args.params, self.host.as_ref())?;
        ui.show_report(&CheckReport::new(def.name, &self.args.params, &result));

        Ok(if result.is_success() {
            CommandResult::success()
        } else {
            CommandResult::failure(result.exit_code())
        })
    }
}
