//! List command implementation.
//!
//! The `hostcheck list` command prints the check catalogue.

use serde::Serialize;

use crate::checks::CheckRegistry;
use crate::cli::args::ListArgs;
use crate::error::{HostcheckError, Result};
use crate::ui::theme::HostcheckTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Catalogue entry as emitted by `list --json`.
#[derive(Debug, Serialize)]
struct CheckListing<'a> {
    name: &'a str,
    summary: &'a str,
    parameters: &'a [&'a str],
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = CheckRegistry::new();

        if self.args.json {
            let listings: Vec<CheckListing<'_>> = registry
                .iter()
                .map(|def| CheckListing {
                    name: def.name,
                    summary: def.summary,
                    parameters: def.params,
                })
                .collect();
            let output = serde_json::to_string_pretty(&listings)
                .map_err(|e| HostcheckError::Other(e.into()))?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        let theme = HostcheckTheme::new();
        let width = registry.iter().map(|def| def.name.len()).max().unwrap_or(0);

        ui.show_header("Checks:");
        for def in registry.iter() {
            let params = if def.params.is_empty() {
                String::new()
            } else {
                format!(" <{}>", def.params.join("> <"))
            };
            ui.message(&format!(
                "  {:<width$}{}",
                def.name,
                theme.dim.apply_to(params),
                width = width
            ));
            if ui.output_mode().shows_detail() {
                ui.message(&format!("      {}", def.summary));
            }
        }

        Ok(CommandResult::success())
    }
}
