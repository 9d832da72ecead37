//! Sequential checklist execution.

use crate::check::CheckReport;
use crate::checks::CheckRegistry;
use crate::config::Checklist;
use crate::error::Result;
use crate::host::Host;

/// Outcome of a checklist run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// One report per check, in execution order.
    pub reports: Vec<CheckReport>,
}

impl RunSummary {
    /// Number of checks whose condition held.
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.exit_code == 0).count()
    }

    /// Number of checks whose condition did not hold.
    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    /// Total number of checks run.
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// Runs checklists one check at a time against a host.
pub struct ChecklistRunner<'a> {
    registry: &'a CheckRegistry,
    host: &'a dyn Host,
}

impl<'a> ChecklistRunner<'a> {
    /// Create a runner.
    pub fn new(registry: &'a CheckRegistry, host: &'a dyn Host) -> Self {
        Self { registry, host }
    }

    /// Run every check of every checklist in order.
    ///
    /// `on_report` is called after each check. The first environment error
    /// stops the run and is returned; reports collected so far are dropped.
    pub fn run<F>(&self, lists: &[Checklist], mut on_report: F) -> Result<RunSummary>
    where
        F: FnMut(&CheckReport),
    {
        let mut summary = RunSummary::default();
        for list in lists {
            tracing::info!(
                checklist = list.name.as_deref().unwrap_or("unnamed"),
                checks = list.checks.len(),
                "running checklist"
            );
            for entry in &list.checks {
                let result = self
                    .registry
                    .run(&entry.check, &entry.parameters, self.host)?;
                let report = CheckReport::new(&entry.check, &entry.parameters, &result);
                on_report(&report);
                summary.reports.push(report);
            }
        }
        Ok(summary)
    }
}
