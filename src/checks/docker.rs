//! Docker checks.
//!
//! `docker images` and `docker ps -a` align columns with runs of spaces,
//! and fields such as STATUS ("Up 3 hours") contain single spaces, so both
//! are tokenized with [`Separator::RunOfWhitespace`].

use super::{contains, read_table};
use crate::check::{CheckDef, CheckResult, Parameters};
use crate::diagnostic;
use crate::error::Result;
use crate::host::Host;
use crate::source::Source;
use crate::table::Separator;

/// REPOSITORY column of `docker images`.
const IMAGE_REPOSITORY: usize = 0;
/// IMAGE column of `docker ps -a`.
const PS_IMAGE: usize = 1;
/// STATUS column of `docker ps -a`.
const PS_STATUS: usize = 4;

pub const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "DockerImage",
        summary: "A Docker image is pulled on the host",
        params: &["image"],
        run: docker_image,
    },
    CheckDef {
        name: "DockerRunning",
        summary: "A container from the given image is running",
        params: &["image"],
        run: docker_running,
    },
];

/// Repository names of all pulled images.
pub fn pulled_images(host: &dyn Host) -> Result<Vec<String>> {
    let table = read_table(
        host,
        &Source::command("docker", ["images"]),
        &Separator::RunOfWhitespace,
    )?;
    Ok(table.column(IMAGE_REPOSITORY, true))
}

/// Images of every container whose status starts with "Up".
pub fn running_containers(host: &dyn Host) -> Result<Vec<String>> {
    let table = read_table(
        host,
        &Source::command("docker", ["ps", "-a"]),
        &Separator::RunOfWhitespace,
    )?;
    Ok(table
        .data_rows()
        .iter()
        .filter(|row| {
            row.get(PS_STATUS)
                .is_some_and(|status| status.contains("Up"))
        })
        .filter_map(|row| row.get(PS_IMAGE).cloned())
        .collect())
}

fn docker_image(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let name = params.get(0)?;
    let images = pulled_images(host)?;
    Ok(CheckResult::check(contains(&images, name), || {
        diagnostic::format("Docker image was not found", name, images.iter().cloned())
    }))
}

fn docker_running(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let name = params.get(0)?;
    let running = running_containers(host)?;
    Ok(CheckResult::check(contains(&running, name), || {
        diagnostic::format("Docker container not running", name, running.iter().cloned())
    }))
}
