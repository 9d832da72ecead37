//! User and group checks.
//!
//! Groups come from `/etc/group`; users come from the system user database
//! through [`Host::lookup_user`], so NSS-backed accounts are visible too.

use super::contains;
use crate::check::{CheckDef, CheckResult, Parameters};
use crate::diagnostic;
use crate::error::{HostcheckError, Result};
use crate::host::{Host, UserInfo};
use crate::source::Source;
use crate::table::{tokenize, Separator};

/// Path of the group database.
pub const GROUP_FILE: &str = "/etc/group";

/// `name:password:gid:members`
const GROUP_FIELDS: usize = 4;

pub const CHECKS: &[CheckDef] = &[
    CheckDef {
        name: "GroupExists",
        summary: "A UNIX group exists",
        params: &["group"],
        run: group_exists,
    },
    CheckDef {
        name: "UserInGroup",
        summary: "A user is a listed member of a group",
        params: &["user", "group"],
        run: user_in_group,
    },
    CheckDef {
        name: "GroupId",
        summary: "A group has the given numeric id",
        params: &["group", "gid"],
        run: group_id,
    },
    CheckDef {
        name: "UserExists",
        summary: "A user exists, by name or uid",
        params: &["user"],
        run: user_exists,
    },
    CheckDef {
        name: "UserHasUID",
        summary: "A user has the given uid",
        params: &["user", "uid"],
        run: user_has_uid,
    },
    CheckDef {
        name: "UserHasGID",
        summary: "A user has the given primary gid",
        params: &["user", "gid"],
        run: user_has_gid,
    },
    CheckDef {
        name: "UserHasUsername",
        summary: "A user (usually given by uid) has the given login name",
        params: &["user", "username"],
        run: user_has_username,
    },
    CheckDef {
        name: "UserHasName",
        summary: "A user has the given display name",
        params: &["user", "name"],
        run: user_has_name,
    },
    CheckDef {
        name: "UserHasHomeDir",
        summary: "A user has the given home directory",
        params: &["user", "home"],
        run: user_has_home_dir,
    },
];

/// One entry of `/etc/group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub id: i64,
    pub users: Vec<String>,
}

/// Parse group entries from `/etc/group`-formatted text.
///
/// Lines with fewer than four fields are skipped. A gid that is not an
/// integer is an error.
pub fn parse_groups(text: &str) -> Result<Vec<Group>> {
    let table = tokenize(text, &Separator::newline(), &Separator::literal(":"))
        .retain_min_fields(GROUP_FIELDS);
    table.into_iter().map(|row| parse_group(&row)).collect()
}

fn parse_group(row: &[String]) -> Result<Group> {
    let id = row[2]
        .parse::<i64>()
        .map_err(|_| HostcheckError::MalformedSource {
            source_name: GROUP_FILE.to_string(),
            message: format!("could not parse id for group {}: {:?}", row[0], row[2]),
        })?;
    let users = if row[3].is_empty() {
        Vec::new()
    } else {
        Separator::literal(",")
            .split(&row[3])
            .into_iter()
            .map(str::to_string)
            .collect()
    };
    Ok(Group {
        name: row[0].clone(),
        id,
        users,
    })
}

/// All groups on the host.
pub fn groups(host: &dyn Host) -> Result<Vec<Group>> {
    parse_groups(&host.read(&Source::file(GROUP_FILE))?)
}

fn group_not_found(name: &str, groups: &[Group]) -> CheckResult {
    diagnostic::format(
        "Group not found",
        name,
        groups.iter().map(|g| g.name.clone()),
    )
}

fn group_exists(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let name = params.get(0)?;
    let groups = groups(host)?;
    Ok(CheckResult::check(groups.iter().any(|g| g.name == name), || {
        group_not_found(name, &groups)
    }))
}

fn user_in_group(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let user = params.get(0)?;
    let group = params.get(1)?;
    let groups = groups(host)?;
    let Some(found) = groups.iter().find(|g| g.name == group) else {
        return Ok(group_not_found(group, &groups));
    };
    Ok(CheckResult::check(contains(&found.users, user), || {
        diagnostic::format("User not found in group", user, found.users.iter().cloned())
    }))
}

fn group_id(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let name = params.get(0)?;
    let id = params.integer(1)?;
    let groups = groups(host)?;
    let Some(found) = groups.iter().find(|g| g.name == name) else {
        return Ok(group_not_found(name, &groups));
    };
    Ok(CheckResult::check(found.id == id, || {
        diagnostic::format(
            "Group does not have expected ID",
            &id.to_string(),
            [found.id.to_string()],
        )
    }))
}

/// Field of a user account that can be asserted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Uid,
    Gid,
    Username,
    Name,
    HomeDir,
}

impl UserField {
    /// Name used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            UserField::Uid => "Uid",
            UserField::Gid => "Gid",
            UserField::Username => "Username",
            UserField::Name => "Name",
            UserField::HomeDir => "HomeDir",
        }
    }

    /// The field's value, as a string.
    pub fn value(self, user: &UserInfo) -> String {
        match self {
            UserField::Uid => user.uid.to_string(),
            UserField::Gid => user.gid.to_string(),
            UserField::Username => user.username.clone(),
            UserField::Name => user.name.clone(),
            UserField::HomeDir => user.home_dir.clone(),
        }
    }
}

fn user_missing(name_or_uid: &str) -> CheckResult {
    diagnostic::format("User does not exist", name_or_uid, Vec::<String>::new())
}

fn user_exists(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    let user = params.get(0)?;
    let found = host.lookup_user(user)?;
    Ok(CheckResult::check(found.is_some(), || user_missing(user)))
}

fn user_has_field(
    params: &Parameters<'_>,
    host: &dyn Host,
    field: UserField,
) -> Result<CheckResult> {
    let user = params.get(0)?;
    let wanted = params.get(1)?;
    let Some(info) = host.lookup_user(user)? else {
        return Ok(user_missing(user));
    };
    let actual = field.value(&info);
    Ok(CheckResult::check(actual == wanted, || {
        diagnostic::format(
            &format!("User {} does not have expected {}", user, field.label()),
            wanted,
            [actual.clone()],
        )
    }))
}

fn user_has_uid(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    user_has_field(params, host, UserField::Uid)
}

fn user_has_gid(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    user_has_field(params, host, UserField::Gid)
}

fn user_has_username(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    user_has_field(params, host, UserField::Username)
}

fn user_has_name(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    user_has_field(params, host, UserField::Name)
}

fn user_has_home_dir(params: &Parameters<'_>, host: &dyn Host) -> Result<CheckResult> {
    user_has_field(params, host, UserField::HomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckRegistry;
    use crate::host::StubHost;

    const GROUPS: &str = "\
root:x:0:
sudo:x:27:alice
docker:x:999:alice,bob

broken:x
";

    fn host() -> StubHost {
        StubHost::new()
            .with_file(GROUP_FILE, GROUPS)
            .with_user(UserInfo {
                username: "alice".into(),
                uid: 1000,
                gid: 1000,
                name: "Alice Liddell".into(),
                home_dir: "/home/alice".into(),
            })
    }

    fn run(name: &str, params: &[&str]) -> Result<CheckResult> {
        let params: Vec<String> = params.iter().map(|s| s.to_string()).collect();
        CheckRegistry::new().run(name, &params, &host())
    }

    #[test]
    fn parses_groups_and_skips_short_lines() {
        let groups = parse_groups(GROUPS).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(
            groups[2],
            Group {
                name: "docker".into(),
                id: 999,
                users: vec!["alice".into(), "bob".into()],
            }
        );
        assert!(groups[0].users.is_empty());
    }

    #[test]
    fn malformed_gid_is_an_error() {
        let err = parse_groups("wheel:x:ten:alice\n").unwrap_err();
        assert!(matches!(err, HostcheckError::MalformedSource { .. }));
    }

    #[test]
    fn group_exists() {
        assert!(run("GroupExists", &["docker"]).unwrap().is_success());
        let result = run("GroupExists", &["admins"]).unwrap();
        assert!(result.message().contains("Found: root, sudo, docker"));
    }

    #[test]
    fn user_in_group_uses_both_parameters() {
        assert_eq!(run("UserInGroup", &["alice", "sudo"]).unwrap(), CheckResult::Passed);
        let result = run("UserInGroup", &["bob", "sudo"]).unwrap();
        assert_eq!(result.exit_code(), 1);
        assert!(result.message().contains("Wanted: bob"));
        assert!(result.message().contains("Found: alice"));
    }

    #[test]
    fn user_in_missing_group_reports_group() {
        let result = run("UserInGroup", &["alice", "wheel"]).unwrap();
        assert!(result.message().starts_with("Group not found"));
        assert!(result.message().contains("Wanted: wheel"));
    }

    #[test]
    fn group_id_matches() {
        assert!(run("GroupId", &["sudo", "27"]).unwrap().is_success());
        let result = run("GroupId", &["sudo", "28"]).unwrap();
        assert!(result.message().contains("Wanted: 28"));
        assert!(result.message().contains("Found: 27"));
    }

    #[test]
    fn group_id_rejects_non_numeric_parameter() {
        let err = run("GroupId", &["sudo", "twenty"]).unwrap_err();
        assert!(matches!(err, HostcheckError::InvalidParameter { position: 1, .. }));
    }

    #[test]
    fn user_exists_by_name_and_uid() {
        assert!(run("UserExists", &["alice"]).unwrap().is_success());
        assert!(run("UserExists", &["1000"]).unwrap().is_success());
        let result = run("UserExists", &["mallory"]).unwrap();
        assert!(result.message().contains("User does not exist"));
    }

    #[test]
    fn user_fields_compare_as_strings() {
        assert!(run("UserHasUID", &["alice", "1000"]).unwrap().is_success());
        assert!(run("UserHasGID", &["alice", "1000"]).unwrap().is_success());
        assert!(run("UserHasUsername", &["1000", "alice"]).unwrap().is_success());
        assert!(run("UserHasName", &["alice", "Alice Liddell"]).unwrap().is_success());
        assert!(run("UserHasHomeDir", &["alice", "/home/alice"]).unwrap().is_success());
    }

    #[test]
    fn user_field_mismatch_shows_actual_value() {
        let result = run("UserHasHomeDir", &["alice", "/srv/alice"]).unwrap();
        assert!(result.message().contains("expected HomeDir"));
        assert!(result.message().contains("Found: /home/alice"));
    }

    #[test]
    fn user_field_on_missing_user() {
        let result = run("UserHasUID", &["mallory", "0"]).unwrap();
        assert!(result.message().contains("User does not exist"));
    }

    #[test]
    fn field_labels_and_values() {
        let user = UserInfo {
            username: "u".into(),
            uid: 1,
            gid: 2,
            name: "N".into(),
            home_dir: "/h".into(),
        };
        assert_eq!(UserField::Gid.value(&user), "2");
        assert_eq!(UserField::HomeDir.label(), "HomeDir");
    }
}
