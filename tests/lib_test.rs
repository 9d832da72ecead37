//! Integration tests for the public library API.
//!
//! Checks run against a `StubHost` so nothing here depends on the machine
//! running the tests.

use std::net::{IpAddr, Ipv4Addr};

use hostcheck::check::CheckResult;
use hostcheck::checks::CheckRegistry;
use hostcheck::config::{parse_checklist, validate};
use hostcheck::diagnostic;
use hostcheck::host::{Protocol, StubHost, UserInfo};
use hostcheck::runner::ChecklistRunner;
use hostcheck::table::{column, tokenize, Separator};
use hostcheck::HostcheckError;

const DOCKER_IMAGES: &str = "\
REPOSITORY          TAG       IMAGE ID       CREATED        SIZE
ubuntu              latest    2dc39ba059dc   2 weeks ago    77.8MB
postgres            15        a2dc6e2c8ab3   3 weeks ago    379MB
";

const PROC_NET_TCP: &str = "\
  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
   0: 0100007F:1F90 00000000:0000 0A 00000000:00000000 00:00000000 00000000  1000        0 26301 1
";

fn params(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn host() -> StubHost {
    StubHost::new()
        .with_command("docker", ["images"], DOCKER_IMAGES)
        .with_file("/etc/group", "sudo:x:27:alice\n")
        .with_file("/proc/net/tcp", PROC_NET_TCP)
        .with_user(UserInfo {
            username: "alice".into(),
            uid: 1000,
            gid: 1000,
            name: "Alice".into(),
            home_dir: "/home/alice".into(),
        })
        .with_interface("lo", true, &[IpAddr::V4(Ipv4Addr::LOCALHOST)])
        .with_resolvable("localhost")
        .with_reachable(Protocol::Tcp, "localhost:22")
}

#[test]
fn colon_rows_recover_every_field() {
    let table = tokenize(
        "wheel:x:10:alice,bob\n",
        &Separator::newline(),
        &Separator::literal(":"),
    );
    assert_eq!(table.rows()[0], params(&["wheel", "x", "10", "alice,bob"]));
}

#[test]
fn run_of_whitespace_keeps_single_spaces() {
    let table = tokenize(
        "app-1   Up 3 hours   mycontainer app\n",
        &Separator::newline(),
        &Separator::RunOfWhitespace,
    );
    assert_eq!(table.rows()[0], params(&["app-1", "Up 3 hours", "mycontainer app"]));
}

#[test]
fn column_skips_header_and_short_rows() {
    let table = tokenize(
        "NAME ID\na 1\nb\nc 3\n",
        &Separator::newline(),
        &Separator::Whitespace,
    );
    assert_eq!(column(&table, 1, true), vec!["1", "3"]);
}

#[test]
fn empty_found_renders_distinctly() {
    let none = diagnostic::format("Group not found", "wheel", Vec::<String>::new());
    let some = diagnostic::format("Group not found", "wheel", ["sudo"]);
    assert_ne!(none, some);
    assert_eq!(
        none,
        diagnostic::format("Group not found", "wheel", Vec::<String>::new())
    );
}

#[test]
fn docker_image_end_to_end() {
    let registry = CheckRegistry::new();
    let host = host();

    let found = registry.run("DockerImage", &params(&["ubuntu"]), &host).unwrap();
    assert_eq!((found.exit_code(), found.message()), (0, ""));

    let missing = registry
        .run("DockerImage", &params(&["nonexistent-image"]), &host)
        .unwrap();
    assert_eq!(missing.exit_code(), 1);
    assert!(missing.message().contains("nonexistent-image"));
    assert!(missing.message().contains("ubuntu, postgres"));
}

#[test]
fn user_in_group_end_to_end() {
    let registry = CheckRegistry::new();
    let host = host();

    let member = registry
        .run("UserInGroup", &params(&["alice", "sudo"]), &host)
        .unwrap();
    assert_eq!(member, CheckResult::Passed);

    let stranger = registry
        .run("UserInGroup", &params(&["bob", "sudo"]), &host)
        .unwrap();
    assert_eq!(stranger.exit_code(), 1);
    assert!(stranger.message().contains("Found: alice"));
}

#[test]
fn port_end_to_end() {
    let registry = CheckRegistry::new();
    let host = host();

    assert!(registry
        .run("Port", &params(&["8080"]), &host)
        .unwrap()
        .is_success());
    assert_eq!(
        registry
            .run("Port", &params(&["9999"]), &host)
            .unwrap()
            .exit_code(),
        1
    );
}

#[test]
fn checklist_runs_in_order() {
    let list = parse_checklist(
        r#"{"Name": "box", "Checklist": [
            {"Check": "DockerImage", "Parameters": ["ubuntu"]},
            {"Check": "UserHasUID", "Parameters": ["alice", 1000]},
            {"Check": "Host", "Parameters": ["localhost"]},
            {"Check": "TCP", "Parameters": ["localhost:22"]},
            {"Check": "Up", "Parameters": ["lo"]},
            {"Check": "GroupExists", "Parameters": ["wheel"]}
        ]}"#,
        std::path::Path::new("box.json"),
    )
    .unwrap();
    let registry = CheckRegistry::new();
    validate(std::slice::from_ref(&list), &registry).unwrap();

    let host = host();
    let runner = ChecklistRunner::new(&registry, &host);
    let mut seen = Vec::new();
    let summary = runner
        .run(&[list], |report| seen.push(report.check.clone()))
        .unwrap();

    assert_eq!(
        seen,
        ["DockerImage", "UserHasUID", "Host", "TCP", "Up", "GroupExists"]
    );
    assert_eq!(summary.passed(), 5);
    assert_eq!(summary.failed(), 1);
    assert!(!summary.all_passed());
}

#[test]
fn environment_error_is_not_a_failed_check() {
    let registry = CheckRegistry::new();
    let host = StubHost::new();

    let err = registry
        .run("GroupExists", &params(&["sudo"]), &host)
        .unwrap_err();
    assert!(matches!(err, HostcheckError::SourceUnreadable { .. }));
}
