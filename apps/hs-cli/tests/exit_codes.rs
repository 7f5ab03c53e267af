//! Runs the built binary and checks messages and exit statuses.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Output};

fn hs_cli<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_hs-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn hs-cli")
}

fn demo(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to apps
    path.pop(); // go to repo root
    path.push("demos");
    path.push("networks");
    path.push(name);
    path
}

#[test]
fn demo_network_succeeds() {
    let input = demo("two_zone.inp");
    let out = hs_cli([&input]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Zones:"));
    assert!(stdout.contains("\"north\""));
    assert!(stdout.contains("\"south\""));
}

#[test]
fn json_report_lists_zones() {
    let input = demo("two_zone.inp");
    let out = hs_cli([OsStr::new("--json"), input.as_os_str()]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("\"zones\""));
}

#[test]
fn two_arguments_exit_one() {
    let out = hs_cli(["net.inp", "extra.inp"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid number of arguments."));
}

#[test]
fn missing_file_exits_one() {
    let out = hs_cli(["missing.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&out.stderr)
            .contains("'missing.txt' is not a valid '.inp' file.")
    );
}

#[test]
fn unknown_flag_exits_one() {
    let input = demo("two_zone.inp");
    let out = hs_cli([OsStr::new("--bogus"), input.as_os_str()]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn broken_network_is_unexpected_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.inp");
    std::fs::write(&input, "[JUNCTIONS]\nA\n[PIPES]\nP1 A NOWHERE 1 1 1\n").unwrap();

    let out = hs_cli([&input]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed to run EPANET simulation due to an unexpected error:"));
    assert!(stderr.contains("NOWHERE"));
}
