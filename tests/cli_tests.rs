use assert_cmd::Command;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::fs;

// ============================================================================
// Helper Functions
// ============================================================================

fn bin(name: &str) -> Command {
    Command::cargo_bin(name).unwrap()
}

const TWO_EVENTS: &str = ">>Alpha\n<<Beta\n";

// ============================================================================
// Default Invocation
// ============================================================================

#[test]
fn test_htimeline_prints_boxes_and_newline() {
    let expected = "\
+-------+   +------+
| >     |   | <    |
| Alpha |-->| Beta |
+-------+   +------+
";
    bin("htimeline")
        .write_stdin(TWO_EVENTS)
        .assert()
        .success()
        .stdout(expected)
        .stderr("");
}

#[test]
fn test_vtimeline_prints_axis() {
    let expected = format!(
        "{axis}|     \n{axis}|     \n{axis}|\nAlpha {dashes}>+\n{axis}|\n{axis}+<------- Beta\n{axis}|\n",
        axis = " ".repeat(14),
        dashes = "-".repeat(7),
    );
    bin("vtimeline")
        .write_stdin(TWO_EVENTS)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_empty_stdin() {
    bin("htimeline").write_stdin("").assert().success().stdout("\n");
    bin("vtimeline")
        .write_stdin("")
        .assert()
        .success()
        .stdout("     |     \n     |     \n|\n");
}

#[test]
fn test_invalid_utf8_still_succeeds() {
    bin("htimeline")
        .write_stdin(&b">>caf\xe9\n"[..])
        .assert()
        .success()
        .stdout(predicate::str::contains("caf\u{FFFD}"));
}

#[test]
fn test_tag_delimiters_per_binary() {
    bin("htimeline")
        .write_stdin(">>Task\n:mytag:\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("| :mytag: |"));
    bin("vtimeline")
        .write_stdin(">>Task\n:mytag:\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(">+ mytag\n"));
}

#[test]
fn test_combined_binary_layout_flag() {
    bin("org-ascii-timeline")
        .args(["--layout", "horizontal"])
        .write_stdin(TWO_EVENTS)
        .assert()
        .success()
        .stdout(predicate::str::contains("| Alpha |-->| Beta |"));
    bin("org-ascii-timeline")
        .write_stdin(TWO_EVENTS)
        .assert()
        .success()
        .stdout(predicate::str::contains("+<------- Beta"));
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_prefix_flag() {
    bin("vtimeline")
        .args(["--prefix", "# "])
        .write_stdin(TWO_EVENTS)
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.lines().all(|row| row.starts_with("# "))
        }));
}

#[test]
fn test_config_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline.toml");
    fs::write(
        &path,
        "[vertical]\nstrip_tag_delimiters = false\nline_prefix = \";; \"\n",
    )
    .unwrap();

    bin("vtimeline")
        .arg("--config")
        .arg(&path)
        .write_stdin(">>Task\n:mytag:\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(";; Task ------->+ :mytag:"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[vertical\n").unwrap();

    bin("htimeline")
        .arg("--config")
        .arg(&path)
        .write_stdin(TWO_EVENTS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn test_unknown_log_level_fails() {
    bin("htimeline")
        .args(["--log-level", "chatty"])
        .write_stdin(TWO_EVENTS)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown log level"));
}

#[test]
fn test_debug_log_goes_to_file_not_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("timeline.log");

    bin("htimeline")
        .args(["--log-level", "debug", "--log-file"])
        .arg(&log_path)
        .write_stdin("stray\n>>Alpha\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("+-------+"))
        .stderr("");

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("skipping unrecognized line"));
    assert!(log.contains("opening Left Plain event"));
}

#[test]
fn test_emit_events_json() {
    let output = bin("vtimeline")
        .args(["--emit", "events"])
        .write_stdin(">=Me\n<=You\n<!Alarm\n:now:\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["left_title"], "Me");
    assert_eq!(json["right_title"], "You");
    assert_eq!(json["events"][0]["side"], "right");
    assert_eq!(json["events"][0]["kind"], "alert");
    assert_eq!(json["events"][0]["tag"], "now");
}

// ============================================================================
// Error Reporting
// ============================================================================

/// Run `htimeline` with stdout on `/dev/full`, so the final write fails.
#[cfg(target_os = "linux")]
fn run_with_full_stdout(extra_args: &[&OsStr]) -> std::process::Output {
    use assert_cmd::cargo::CommandCargoExt;
    use std::process::{Command as StdCommand, Stdio};

    let full = fs::File::options().write(true).open("/dev/full").unwrap();
    StdCommand::cargo_bin("htimeline")
        .unwrap()
        .args(extra_args)
        .stdin(Stdio::null())
        .stdout(full)
        .output()
        .unwrap()
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_failure_is_reported_once() {
    let output = run_with_full_stdout(&[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr was {stderr:?}");
    assert!(stderr.starts_with("error: failed to write output"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_failure_is_logged_when_logging_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("timeline.log");

    let output = run_with_full_stdout(&[OsStr::new("--log-file"), log_path.as_os_str()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr was {stderr:?}");

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("failed to write output"));
}
