mod common;
use common::{ok_json, rts, serve};
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const PASSWORD: &str = "correct horse";

/// Isolated home directory with a config file pointing at `api_url`.
struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: tempdir().expect("tempdir"),
        }
    }

    fn path(&self) -> &Path {
        self.home.path()
    }

    fn config(&self) -> PathBuf {
        self.path().join("rtimesheet.conf")
    }

    fn point_at(&self, api_url: &str) {
        let yaml = format!(
            "api_url: {api_url}\ncredentials_file: {}\nclock_check: false\nsnark_probability: 0.0\n",
            self.path().join("creds").join("credentials.enc").display()
        );
        fs::write(self.config(), yaml).expect("write config");
    }

    fn cmd(&self) -> Command {
        let mut cmd = rts();
        cmd.env("HOME", self.path())
            .env("NO_COLOR", "1")
            .env("RTIMESHEET_PASSWORD", PASSWORD)
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config());
        cmd
    }

    fn init(&self) {
        self.point_at("http://127.0.0.1:9/Timesheet");
        self.cmd()
            .arg("init")
            .write_stdin("KEY12345\nEMP1\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Your API key is: KEY12..."))
            .stdout(predicate::str::contains("Your employee ID is: EMP1"));
    }
}

fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[test]
fn test_version() {
    rts()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "rtimesheet {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_invalid_explicit_time_fails_before_anything_else() {
    let sb = Sandbox::new();
    sb.point_at("http://127.0.0.1:9/Timesheet");

    sb.cmd()
        .args(["in", "9:99"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn test_commands_require_init() {
    let sb = Sandbox::new();
    sb.point_at("http://127.0.0.1:9/Timesheet");

    sb.cmd()
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("rtimesheet init"));
}

#[test]
fn test_bad_report_ranges() {
    let sb = Sandbox::new();
    sb.point_at("http://127.0.0.1:9/Timesheet");

    sb.cmd()
        .args(["report", "--start", "2020-02-01", "--end", "2020-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is after end"));

    sb.cmd()
        .args(["report", "--start", "2020-13-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_malformed_config_is_reported() {
    let sb = Sandbox::new();
    fs::write(sb.config(), "snark_probability: lots\n").expect("write config");

    sb.cmd()
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_aborted_init_writes_nothing() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("init")
        .env("RTIMESHEET_PASSWORD", "")
        .write_stdin("KEY12345\nEMP1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("password must not be empty"));

    sb.cmd().arg("init").write_stdin("KEY12345\n").assert().failure();

    assert!(!sb.config().exists());
    assert!(!sb.path().join(".rtimesheet").exists());
}

#[test]
fn test_init_writes_missing_config() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("init")
        .write_stdin("KEY12345\nEMP1\n")
        .assert()
        .success();

    assert!(sb.config().exists());
    assert!(sb.path().join(".rtimesheet").join("credentials.enc").exists());
}

#[test]
fn test_init_then_key() {
    let sb = Sandbox::new();
    sb.init();

    sb.cmd()
        .arg("key")
        .assert()
        .success()
        .stdout(predicate::str::contains("APIKey     : KEY12..."))
        .stdout(predicate::str::contains("EmployeeID : EMP1"));

    sb.cmd()
        .args(["key", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("APIKey     : KEY12345"));

    sb.cmd()
        .arg("key")
        .env("RTIMESHEET_PASSWORD", "wrong")
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong password"));
}

#[test]
fn test_report_over_range() {
    let sb = Sandbox::new();
    sb.init();

    let (url, server) = serve(vec![ok_json(
        r#"{"isError":false,"Message":"","Result":[
            {"TimesheetDate":"2020-01-01","TimeIn1":"08:00:00","TimeOut1":"12:00:00",
             "TimeIn2":"13:00:00","TimeOut2":"17:00:00"},
            {"TimesheetDate":"2020-01-03","TimeIn1":"09:00:00"}
        ]}"#,
    )]);
    sb.point_at(&url);

    sb.cmd()
        .args(["report", "--start", "2020-01-01", "--end", "2020-01-03", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("01-Jan Wed: 8.0h"))
        .stdout(predicate::str::contains("02-Jan Thu: -"))
        .stdout(predicate::str::contains("03-Jan Fri: 0.0h (incomplete)"))
        .stdout(predicate::str::contains("Total: 8.0h"));

    let bodies = server.join().expect("server thread");
    assert!(bodies[0].contains(r#""StartDate":"2020-01-01""#));
}

#[test]
fn test_report_to_json_file() {
    let sb = Sandbox::new();
    sb.init();

    let (url, server) = serve(vec![ok_json(
        r#"{"isError":false,"Message":"","Result":[
            {"TimesheetDate":"2020-01-01","TimeIn1":"08:00:00","TimeOut1":"16:00:00"}
        ]}"#,
    )]);
    sb.point_at(&url);
    let out = sb.path().join("out").join("report.json");

    sb.cmd()
        .args(["report", "-s", "2020-01-01", "-e", "2020-01-02", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));
    server.join().expect("server thread");

    let json: Value = serde_json::from_str(&fs::read_to_string(&out).expect("read report"))
        .expect("report is JSON");
    assert_eq!(json["total_hours"], 8.0);
    assert_eq!(json["days"][0]["hours"], 8.0);
    assert_eq!(json["days"][1]["has_data"], false);
    assert!(json["days"][1]["hours"].is_null());
}

#[test]
fn test_ls_with_no_records_warns() {
    let sb = Sandbox::new();
    sb.init();

    let (url, server) = serve(vec![ok_json(r#"{"isError":false,"Message":"","Result":""}"#)]);
    sb.point_at(&url);

    sb.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No check-ins found."));
    server.join().expect("server thread");
}

#[test]
fn test_check_in_creates_todays_record() {
    let sb = Sandbox::new();
    sb.init();

    let (url, server) = serve(vec![
        ok_json(r#"{"isError":false,"Message":"","Result":""}"#),
        ok_json(r#"{"isError":false,"Status":0,"Message":"Saved"}"#),
    ]);
    sb.point_at(&url);

    sb.cmd()
        .args(["in", "10:15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked in at 10:15"));

    let bodies = server.join().expect("server thread");
    let create: Value = serde_json::from_str(&bodies[1]).expect("create body");
    assert_eq!(create["Action"], "CreateNewTimesheet");
    assert_eq!(create["TimesheetDate"], today().as_str());
    assert_eq!(create["TimeIn1"], "10:15");
}

#[test]
fn test_rejected_punch_exits_with_two() {
    let sb = Sandbox::new();
    sb.init();

    let fetched = format!(
        r#"{{"isError":false,"Message":"","Result":[{{"TimesheetDate":"{}","TimeIn1":"08:00:00"}}]}}"#,
        today()
    );
    let (url, server) = serve(vec![ok_json(&fetched)]);
    sb.point_at(&url);

    sb.cmd()
        .args(["in", "11:00"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("can't check in"));

    let bodies = server.join().expect("server thread");
    assert_eq!(bodies.len(), 1);
}
