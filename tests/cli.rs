//! End-to-end runs of the `pagewin` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A scratch home/config/working directory so runs never see real rc files.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    #[cfg_attr(any(target_os = "windows", target_os = "macos"), allow(dead_code))]
    fn global_config(&self) -> PathBuf {
        self.root().join("xdg").join("pagewin").join("config")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_pagewin"))
            .args(args)
            .current_dir(self.root())
            .env("HOME", self.root())
            .env("XDG_CONFIG_HOME", self.root().join("xdg"))
            .env("APPDATA", self.root().join("xdg"))
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_prints_window_for_current_page() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--page", "50", "--total-pages", "100"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 … 48 49 [50] 51 52 … 100\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_single_page_prints_nothing() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--total-pages", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_always_prints_single_page() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--total-pages", "1", "--always"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "[1]\n");
}

#[test]
fn test_page_past_end_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--page", "7", "--total-pages", "5"]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("cannot paginate page 7 of 5"), "{}", stderr(&output));
}

#[test]
fn test_unparseable_page_fails() {
    let sandbox = Sandbox::new();
    for bad in ["zero", "0", "-2"] {
        let output = sandbox.run(&[&format!("--page={bad}"), "--total-pages", "5"]);
        assert!(!output.status.success(), "page {bad} should be rejected");
        assert!(stderr(&output).contains("invalid page"), "{}", stderr(&output));
    }
}

#[test]
fn test_clamp_moves_page_onto_last() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--page", "40", "--total-pages", "5", "--clamp"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 2 3 4 [5]\n");
}

#[test]
fn test_items_derive_page_count() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--page", "13", "--items", "245", "--per-page", "20"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 … 11 12 [13]\n");
}

#[test]
fn test_missing_total_fails() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--page", "2"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--total-pages or --items"));
}

#[test]
fn test_json_format() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--page", "2", "--total-pages", "3", "--format", "json"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["current"], 2);
    assert_eq!(value["previous"], 1);
    assert_eq!(value["next"], 3);
    assert_eq!(value["tokens"].as_array().unwrap().len(), 3);
}

#[test]
fn test_perf_reports_timing_on_stderr() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--page", "50", "--total-pages", "100", "--perf"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1 … 48 49 [50] 51 52 … 100\n");
    let err = stderr(&output);
    assert!(err.contains("window.compute"), "missing perf scope: {err:?}");
    assert!(err.contains(" ms"), "missing elapsed time: {err:?}");
}

#[test]
fn test_local_rc_sets_defaults() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.root().join(".pagewinrc"), "# local\n--radius 1\n").unwrap();

    let output = sandbox.run(&["--page", "50", "--total-pages", "100"]);
    assert_eq!(stdout(&output), "1 … 49 [50] 51 … 100\n");

    let output = sandbox.run(&["--page", "50", "--total-pages", "100", "--radius", "0"]);
    assert_eq!(stdout(&output), "1 … [50] … 100\n", "cli should override local rc");
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
#[test]
fn test_save_and_clear_global_defaults() {
    let sandbox = Sandbox::new();
    let config = sandbox.global_config();

    let output = sandbox.run(&["--radius", "1", "--save"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let saved = std::fs::read_to_string(&config).unwrap();
    assert!(saved.contains("--radius 1"), "{saved}");

    let output = sandbox.run(&["--page", "50", "--total-pages", "100"]);
    assert_eq!(stdout(&output), "1 … 49 [50] 51 … 100\n");

    let output = sandbox.run(&["--clear"]);
    assert!(output.status.success());
    assert!(!config.exists());

    let output = sandbox.run(&["--page", "50", "--total-pages", "100"]);
    assert_eq!(stdout(&output), "1 … 48 49 [50] 51 52 … 100\n");
}
