use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use chrono::NaiveDate;
use diary_core::storage::{EntryFilter, NewEntry, SqliteStorage};
use diary_core::StorageEngine;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_diary"))
}

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("c")).expect("create config dir");
        std::fs::create_dir_all(dir.path().join("d")).expect("create data dir");
        Self { dir }
    }

    fn diary_path(&self) -> PathBuf {
        self.dir.path().join("diary.db")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("c")
    }

    fn data_home(&self) -> PathBuf {
        self.dir.path().join("d")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env_remove("DIARY_PATH")
            .env_remove("DIARY_CONFIG")
            .env_remove("DIARY_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Run the binary against the sandbox diary with `input` piped to stdin.
    fn run(&self, args: &[&str], input: &str) -> Output {
        let mut cmd = self.command();
        cmd.arg("--diary").arg(self.diary_path()).args(args);
        run_with_input(cmd, input)
    }

    fn seed(&self, entries: &[(&str, u32)]) {
        let mut storage = SqliteStorage::open(&self.diary_path()).expect("open diary");
        for (content, day) in entries {
            let at = NaiveDate::from_ymd_opt(2024, 5, *day)
                .and_then(|d| d.and_hms_opt(18, 45, 0))
                .expect("valid");
            storage
                .insert_entry(&NewEntry::new(*content).with_timestamp(at))
                .expect("seed entry");
        }
    }

    fn contents(&self) -> Vec<String> {
        let storage = SqliteStorage::open(&self.diary_path()).expect("open diary");
        storage
            .list_entries(&EntryFilter::All, None)
            .expect("list")
            .into_iter()
            .map(|entry| entry.content)
            .collect()
    }
}

fn run_with_input(mut cmd: Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn diary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for diary");
    assert!(
        output.status.success(),
        "diary failed: stdout={}, stderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_add_then_view() {
    let sandbox = Sandbox::new();

    // Text runs to end of input, so the save prompt and the menu both see EOF.
    let add = sandbox.run(&[], "a\nHello from the CLI\n");
    assert!(stdout(&add).contains("Your entry was saved successfully."));
    assert_eq!(sandbox.contents(), ["Hello from the CLI"]);

    let view = sandbox.run(&[], "v\n\nq\n");
    let output = stdout(&view);
    assert!(output.contains("Page 1 of 1."));
    assert!(output.contains("Entry 1 of 1."));
    assert!(output.contains("Hello from the CLI"));
    assert!(output.contains("No more entries."));
}

#[test]
fn test_cli_creates_database_on_first_run() {
    let sandbox = Sandbox::new();
    assert!(!sandbox.diary_path().exists());

    let output = sandbox.run(&[], "q\n");

    assert!(stdout(&output).contains("Press 'q' to quit"));
    assert!(sandbox.diary_path().exists());
}

#[test]
fn test_cli_search_pages_matches() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("alpha one", 1), ("beta", 2), ("alpha two", 3), ("alpha three", 4)]);

    let output = sandbox.run(&["--page-size", "2"], "s\nalpha\nn\nn\nn\n");
    let text = stdout(&output);

    assert!(text.contains("Page 1 of 2.\nEntry 1 of 3."));
    assert!(text.contains("Page 2 of 2.\nEntry 3 of 3."));
    assert!(!text.contains("beta"));
    let newest = text.find("alpha three").expect("newest shown");
    let oldest = text.find("alpha one").expect("oldest shown");
    assert!(newest < oldest);
}

#[test]
fn test_cli_date_search_reprompts() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("early", 1), ("late", 20)]);

    let output = sandbox.run(&[], "t\nlast week\n2024-05-10\n\n");
    let text = stdout(&output);

    assert!(text.contains("Invalid date"));
    assert!(text.contains("early"));
    assert!(!text.contains("late"));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let sandbox = Sandbox::new();
    sandbox.seed(&[("keep me", 1), ("drop me", 2)]);

    sandbox.run(&[], "v\nd\nn\nq\n");
    assert_eq!(sandbox.contents().len(), 2);

    sandbox.run(&[], "v\nd\ny\nq\n");
    assert_eq!(sandbox.contents(), ["keep me"]);
}

#[test]
fn test_cli_uses_config_file() {
    let sandbox = Sandbox::new();
    let db_path = sandbox.dir.path().join("configured.db");
    write_config(&sandbox.config_home(), &db_path, 1);

    let mut storage = SqliteStorage::open(&db_path).expect("open");
    for content in ["first", "second"] {
        storage.insert_entry(&NewEntry::new(content)).expect("insert");
    }
    drop(storage);

    let output = run_with_input(sandbox.command(), "v\n\n\nq\n");
    let text = stdout(&output);
    assert!(text.contains("Page 1 of 2."));
    assert!(text.contains("Page 2 of 2."));
}

#[test]
fn test_cli_rejects_zero_page_size() {
    let sandbox = Sandbox::new();
    let mut cmd = sandbox.command();
    cmd.arg("--diary")
        .arg(sandbox.diary_path())
        .arg("--page-size")
        .arg("0")
        .stdin(Stdio::null());
    let output = cmd.output().expect("run diary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Page size must be at least 1"));
}

fn write_config(config_home: &Path, diary_path: &Path, page_size: usize) {
    let dir = config_home.join("diary");
    std::fs::create_dir_all(&dir).expect("create config dir");
    std::fs::write(
        dir.join("config.toml"),
        format!(
            "[diary]\npath = \"{}\"\n\n[browse]\npage_size = {}\n",
            diary_path.to_string_lossy(),
            page_size
        ),
    )
    .expect("write config");
}
