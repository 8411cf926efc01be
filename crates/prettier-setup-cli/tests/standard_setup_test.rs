use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const GENERATED: &[&str] = &[
    ".prettierrc",
    ".prettierrc.json",
    ".prettierignore",
    ".vscode/settings.json",
];

fn prettier_setup() -> Command {
    let mut cmd = Command::cargo_bin("prettier-setup").unwrap();
    cmd.env_remove("PRETTIER_SETUP_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn read(tmp: &TempDir, name: &str) -> String {
    std::fs::read_to_string(tmp.path().join(name)).unwrap()
}

#[test]
fn test_help_lists_options() {
    prettier_setup()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--standard"))
        .stdout(predicate::str::contains("--dir"));
}

#[cfg(unix)]
#[test]
fn test_standard_writes_all_files_and_runs_formatter() {
    let tmp = TempDir::new().unwrap();
    tmp.child("prettier-setup.yaml")
        .write_str("formatter:\n  program: sh\n  args: [-c, touch formatted.marker]\n")
        .unwrap();

    prettier_setup()
        .args(["--standard", "--dir", tmp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("You're all set"));

    for name in GENERATED {
        tmp.child(name).assert(predicate::path::is_file());
    }
    // the formatter ran inside the target directory
    tmp.child("formatted.marker").assert(predicate::path::exists());

    let rc = read(&tmp, ".prettierrc");
    assert!(rc.contains("\"printWidth\": 100"));
    assert!(rc.contains("\"tabWidth\": 2"));
    assert_eq!(rc, read(&tmp, ".prettierrc.json"));
    assert!(read(&tmp, ".vscode/settings.json").contains("esbenp.prettier-vscode"));
    assert!(read(&tmp, ".prettierignore").lines().any(|l| l == "node_modules"));
}

#[cfg(unix)]
#[test]
fn test_standard_rerun_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let config = TempDir::new().unwrap();
    config
        .child("setup.yaml")
        .write_str("formatter:\n  program: \"true\"\n  args: []\n")
        .unwrap();
    let config_path = config.child("setup.yaml");

    let run = || {
        prettier_setup()
            .args(["--standard", "-C", tmp.path().to_str().unwrap()])
            .arg("--config")
            .arg(config_path.path())
            .assert()
            .success();
        GENERATED.iter().map(|name| read(&tmp, name)).collect::<Vec<_>>()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn test_formatter_failure_exits_with_1() {
    let tmp = TempDir::new().unwrap();
    tmp.child("prettier-setup.yaml")
        .write_str("formatter:\n  program: \"false\"\n  args: []\n")
        .unwrap();

    prettier_setup()
        .args(["--standard", "--dir", tmp.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("formatter `false` failed"))
        .stderr(predicate::str::contains("Something clearly went wrong!"));

    // already written files are kept
    tmp.child(".prettierrc").assert(predicate::path::is_file());
}

#[test]
fn test_missing_formatter_program_exits_with_1() {
    let tmp = TempDir::new().unwrap();
    tmp.child("prettier-setup.yaml")
        .write_str("formatter:\n  program: prettier-setup-missing-formatter\n")
        .unwrap();

    prettier_setup()
        .args(["--standard", "--dir", tmp.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("prettier-setup-missing-formatter"));
}

#[test]
fn test_invalid_config_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    tmp.child("prettier-setup.yaml")
        .write_str("formatter: [unclosed")
        .unwrap();

    prettier_setup()
        .args(["--standard", "--dir", tmp.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration file"));

    tmp.child(".prettierrc").assert(predicate::path::missing());
}

#[test]
fn test_missing_target_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");

    prettier_setup()
        .args(["--standard", "--dir", missing.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!missing.exists());
}

#[test]
fn test_interactive_without_terminal_writes_nothing() {
    let tmp = TempDir::new().unwrap();

    prettier_setup()
        .args(["--dir", tmp.path().to_str().unwrap()])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("prompt failed"));

    tmp.child(".prettierrc").assert(predicate::path::missing());
    tmp.child(".vscode").assert(predicate::path::missing());
}
