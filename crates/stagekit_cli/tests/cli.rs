use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stagekit"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn stagekit")
}

fn setup_sources(root: &Path) {
    for name in ["css", "img", "js", "templates"] {
        fs::create_dir_all(root.join(name)).expect("mkdir");
    }
    fs::write(root.join("css/a.css"), "a").expect("write");
    fs::write(root.join("img/b.png"), "b").expect("write");
    fs::write(root.join("js/c.js"), "c").expect("write");
    fs::write(root.join("templates/d.html"), "d").expect("write");
}

#[test]
fn copies_assets_and_exits_zero() {
    let tmp = TempDir::new().expect("tempdir");
    setup_sources(tmp.path());
    fs::create_dir_all(tmp.path().join("testing")).expect("mkdir");

    let output = run_in(tmp.path());
    assert!(output.status.success(), "{output:?}");
    assert!(output.stdout.is_empty());

    let mut l_names = fs::read_dir(tmp.path().join("testing"))
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    l_names.sort();
    assert_eq!(l_names, vec!["a.css", "b.png", "c.js", "d.html"]);
}

#[test]
fn missing_destination_exits_nonzero() {
    let tmp = TempDir::new().expect("tempdir");
    setup_sources(tmp.path());

    let output = run_in(tmp.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Destination directory does not exist"), "{stderr}");
    assert!(!tmp.path().join("testing").exists());
}

#[test]
fn rejects_unexpected_arguments() {
    let tmp = TempDir::new().expect("tempdir");
    let output = Command::new(env!("CARGO_BIN_EXE_stagekit"))
        .current_dir(tmp.path())
        .arg("--dry-run")
        .output()
        .expect("spawn stagekit");
    assert!(!output.status.success());
}
