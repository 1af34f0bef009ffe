use std::{fs, path::Path, process::Command};

const BIN: &str = env!("CARGO_BIN_EXE_subject_files_md5");

fn make_subject(root: &Path) -> std::path::PathBuf {
    let subject = root.join("bert");
    fs::create_dir_all(subject.join("surf")).unwrap();
    fs::create_dir_all(subject.join("mri")).unwrap();
    fs::write(subject.join("mri").join("T1.mgz"), "").unwrap();
    fs::write(subject.join("surf").join("lh.white"), "hello\n").unwrap();
    subject
}

#[test]
fn prints_checksums_in_table_order() {
    let dir = tempfile::tempdir().unwrap();
    let subject = make_subject(dir.path());

    let out = Command::new(BIN)
        .arg(&subject)
        .args(["--print", "md5"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "d41d8cd98f00b204e9800998ecf8427e",
            "b1946ac92492d2347c6235b4d2611184"
        ]
    );
}

#[test]
fn prints_r_paths() {
    let dir = tempfile::tempdir().unwrap();
    let subject = make_subject(dir.path());

    let out = Command::new(BIN)
        .arg(&subject)
        .args(["--print", "Rpath"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "c(base_path_subject, 'mri','T1.mgz'),",
            "c(base_path_subject, 'surf','lh.white'),"
        ]
    );
}

#[test]
fn copies_files() {
    let dir = tempfile::tempdir().unwrap();
    let subject = make_subject(dir.path());
    let upload = dir.path().join("upload");
    fs::create_dir(&upload).unwrap();

    let out = Command::new(BIN)
        .arg(&subject)
        .arg("--copy")
        .arg(&upload)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(upload.join("surf").join("lh.white")).unwrap(),
        "hello\n"
    );
    assert!(upload.join("mri").join("T1.mgz").is_file());
}

#[test]
fn missing_copy_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let subject = make_subject(dir.path());

    let out = Command::new(BIN)
        .arg(&subject)
        .arg("--copy")
        .arg(dir.path().join("nope"))
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(!dir.path().join("nope").exists());
}

#[test]
fn missing_subject_dir_fails() {
    let dir = tempfile::tempdir().unwrap();

    let out = Command::new(BIN).arg(dir.path().join("ghost")).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn unknown_print_mode_fails() {
    let dir = tempfile::tempdir().unwrap();
    let subject = make_subject(dir.path());

    let out = Command::new(BIN)
        .arg(&subject)
        .args(["--print", "sha1"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}
