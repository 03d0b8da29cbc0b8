use std::process::Command;

#[test]
fn stdout_carries_only_status_lines() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("assets");

    let output = Command::new(env!("CARGO_BIN_EXE_rootwise-assets"))
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--font")
        .arg(dir.path().join("missing.ttf"))
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 5, "{}", stdout);
    for line in &lines[..4] {
        assert!(line.starts_with("✅ Created "), "{}", line);
    }
    assert_eq!(lines[4], "🎉 All Rootwise branded assets generated!");

    // Debug logs still go somewhere, just not to stdout
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Rendering Leaf design"), "{}", stderr);
    assert!(out_dir.join("favicon.png").is_file());
}

#[test]
fn monogram_flag_changes_completion_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rootwise-assets"))
        .current_dir(dir.path())
        .args(["--design", "monogram", "--out-dir", "out"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("\n🎉 All assets generated successfully!\n"), "{}", stdout);
    assert!(dir.path().join("out").join("splash.png").is_file());
}
