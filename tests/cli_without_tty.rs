use assert_cmd::Command;

#[test]
fn refuses_to_start_without_a_tty() {
    let output = Command::cargo_bin("hangr")
        .unwrap()
        .write_stdin("")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("stdin must be a tty"), "stderr was: {stderr}");
}

#[test]
fn rejects_zero_chances_before_anything_else() {
    let output = Command::cargo_bin("hangr")
        .unwrap()
        .args(["--chances", "0"])
        .write_stdin("")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--chances"));
}
