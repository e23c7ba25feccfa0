use super::*;

#[test]
fn convert_rejects_reverse_direction() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("out.yaml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--from")
        .arg("control-plane")
        .arg("--to")
        .arg("gateway")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot convert from 'control-plane' to 'gateway' format",
        ));

    assert!(!output_path.exists());
}

#[test]
fn convert_rejects_identity_conversion() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("out.yaml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--from")
        .arg("gateway")
        .arg("--to")
        .arg("gateway")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot convert from 'gateway' to 'gateway' format",
        ));
}

#[test]
fn convert_rejects_unknown_format() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("out.yaml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--from")
        .arg("k42")
        .arg("--to")
        .arg("control-plane")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid format: 'k42'"));
}

#[test]
fn convert_requires_from_and_to() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("out.yaml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--to")
        .arg("control-plane")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing --from"));
}

#[test]
fn convert_fails_on_unnamed_service_without_output() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("out.yaml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-unnamed.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--from")
        .arg("gateway")
        .arg("--to")
        .arg("control-plane")
        .assert()
        .failure()
        .stderr(predicate::str::contains("doesn't have a name"));

    assert!(!output_path.exists());
}

#[test]
fn convert_fails_on_missing_input_without_output() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("out.yaml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(path_as_str(&dir.path().join("absent.yaml")))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--from")
        .arg("gateway")
        .arg("--to")
        .arg("control-plane")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yaml"));

    assert!(!output_path.exists());
}

#[test]
fn convert_rejects_output_overwriting_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("kong.yaml");
    fs::write(&input, "services:\n- name: foo\n").expect("src write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(&input)
        .arg("--output")
        .arg(&input)
        .arg("--from")
        .arg("gateway")
        .arg("--to")
        .arg("control-plane")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "refusing to overwrite source file",
        ));

    let untouched = fs::read_to_string(&input).expect("read input");
    assert_eq!(untouched, "services:\n- name: foo\n");
}
