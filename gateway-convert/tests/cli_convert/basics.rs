use super::*;

#[test]
fn convert_gateway_to_control_plane() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("kong.yaml");
    let output_path = dir.path().join("konnect.yaml");

    fs::write(
        &input,
        "_format_version: \"1.1\"\nservices:\n- name: foo\n  host: foo.example.com\n",
    )
    .expect("src write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(path_as_str(&input))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--from")
        .arg("gateway")
        .arg("--to")
        .arg("control-plane")
        .assert()
        .success()
        .stdout(predicate::str::contains("services=0"))
        .stdout(predicate::str::contains("service_packages=1"));

    let converted = fs::read_to_string(&output_path).expect("converted file");
    assert!(converted.contains("placeholder description for foo service package"));
    assert!(converted.contains("type: gateway"));
    assert!(!converted.contains("\nservices:"));

    let doc = parse(converted.as_bytes()).expect("output parses");
    assert_eq!(doc.service_packages[0].name.as_deref(), Some("foo"));
}

#[test]
fn convert_accepts_mixed_case_and_legacy_format_names() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("out.yaml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-basic.yaml"))
        .arg("-o")
        .arg(path_as_str(&output_path))
        .arg("--from")
        .arg("Kong-Gateway")
        .arg("--to")
        .arg("KoNNect")
        .assert()
        .success();

    let doc = parse(&fs::read(&output_path).expect("read output")).expect("output parses");
    assert!(doc.services.is_empty());
    assert_eq!(doc.service_packages.len(), 2);
}

#[test]
fn convert_merges_multiple_inputs() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("out.yaml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/fragments/services.yaml"))
        .arg(fixture("fixtures/fragments/consumers.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--from")
        .arg("gateway")
        .arg("--to")
        .arg("control-plane")
        .assert()
        .success()
        .stdout(predicate::str::contains("service_packages=2"));

    let doc = parse(&fs::read(&output_path).expect("read output")).expect("output parses");
    let names: Vec<_> = doc
        .service_packages
        .iter()
        .filter_map(|p| p.name.as_deref())
        .collect();
    assert_eq!(names, vec!["orders", "payments"]);
}

#[test]
fn convert_reads_stdin_and_writes_stdout() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg("-")
        .arg("--output")
        .arg("-")
        .arg("--from")
        .arg("gateway")
        .arg("--to")
        .arg("control-plane")
        .write_stdin("services:\n- name: piped\n  host: piped.example.com\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("name: piped"))
        .stdout(predicate::str::contains("convert_summary").not());
}

#[test]
fn convert_writes_json_when_requested() {
    let dir = tempdir().expect("tempdir");
    let output_path = dir.path().join("out.json");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-basic.json"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--from")
        .arg("gateway")
        .arg("--to")
        .arg("control-plane")
        .arg("--encoding")
        .arg("json")
        .assert()
        .success();

    let raw = fs::read_to_string(&output_path).expect("read output");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json output");
    assert_eq!(json["service_packages"][0]["name"], "foo");
    assert_eq!(json["consumers"][0]["username"], "bob");
    assert!(json.get("services").is_none());
}
