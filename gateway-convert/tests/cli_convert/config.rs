use super::*;

#[test]
fn convert_takes_formats_from_config_file() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("convert.toml");
    let output_path = dir.path().join("out.json");
    fs::write(
        &config,
        "from = \"gateway\"\nto = \"control-plane\"\nencoding = \"json\"\n",
    )
    .expect("config write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--config")
        .arg(path_as_str(&config))
        .assert()
        .success();

    let raw = fs::read_to_string(&output_path).expect("read output");
    let json: serde_json::Value = serde_json::from_str(&raw).expect("json output");
    assert_eq!(json["service_packages"][0]["name"], "billing");
}

#[test]
fn command_line_flags_override_config_file() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("convert.toml");
    let output_path = dir.path().join("out.yaml");
    fs::write(&config, "from = \"control-plane\"\nto = \"gateway\"\n").expect("config write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--config")
        .arg(path_as_str(&config))
        .arg("--from")
        .arg("gateway")
        .arg("--to")
        .arg("control-plane")
        .assert()
        .success();

    let doc = parse(&fs::read(&output_path).expect("read output")).expect("yaml output");
    assert_eq!(doc.service_packages.len(), 2);
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("convert.toml");
    let output_path = dir.path().join("out.yaml");
    fs::write(&config, "from = [broken").expect("config write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gateway-convert"));
    cmd.arg("convert")
        .arg(fixture("fixtures/gateway-basic.yaml"))
        .arg("--output")
        .arg(path_as_str(&output_path))
        .arg("--config")
        .arg(path_as_str(&config))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));

    assert!(!output_path.exists());
}
