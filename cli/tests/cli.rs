use assert_cmd::Command;
use serde_json::Value;

const AEROSPIKE_CLUSTER: &str = "k8s_asdb_aerospike_com_aerospike_cluster_v1beta1";

fn tfk8s() -> Command {
    let mut cmd = Command::cargo_bin("tfk8s").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn list() {
    let output = tfk8s().arg("list").assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec![AEROSPIKE_CLUSTER]);
}

#[test]
fn schema() {
    let output = tfk8s().arg("schema").assert().success().get_output().clone();
    let schemas: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schemas["provider"]["attributes"].as_array().unwrap().len(), 3);
    let data_source = &schemas["data_source_schemas"][AEROSPIKE_CLUSTER];
    let names: Vec<_> = data_source["attributes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["id", "api_version", "kind", "metadata", "spec"]);
}

#[test]
fn schema_of_one_type() {
    let output = tfk8s()
        .args(["schema", "--type", AEROSPIKE_CLUSTER])
        .assert()
        .success()
        .get_output()
        .clone();
    let schema: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(schema["attributes"][3]["name"], "metadata");
    assert_eq!(schema["attributes"][3]["mode"], "required");
}

#[test]
fn schema_of_unknown_type() {
    tfk8s()
        .args(["schema", "--type", "k8s_nothing"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn offline_read_fails() {
    let output = tfk8s()
        .args([
            "--offline",
            "read",
            "--namespace",
            "aerospike",
            "--name",
            "aerocluster",
        ])
        .assert()
        .failure()
        .code(1)
        .get_output()
        .clone();
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Provider in Offline Mode"), "{}", stderr);
}

#[test]
fn read_requires_a_name() {
    tfk8s()
        .args(["--offline", "read", "--namespace", "aerospike"])
        .assert()
        .failure();
}

#[test]
fn read_requires_a_namespace() {
    let output = tfk8s()
        .args(["--offline", "read", "--name", "aerocluster"])
        .assert()
        .failure()
        .get_output()
        .clone();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--namespace"), "{}", stderr);
    assert!(!stderr.contains("Provider in Offline Mode"), "{}", stderr);
}
