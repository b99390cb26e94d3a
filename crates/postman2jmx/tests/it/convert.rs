//! End-to-end conversion tests through the binary.

use std::path::Path;

use tempfile::TempDir;

use crate::common::{fixture, postman2jmx_command};

fn run(input: &Path, output: &Path, environment: Option<&Path>) -> std::process::Output {
    let mut cmd = postman2jmx_command();
    cmd.arg(input).arg(output);
    if let Some(environment) = environment {
        cmd.arg("--environment").arg(environment);
    }
    cmd.output().expect("failed to execute postman2jmx")
}

#[test]
fn converts_basic_collection() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("basic.jmx");

    let result = run(&fixture("basic.json"), &output, None);
    let stdout = String::from_utf8_lossy(&result.stdout);

    assert!(result.status.success());
    assert!(stdout.contains("Successfully converted"));

    let text = fs_err::read_to_string(&output).unwrap();
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains("testname=\"Fixture Collection\""));
    assert!(text.contains("testname=\"Get Users\""));
    assert!(text.contains("<stringProp name=\"HTTPSampler.domain\">example.com</stringProp>"));
    assert!(text.contains("<stringProp name=\"HTTPSampler.path\">/api/users</stringProp>"));
    assert!(text.contains("<stringProp name=\"HTTPSampler.port\">8080</stringProp>"));
    assert!(text.contains("<stringProp name=\"Header.name\">Content-Type</stringProp>"));
}

#[test]
fn missing_environment_file_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.jmx");
    let environment = dir.path().join("missing-env.json");

    let result = run(&fixture("basic.json"), &output, Some(&environment));
    let stdout = String::from_utf8_lossy(&result.stdout);

    assert!(result.status.success());
    assert!(stdout.contains(&format!(
        "Warning: Environment file '{}' not found. Skipping environment variables.",
        environment.display()
    )));

    let text = fs_err::read_to_string(&output).unwrap();
    assert!(!text.contains("Environment Variables"));
}

#[test]
fn unparseable_environment_file_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.jmx");
    let environment = dir.path().join("broken-env.json");
    fs_err::write(&environment, "{ not json").unwrap();

    let result = run(&fixture("basic.json"), &output, Some(&environment));
    let stdout = String::from_utf8_lossy(&result.stdout);

    assert!(result.status.success());
    assert!(stdout.contains(&format!(
        "Warning: Could not parse environment file '{}'. Skipping environment variables.",
        environment.display()
    )));
    assert!(output.is_file());
}

#[test]
fn environment_variables_keep_only_enabled_entries() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.jmx");

    let result = run(
        &fixture("basic.json"),
        &output,
        Some(&fixture("environment.json")),
    );
    assert!(result.status.success());

    let text = fs_err::read_to_string(&output).unwrap();
    assert!(text.contains("testname=\"Environment Variables\""));
    assert!(text.contains("<stringProp name=\"Argument.name\">host</stringProp>"));
    assert!(text.contains("<stringProp name=\"Argument.name\">token</stringProp>"));
    assert!(!text.contains("disabled_var"));
}

#[test]
fn missing_collection_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.jmx");

    let result = run(&dir.path().join("missing.json"), &output, None);
    let stderr = String::from_utf8_lossy(&result.stderr);

    assert!(!result.status.success());
    assert_eq!(result.status.code(), Some(2));
    assert!(stderr.contains("error"));
    assert!(!output.exists());
}

#[test]
fn malformed_collection_is_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("garbage.json");
    let output = dir.path().join("out.jmx");
    fs_err::write(&input, "{ this is not json").unwrap();

    let result = run(&input, &output, None);
    let stderr = String::from_utf8_lossy(&result.stderr);

    assert!(!result.status.success());
    assert!(stderr.contains("failed to parse collection file"));
    assert!(!output.exists());
}

#[test]
fn nested_folders_flatten_to_sampler_list() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.jmx");

    let result = run(&fixture("nested-folders.json"), &output, None);
    assert!(result.status.success());

    let text = fs_err::read_to_string(&output).unwrap();
    assert_eq!(text.matches("<HTTPSamplerProxy").count(), 3);
    assert!(!text.contains("Folder 1"));

    let first = text.find("testname=\"Request 1.1\"").unwrap();
    let second = text.find("testname=\"Request 1.1.1\"").unwrap();
    let third = text.find("testname=\"Request 2\"").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.jmx");
    let second = dir.path().join("second.jmx");

    assert!(run(&fixture("basic.json"), &first, None).status.success());
    assert!(run(&fixture("basic.json"), &second, None).status.success());

    let first = fs_err::read(&first).unwrap();
    let second = fs_err::read(&second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn output_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.jmx");
    fs_err::write(&output, "stale content").unwrap();

    let result = run(&fixture("basic.json"), &output, None);
    assert!(result.status.success());

    let text = fs_err::read_to_string(&output).unwrap();
    assert!(!text.contains("stale content"));
    assert!(text.contains("jmeterTestPlan"));
}

#[test]
fn quiet_suppresses_stdout() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.jmx");

    let mut cmd = postman2jmx_command();
    cmd.arg(fixture("basic.json")).arg(&output).arg("--quiet");
    let result = cmd.output().expect("failed to execute postman2jmx");

    assert!(result.status.success());
    assert!(result.stdout.is_empty());
    assert!(output.is_file());
}
