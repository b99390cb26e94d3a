use crate::common::postman2jmx_command;

#[test]
fn help_flag_shows_usage() {
    let mut cmd = postman2jmx_command();
    cmd.arg("--help");

    let output = cmd.output().expect("failed to execute postman2jmx");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Convert a Postman collection to a JMeter test plan."));
    assert!(stdout.contains("<INPUT>"));
    assert!(stdout.contains("<OUTPUT>"));
    assert!(stdout.contains("--environment"));
}

#[test]
fn missing_arguments_fail_with_usage() {
    let mut cmd = postman2jmx_command();

    let output = cmd.output().expect("failed to execute postman2jmx");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Usage"));
}
