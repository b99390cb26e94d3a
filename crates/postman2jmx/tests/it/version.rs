use crate::common::postman2jmx_command;

#[test]
fn version_flag_shows_version() {
    let mut cmd = postman2jmx_command();
    cmd.arg("--version");

    let output = cmd.output().expect("failed to execute postman2jmx");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.starts_with("postman2jmx "),
        "Expected version string starting with 'postman2jmx ', got: {stdout}"
    );
}

#[test]
fn short_version_flag_works() {
    let mut cmd = postman2jmx_command();
    cmd.arg("-V");

    let output = cmd.output().expect("failed to execute postman2jmx");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.starts_with("postman2jmx "),
        "Expected version string starting with 'postman2jmx ', got: {stdout}"
    );
}
