use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("topic-atlas").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn split_help_runs() {
    let mut cmd = Command::cargo_bin("topic-atlas").expect("binary exists");
    cmd.args(["split", "--help"]).assert().success();
}
