use assert_cmd::Command;

fn run_help(args: &[&str]) {
    let mut cmd = Command::cargo_bin("skillcheck").expect("binary under test");
    cmd.args(args).arg("--help").assert().success();
}

#[test]
fn every_cli_command_has_help_path() {
    run_help(&[]);
    run_help(&["analyze"]);
    run_help(&["diff"]);
    run_help(&["validate"]);
}

#[test]
fn version_flag_is_wired() {
    let mut cmd = Command::cargo_bin("skillcheck").expect("binary under test");
    cmd.arg("--version").assert().success();
}
