use assert_cmd::Command;

pub fn chips_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chips").unwrap();
    cmd.env_remove("CHIPS_CONFIG");
    cmd.env_remove("CHIPS_LOG");
    cmd
}
