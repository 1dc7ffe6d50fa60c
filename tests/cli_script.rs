mod common;

use assert_cmd::Command;
use common::{home_with_snapshot, sample_snapshot, temp_home};
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn script(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("pantry_core_cli").unwrap();
    cmd.env("PANTRY_CORE_CLI_SCRIPT", "1")
        .env("PANTRY_CORE_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_each_line() {
    let home = home_with_snapshot(&sample_snapshot());
    script(&home)
        .write_stdin("# weekly review\nstock\nfinancial\nexit\nnutrition\n")
        .assert()
        .success()
        .stdout(contains("Stock health").and(contains("Cost per meal")))
        .stdout(contains("Nutrition per meal").not());
}

#[test]
fn script_errors_do_not_stop_the_run() {
    let home = home_with_snapshot(&sample_snapshot());
    script(&home)
        .write_stdin("nutriton\ncheck\n")
        .assert()
        .success()
        .stderr(contains("Did you mean `nutrition`?"))
        .stdout(contains("`Bread`"));
}

#[test]
fn process_options_apply_to_every_line() {
    let home = temp_home();
    let data = home_with_snapshot(&sample_snapshot()).join("data");
    script(&home)
        .args(["--data-dir"])
        .arg(&data)
        .write_stdin("suppliers --json\n")
        .assert()
        .success()
        .stdout(contains("\"supplier_name\": \"Feira\""));
}

#[test]
fn quoted_arguments_are_split_like_a_shell() {
    let home = home_with_snapshot(&sample_snapshot());
    script(&home)
        .write_stdin("help 'stock'\nhelp \"unterminated\n")
        .assert()
        .success()
        .stdout(contains("Usage: stock"))
        .stderr(contains("could not parse"));
}
