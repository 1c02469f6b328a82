//! End-to-end tests for the `assistant-bot` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn bot() -> Command {
    let mut cmd = Command::cargo_bin("assistant-bot").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn full_session() {
    bot()
        .write_stdin("hello\nadd John 0501234567\nchange John 0679999999\nphone John\nall\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to the assistant bot!\n"))
        .stdout(predicate::str::contains("Contact updated."))
        .stdout(predicate::str::contains("John: 0679999999"))
        .stdout(predicate::str::ends_with("Good bye!\n"));
}

#[test]
fn errors_are_replies_not_failures() {
    bot()
        .write_stdin("phone\nphone Nobody\nadd OnlyName\nfly\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the argument for the command"))
        .stdout(predicate::str::contains("Contact not found."))
        .stdout(predicate::str::contains("Give me name and phone please."))
        .stdout(predicate::str::contains("Invalid command."));
}

#[test]
fn end_of_input_exits_cleanly() {
    bot().write_stdin("hello\n").assert().success();
}
