//! Common test utilities for Quetelet CLI tests.
//!
//! Every integration test spawns the real binary; these helpers wire up
//! piped stdio so tests can feed input and capture the full transcript.

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Command for the compiled quetelet binary with a neutral environment.
pub fn quetelet() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quetelet"));
    // Disable color for consistent output
    cmd.env("NO_COLOR", "1");
    cmd.env("TERM", "dumb");
    cmd
}

/// Run the binary with `args`, feeding `input` on stdin, and wait for exit.
pub fn run_with_input(args: &[&str], input: &str) -> Output {
    let mut child = quetelet()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn quetelet");

    child
        .stdin
        .as_mut()
        .expect("child stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write to child stdin");

    child.wait_with_output().expect("failed to wait for quetelet")
}

/// Stdout of `output` as UTF-8.
pub fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of `output` as UTF-8.
pub fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
