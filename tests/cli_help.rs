//! Help and version output.

mod common;

use common::{quetelet, stdout_str};

#[test]
fn help_mentions_interactive_mode() {
    let output = quetelet().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = stdout_str(&output);
    assert!(
        stdout.contains("Run 'quetelet' without arguments for an interactive session."),
        "help output should mention the interactive session; got:\n{stdout}"
    );
    assert!(stdout.contains("--weight"));
    assert!(stdout.contains("--height"));
    assert!(stdout.contains("--json"));
}

#[test]
fn version_prints_package_version() {
    let output = quetelet().arg("--version").output().unwrap();
    assert!(output.status.success());

    let stdout = stdout_str(&output);
    assert!(stdout.contains("quetelet"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
