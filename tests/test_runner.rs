use std::path::Path;
use std::process::Output;

use assert_cmd::Command;

include!(concat!(env!("OUT_DIR"), "/test_files.rs"));

// These functions are used by the included tests above.
// See `build.rs` for the code that generates the tests.

fn do_test(filename: &Path) {
    let expected_path = filename.with_extension("expected");
    let expected = std::fs::read_to_string(&expected_path)
        .unwrap_or_else(|_| panic!("failed to read {}", expected_path.display()));

    let output = run_file(filename);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.trim_end(),
        expected.trim_end(),
        "generated output != expected output"
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.trim_end(), "", "script produced errors");
}

fn run_file(filename: &Path) -> Output {
    let mut cmd = Command::cargo_bin("monkey").unwrap();
    cmd.arg(filename).output().unwrap()
}
