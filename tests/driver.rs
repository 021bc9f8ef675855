use std::process::{Command, Stdio};

use fib_range::{fibonacci, run, BoundedRange, DEFAULT_START, DEFAULT_STOP};

const EXPECTED: &str = "1\n1\n2\n3\n5\n8\n13\n21\n34\n55\n";

fn output_for(range: BoundedRange) -> String {
    let mut out = Vec::new();
    run(range, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_fib-range"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_span_prints_first_ten() {
    let output = output_for(BoundedRange::new(DEFAULT_START, DEFAULT_STOP));
    assert_eq!(output, EXPECTED);
}

#[test]
fn driver_matches_manual_next_loop() {
    let mut range = BoundedRange::new(0, 15);
    let mut expected = String::new();
    while let Some(v) = range.next() {
        expected.push_str(&format!("{}\n", fibonacci(v)));
    }
    assert_eq!(range.next(), None);
    assert_eq!(output_for(BoundedRange::new(0, 15)), expected);
}

#[test]
fn binary_prints_sequence_and_succeeds() {
    let output = binary().output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);
    assert!(output.stderr.is_empty());
}

#[test]
fn binary_ignores_arguments() {
    let output = binary().args(["0", "3", "--help"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), EXPECTED);
}

#[test]
fn binary_succeeds_when_stdout_is_closed() {
    let mut child = binary()
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert!(output.stderr.is_empty());
}
