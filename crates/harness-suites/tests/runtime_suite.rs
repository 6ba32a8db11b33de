#![cfg(unix)]

mod support;

use std::time::Duration;

use harness_suites::{run_case, CaseFailure, RuntimeSuite};
use support::{shell_toolchain, write};

#[test]
fn address_shifted_output_passes_and_value_change_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "addr.wacc", "read v\necho \"addr=0xffaa00 result=$v\"\n");
    write(root, "addr.five.input", "5\n");
    write(root, "addr.five.output", "addr=0x1a2b result=5\n");
    write(root, "addr.six.input", "6\n");
    write(root, "addr.six.output", "addr=0x1a2b result=5\n");

    let suite = RuntimeSuite::discover(root, shell_toolchain(Duration::from_secs(5))).expect("discovery");
    let toolchain = shell_toolchain(Duration::from_secs(5));
    let cases = suite.cases();
    assert_eq!(cases.len(), 2);

    assert!(run_case(&toolchain, &cases[0]).is_ok());
    match run_case(&toolchain, &cases[1]) {
        Err(CaseFailure::Mismatch(m)) => {
            assert_eq!(m.actual_stdout, "addr=0xffaa00 result=6\n");
            assert_eq!(m.expected_stdout, "addr=0x1a2b result=5\n");
        }
        other => panic!("expected mismatch, got {other:?}"),
    }
}

#[test]
fn exit_code_fixture_is_enforced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "div.wacc", "echo 'divide by zero'\nexit 255\n");
    write(root, "div.zero.input", "");
    write(root, "div.zero.output", "divide by zero\n");
    write(root, "div.zero.exit", "255\n");
    write(root, "div.wrong.input", "\n");
    write(root, "div.wrong.output", "divide by zero\n");

    let toolchain = shell_toolchain(Duration::from_secs(5));
    let suite = RuntimeSuite::discover(root, toolchain.clone()).expect("discovery");
    let verdicts: Vec<bool> = suite.cases().iter().map(|c| run_case(&toolchain, c).is_ok()).collect();
    // orden por id: "wrong" < "zero"
    assert_eq!(verdicts, vec![false, true]);
}

#[test]
fn pipeline_timeout_fails_only_that_case() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "hang.wacc", "sleep 10\n");
    write(root, "hang.a.input", "");
    write(root, "hang.a.output", "");

    let toolchain = shell_toolchain(Duration::from_millis(300));
    let suite = RuntimeSuite::discover(root, toolchain.clone()).expect("discovery");
    match run_case(&toolchain, &suite.cases()[0]) {
        Err(CaseFailure::Pipeline(e)) => assert!(e.is_timeout(), "{e}"),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[test]
fn trials_run_through_libtest_and_are_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();
    write(root, "ok.wacc", "cat\n");
    write(root, "ok.a.input", "hello\n");
    write(root, "ok.a.output", "hello\n");
    write(root, "bad.wacc", "echo nope\n");
    write(root, "bad.a.input", "");
    write(root, "bad.a.output", "yes\n");

    let suite = RuntimeSuite::discover(root, shell_toolchain(Duration::from_secs(5))).expect("discovery");
    assert_eq!(suite.trials().len(), 2);

    for _ in 0..2 {
        let conclusion = suite.run(Some(2));
        assert_eq!(conclusion.num_passed, 1);
        assert_eq!(conclusion.num_failed, 1);
        assert!(conclusion.has_failed());
    }
}
