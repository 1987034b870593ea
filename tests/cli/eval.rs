use crate::calcmcp;

#[test]
fn eval_prints_formatted_result() {
    let output = calcmcp()
        .args(["eval", "2 + 2"])
        .output()
        .expect("failed to run calcmcp");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Result: 2 + 2 = 4\n"
    );
}

#[test]
fn eval_formats_fractions_to_three_significant_figures() {
    let output = calcmcp()
        .args(["eval", "1 / 3"])
        .output()
        .expect("failed to run calcmcp");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Result: 1 / 3 = 0.333\n"
    );
}

#[test]
fn eval_reports_failures_without_failing_the_process() {
    let output = calcmcp()
        .args(["eval", "2 +"])
        .output()
        .expect("failed to run calcmcp");

    // Evaluation failures are part of the tool contract, not process errors.
    assert!(output.status.success());
    assert!(
        String::from_utf8_lossy(&output.stdout).starts_with("Calculation failed: ")
    );
}

#[test]
fn no_command_prints_help() {
    let output = calcmcp().output().expect("failed to run calcmcp");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage:"));
}
