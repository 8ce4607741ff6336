use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn rtt_plot() -> Command {
    Command::cargo_bin("rtt_plot").unwrap()
}

#[test]
fn missing_input_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    rtt_plot()
        .current_dir(dir.path())
        .args(&["-o", "rtt.svg"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not open ./rtt.txt"));
    assert!(!dir.path().join("rtt.svg").exists());
}

#[test]
fn malformed_line_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rtt.txt");
    fs::write(&input, "1 5\nbad line\n").unwrap();
    let output = dir.path().join("rtt.svg");
    rtt_plot()
        .arg("--file")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
    assert!(!output.exists());
}

#[test]
fn empty_input_is_not_plotted() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rtt.txt");
    fs::write(&input, "\n  \n").unwrap();
    rtt_plot()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("rtt.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no samples to plot"));
}

#[test]
fn unsupported_output_is_rejected_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    rtt_plot()
        .current_dir(dir.path())
        .args(&["-o", "rtt.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format"))
        .stderr(predicate::str::contains("could not open").not());
}

#[test]
fn plots_to_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rtt.txt");
    fs::write(&input, "0.0 10.5\n1.0 12.3\n\n2.0 9.8\n").unwrap();
    let output = dir.path().join("rtt.svg");
    rtt_plot()
        .arg("-f")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("3 samples from 0 s to 2 s"))
        .stderr(predicate::str::contains("chart written to"));
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("RTT vs Time"));
    assert!(svg.contains("RTT (ms)"));
    assert_eq!(svg.matches("<circle").count(), 3);
}

#[test]
fn default_input_is_read_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("rtt.txt"), "0 1\n1 2\n").unwrap();
    rtt_plot()
        .current_dir(dir.path())
        .args(&["-o", "out.png"])
        .assert()
        .success();
    assert!(dir.path().join("out.png").exists());
}

#[test]
fn version_flag() {
    rtt_plot()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rtt_plot"));
}
